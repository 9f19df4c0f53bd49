//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::commands::HttpAdminApi;
use crate::config::AdminConfig;
use crate::route::AdminRoute;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AdminContext {
    config: StoredValue<AdminConfig>,
    /// Route the page was loaded with
    pub route: AdminRoute,
}

impl AdminContext {
    pub fn new(config: AdminConfig, route: AdminRoute) -> Self {
        Self { config: StoredValue::new(config), route }
    }

    pub fn config(&self) -> AdminConfig {
        self.config.get_value()
    }

    /// Client for one operation. `reqwest::Client` is cheap to build on wasm.
    pub fn api(&self) -> HttpAdminApi {
        self.config.with_value(HttpAdminApi::new)
    }
}

pub fn use_admin_context() -> AdminContext {
    expect_context::<AdminContext>()
}
