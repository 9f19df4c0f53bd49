//! Admin Nav Component
//!
//! Tab bar for switching between the admin sections.

use leptos::prelude::*;

use crate::context::use_admin_context;
use crate::models::ResourceKind;
use crate::route::AdminRoute;

#[component]
pub fn AdminNav() -> impl IntoView {
    let route = use_admin_context().route;
    let current = route.section();
    let templates_class = if route == AdminRoute::Templates { "admin-tab active" } else { "admin-tab" };

    view! {
        <nav class="admin-tab-bar">
            {ResourceKind::ALL.iter().map(|&kind| {
                let tab_class = if current == Some(kind) { "admin-tab active" } else { "admin-tab" };
                view! {
                    <a class=tab_class href=AdminRoute::List(kind).href()>
                        {kind.heading()}
                    </a>
                }
            }).collect_view()}
            <a class=templates_class href=AdminRoute::Templates.href()>
                "Templates"
            </a>
        </nav>
    }
}
