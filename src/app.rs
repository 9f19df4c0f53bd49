//! Folio Admin App
//!
//! Picks the view for the current admin page and frames it with the
//! section nav.

use leptos::prelude::*;

use crate::components::{AdminNav, PageForm, PortfolioForm, PostForm, ResourceList, TemplateEditor};
use crate::config::AdminConfig;
use crate::context::AdminContext;
use crate::models::ResourceKind;
use crate::notify;
use crate::route::AdminRoute;

#[component]
pub fn App() -> impl IntoView {
    let route = AdminRoute::parse(&notify::current_path());
    let config = AdminConfig::from_window();
    tracing::debug!(?route, api_base = %config.api_base, "admin app mounted");

    provide_context(AdminContext::new(config, route));

    view! {
        <div class="admin-layout">
            <AdminNav />
            <main class="admin-content">
                {route_view(route)}
            </main>
        </div>
    }
}

fn route_view(route: AdminRoute) -> AnyView {
    match route {
        AdminRoute::List(kind) => view! { <ResourceList kind=kind /> }.into_any(),
        AdminRoute::New(kind) => form_view(kind, None),
        AdminRoute::Edit(kind, id) => form_view(kind, Some(id)),
        AdminRoute::Templates => view! { <TemplateEditor /> }.into_any(),
        AdminRoute::NotFound => view! {
            <div class="not-found">
                <h1>"Page not found"</h1>
                <a href=AdminRoute::List(ResourceKind::Posts).href()>"Back to posts"</a>
            </div>
        }
        .into_any(),
    }
}

fn form_view(kind: ResourceKind, id: Option<i64>) -> AnyView {
    match kind {
        ResourceKind::Posts => view! { <PostForm id=id /> }.into_any(),
        ResourceKind::Pages => view! { <PageForm id=id /> }.into_any(),
        ResourceKind::Portfolio => view! { <PortfolioForm id=id /> }.into_any(),
    }
}
