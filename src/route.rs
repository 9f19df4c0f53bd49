//! Admin Routes
//!
//! The admin is served as separate server pages; the app picks its view
//! from `window.location.pathname`.

use crate::models::ResourceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminRoute {
    List(ResourceKind),
    New(ResourceKind),
    Edit(ResourceKind, i64),
    Templates,
    NotFound,
}

impl AdminRoute {
    pub fn parse(path: &str) -> Self {
        let segments: Vec<&str> = path.trim_matches('/').split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            ["admin"] => AdminRoute::List(ResourceKind::Posts),
            ["admin", "settings", "templates"] => AdminRoute::Templates,
            ["admin", resource] => ResourceKind::from_segment(resource).map_or(AdminRoute::NotFound, AdminRoute::List),
            ["admin", resource, "new"] => ResourceKind::from_segment(resource).map_or(AdminRoute::NotFound, AdminRoute::New),
            ["admin", resource, id, "edit"] => match (ResourceKind::from_segment(resource), id.parse::<i64>()) {
                (Some(kind), Ok(id)) if id > 0 => AdminRoute::Edit(kind, id),
                _ => AdminRoute::NotFound,
            },
            _ => AdminRoute::NotFound,
        }
    }

    pub fn href(self) -> String {
        match self {
            AdminRoute::List(kind) => kind.admin_path(),
            AdminRoute::New(kind) => format!("{}/new", kind.admin_path()),
            AdminRoute::Edit(kind, id) => format!("{}/{}/edit", kind.admin_path(), id),
            AdminRoute::Templates => "/admin/settings/templates".to_string(),
            AdminRoute::NotFound => "/admin".to_string(),
        }
    }

    /// Which nav entry to highlight
    pub fn section(self) -> Option<ResourceKind> {
        match self {
            AdminRoute::List(kind) | AdminRoute::New(kind) | AdminRoute::Edit(kind, _) => Some(kind),
            _ => None,
        }
    }
}
