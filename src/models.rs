//! Frontend Models
//!
//! Data structures matching the backend's JSON, and the row view-models
//! the list pages render.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

// ========================
// Resources
// ========================

/// The three managed collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Posts,
    Pages,
    Portfolio,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [ResourceKind::Posts, ResourceKind::Pages, ResourceKind::Portfolio];

    /// URL segment shared by the API and the admin routes
    pub fn segment(self) -> &'static str {
        match self {
            ResourceKind::Posts => "posts",
            ResourceKind::Pages => "pages",
            ResourceKind::Portfolio => "portfolio",
        }
    }

    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.segment() == segment)
    }

    pub fn api_path(self) -> String {
        format!("/api/{}", self.segment())
    }

    pub fn admin_path(self) -> String {
        format!("/admin/{}", self.segment())
    }

    /// Singular, lowercase, used inside messages
    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Posts => "post",
            ResourceKind::Pages => "page",
            ResourceKind::Portfolio => "portfolio item",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            ResourceKind::Posts => "Posts",
            ResourceKind::Pages => "Pages",
            ResourceKind::Portfolio => "Portfolio",
        }
    }

    pub fn columns(self) -> &'static [&'static str] {
        match self {
            ResourceKind::Posts => &["Title", "Status"],
            ResourceKind::Pages => &["Title", "Slug", "In Nav", "Order"],
            ResourceKind::Portfolio => &["Title", "Image", "Order"],
        }
    }

    /// Decode raw list entries into row view-models for this collection
    pub fn decode_rows(self, values: Vec<Value>) -> ApiResult<Vec<RowView>> {
        match self {
            ResourceKind::Posts => decode_as::<Post>(self, values),
            ResourceKind::Pages => decode_as::<Page>(self, values),
            ResourceKind::Portfolio => decode_as::<PortfolioItem>(self, values),
        }
    }
}

fn decode_as<R: ListRow + DeserializeOwned>(kind: ResourceKind, values: Vec<Value>) -> ApiResult<Vec<RowView>> {
    values
        .into_iter()
        .map(|v| {
            serde_json::from_value::<R>(v)
                .map(|r| r.row_view(kind))
                .map_err(|e| ApiError::Decode(e.to_string()))
        })
        .collect()
}

/// Blog post (matches backend)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub tags: String,
    #[serde(rename = "featuredImage")]
    pub featured_image: String,
    pub published: bool,
    #[serde(skip_serializing)]
    pub created_at: Option<String>,
}

/// Static page (matches backend)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Page {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub show_in_nav: bool,
    pub sort_order: i64,
}

/// Portfolio entry (matches backend)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioItem {
    pub id: i64,
    pub title: String,
    pub short_description: String,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
    pub showcase_image: Option<String>,
    pub sort_order: i64,
}

// ========================
// Row View-Models
// ========================

/// One table cell, independent of how it ends up in the DOM
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Cell {
    Text(String),
    Badge { label: &'static str, active: bool },
    Thumbnail { src: String, alt: String },
    Placeholder(&'static str),
}

/// One rendered list row. Keyed as a whole so an edited row re-renders
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowView {
    pub id: i64,
    pub cells: Vec<Cell>,
    pub edit_href: String,
}

/// A model that can appear as a list row
pub trait ListRow {
    fn id(&self) -> i64;

    fn cells(&self) -> Vec<Cell>;

    fn row_view(&self, kind: ResourceKind) -> RowView {
        RowView {
            id: self.id(),
            cells: self.cells(),
            edit_href: format!("{}/{}/edit", kind.admin_path(), self.id()),
        }
    }
}

impl ListRow for Post {
    fn id(&self) -> i64 {
        self.id
    }

    fn cells(&self) -> Vec<Cell> {
        let status = if self.published { "Published" } else { "Draft" };
        vec![
            Cell::Text(self.title.clone()),
            Cell::Badge { label: status, active: self.published },
        ]
    }
}

impl ListRow for Page {
    fn id(&self) -> i64 {
        self.id
    }

    fn cells(&self) -> Vec<Cell> {
        let nav = if self.show_in_nav { "Yes" } else { "No" };
        vec![
            Cell::Text(self.title.clone()),
            Cell::Text(self.slug.clone()),
            Cell::Badge { label: nav, active: self.show_in_nav },
            Cell::Text(self.sort_order.to_string()),
        ]
    }
}

impl ListRow for PortfolioItem {
    fn id(&self) -> i64 {
        self.id
    }

    fn cells(&self) -> Vec<Cell> {
        let thumbnail = match self.showcase_image.as_deref().filter(|s| !s.is_empty()) {
            Some(src) => Cell::Thumbnail { src: src.to_string(), alt: self.title.clone() },
            None => Cell::Placeholder("No image"),
        };
        vec![
            Cell::Text(self.title.clone()),
            thumbnail,
            Cell::Text(self.sort_order.to_string()),
        ]
    }
}

// ========================
// Pagination
// ========================

/// Pagination metadata of one list response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub page: u32,
    pub limit: u32,
    pub total: u32,
    pub total_pages: u32,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self { page: 1, limit: 1, total: 0, total_pages: 0 }
    }
}

// ========================
// Template Files
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Dir,
    File,
}

/// One entry of the template directory listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileTreeNode {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub editable: bool,
    #[serde(default)]
    pub children: Vec<FileTreeNode>,
}

impl FileTreeNode {
    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Dir
    }
}
