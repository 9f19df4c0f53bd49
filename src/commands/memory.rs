//! In-memory `AdminApi` for controller tests.
//!
//! Mirrors the backend's paging and slug-conflict behaviour closely enough
//! to drive the list, form and template flows without a server.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use serde_json::{json, Value};

use super::{AdminApi, ImageUpload};
use crate::error::{ApiError, ApiResult};
use crate::listing::{parse_listing, Listing};
use crate::models::{FileTreeNode, ResourceKind, RowView};

#[derive(Default)]
pub(crate) struct MemoryApi {
    rows: RefCell<HashMap<ResourceKind, Vec<Value>>>,
    files: RefCell<BTreeMap<String, String>>,
    tree: RefCell<Vec<FileTreeNode>>,
    failures: RefCell<Vec<ApiError>>,
    scheduled: RefCell<Vec<(usize, ApiError)>>,
    requests: Cell<usize>,
    bare_lists: Cell<bool>,
    shrink: Cell<usize>,
}

impl MemoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, kind: ResourceKind, rows: Vec<Value>) {
        self.rows.borrow_mut().insert(kind, rows);
    }

    pub fn seed_titles(&self, kind: ResourceKind, count: i64) {
        let rows = (1..=count)
            .map(|id| json!({"id": id, "title": format!("Row {id}"), "slug": format!("row-{id}")}))
            .collect();
        self.seed(kind, rows);
    }

    pub fn seed_file(&self, path: &str, content: &str) {
        self.files.borrow_mut().insert(path.to_string(), content.to_string());
    }

    pub fn seed_tree(&self, tree: Vec<FileTreeNode>) {
        *self.tree.borrow_mut() = tree;
    }

    /// Answer list requests with a bare array, like the older handlers.
    pub fn serve_bare_lists(&self) {
        self.bare_lists.set(true);
    }

    /// Drop `count` rows from the end before answering each list
    /// request, as if someone else kept deleting.
    pub fn shrink_per_list(&self, count: usize) {
        self.shrink.set(count);
    }

    /// The next request fails with `err` instead of running.
    pub fn fail_next(&self, err: ApiError) {
        self.failures.borrow_mut().push(err);
    }

    /// Let `skip` requests through, then fail the one after with `err`.
    pub fn fail_after(&self, skip: usize, err: ApiError) {
        let at = self.requests.get() + skip + 1;
        self.scheduled.borrow_mut().push((at, err));
    }

    pub fn count(&self, kind: ResourceKind) -> usize {
        self.rows.borrow().get(&kind).map_or(0, Vec::len)
    }

    pub fn file(&self, path: &str) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }

    /// Requests that reached the fake, failed ones included
    pub fn requests(&self) -> usize {
        self.requests.get()
    }

    fn enter(&self) -> ApiResult<()> {
        let n = self.requests.get() + 1;
        self.requests.set(n);
        let mut scheduled = self.scheduled.borrow_mut();
        if let Some(pos) = scheduled.iter().position(|(at, _)| *at == n) {
            return Err(scheduled.remove(pos).1);
        }
        match self.failures.borrow_mut().pop() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn slug_taken(&self, kind: ResourceKind, slug: Option<&str>, except: Option<i64>) -> bool {
        let Some(slug) = slug else { return false };
        self.rows.borrow().get(&kind).is_some_and(|rows| {
            rows.iter()
                .any(|r| r["slug"].as_str() == Some(slug) && r["id"].as_i64() != except)
        })
    }
}

#[async_trait(?Send)]
impl AdminApi for MemoryApi {
    async fn list_page(&self, kind: ResourceKind, page: u32, limit: u32) -> ApiResult<Listing<RowView>> {
        self.enter()?;
        if let Some(rows) = self.rows.borrow_mut().get_mut(&kind) {
            let keep = rows.len().saturating_sub(self.shrink.get());
            rows.truncate(keep);
        }
        let rows = self.rows.borrow().get(&kind).cloned().unwrap_or_default();
        if self.bare_lists.get() {
            return parse_listing(kind, Value::Array(rows), limit);
        }
        let total = rows.len() as u32;
        let offset = ((page.max(1) - 1) * limit) as usize;
        let items: Vec<Value> = rows.into_iter().skip(offset).take(limit as usize).collect();
        let body = json!({
            "items": items,
            "total": total,
            "page": page,
            "limit": limit,
            "total_pages": total.div_ceil(limit),
        });
        parse_listing(kind, body, limit)
    }

    async fn fetch_one(&self, kind: ResourceKind, id: i64) -> ApiResult<Value> {
        self.enter()?;
        self.rows
            .borrow()
            .get(&kind)
            .and_then(|rows| rows.iter().find(|r| r["id"].as_i64() == Some(id)).cloned())
            .ok_or(ApiError::NotFound)
    }

    async fn create(&self, kind: ResourceKind, body: &Value) -> ApiResult<Value> {
        self.enter()?;
        if self.slug_taken(kind, body["slug"].as_str(), None) {
            return Err(ApiError::Conflict(None));
        }
        let mut rows = self.rows.borrow_mut();
        let rows = rows.entry(kind).or_default();
        let id = rows.iter().filter_map(|r| r["id"].as_i64()).max().unwrap_or(0) + 1;
        let mut created = body.clone();
        created["id"] = json!(id);
        rows.push(created.clone());
        Ok(created)
    }

    async fn update(&self, kind: ResourceKind, id: i64, body: &Value) -> ApiResult<Value> {
        self.enter()?;
        if self.slug_taken(kind, body["slug"].as_str(), Some(id)) {
            return Err(ApiError::Conflict(None));
        }
        let mut rows = self.rows.borrow_mut();
        let row = rows
            .get_mut(&kind)
            .and_then(|rows| rows.iter_mut().find(|r| r["id"].as_i64() == Some(id)))
            .ok_or(ApiError::NotFound)?;
        let mut updated = body.clone();
        updated["id"] = json!(id);
        *row = updated.clone();
        Ok(updated)
    }

    async fn delete(&self, kind: ResourceKind, id: i64) -> ApiResult<()> {
        self.enter()?;
        let mut rows = self.rows.borrow_mut();
        let rows = rows.entry(kind).or_default();
        let before = rows.len();
        rows.retain(|r| r["id"].as_i64() != Some(id));
        if rows.len() == before {
            Err(ApiError::NotFound)
        } else {
            Ok(())
        }
    }

    async fn upload_image(&self, upload: ImageUpload) -> ApiResult<String> {
        self.enter()?;
        Ok(format!("/images/{}", upload.file_name))
    }

    async fn template_tree(&self) -> ApiResult<Vec<FileTreeNode>> {
        self.enter()?;
        Ok(self.tree.borrow().clone())
    }

    async fn template_content(&self, path: &str) -> ApiResult<String> {
        self.enter()?;
        self.file(path).ok_or(ApiError::NotFound)
    }

    async fn save_template(&self, path: &str, content: &str) -> ApiResult<()> {
        self.enter()?;
        self.seed_file(path, content);
        Ok(())
    }
}
