//! Resource Commands
//!
//! List/get/create/update/delete for posts, pages and portfolio items.

use serde_json::Value;
use tracing::{debug, info};

use super::{read_json, read_value, HttpAdminApi};
use crate::error::ApiResult;
use crate::listing::{parse_listing, Listing};
use crate::models::{ResourceKind, RowView};

pub(super) fn list_path(kind: ResourceKind, page: u32, limit: u32) -> String {
    format!("{}?page={}&limit={}", kind.api_path(), page, limit)
}

pub(super) fn item_path(kind: ResourceKind, id: i64) -> String {
    format!("{}/{}", kind.api_path(), id)
}

pub(super) async fn list_page(api: &HttpAdminApi, kind: ResourceKind, page: u32, limit: u32) -> ApiResult<Listing<RowView>> {
    let url = api.url(&list_path(kind, page, limit));
    debug!(%url, "list");
    let response = api.execute(api.client.get(&url)).await?;
    let body: Value = read_json(response).await?;
    parse_listing(kind, body, limit)
}

pub(super) async fn fetch_one(api: &HttpAdminApi, kind: ResourceKind, id: i64) -> ApiResult<Value> {
    let response = api.execute(api.client.get(api.url(&item_path(kind, id)))).await?;
    read_json(response).await
}

pub(super) async fn create(api: &HttpAdminApi, kind: ResourceKind, body: &Value) -> ApiResult<Value> {
    let response = api.execute(api.client.post(api.url(&kind.api_path())).json(body)).await?;
    info!(kind = kind.segment(), "created");
    read_value(response).await
}

pub(super) async fn update(api: &HttpAdminApi, kind: ResourceKind, id: i64, body: &Value) -> ApiResult<Value> {
    let response = api.execute(api.client.put(api.url(&item_path(kind, id))).json(body)).await?;
    info!(kind = kind.segment(), id, "updated");
    read_value(response).await
}

pub(super) async fn delete(api: &HttpAdminApi, kind: ResourceKind, id: i64) -> ApiResult<()> {
    api.execute(api.client.delete(api.url(&item_path(kind, id)))).await?;
    info!(kind = kind.segment(), id, "deleted");
    Ok(())
}
