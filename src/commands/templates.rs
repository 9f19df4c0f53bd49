//! Template Commands
//!
//! Directory listing, file content and save for the template editor.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

use super::{read_json, HttpAdminApi};
use crate::error::{ApiError, ApiResult};
use crate::models::FileTreeNode;

const TREE_PATH: &str = "/api/settings/templates";
const CONTENT_PATH: &str = "/api/settings/templates/content";
const SAVE_PATH: &str = "/api/settings/templates/save";

/// Characters `encodeURIComponent` leaves alone
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode one query value.
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string()
}

#[derive(Serialize)]
struct SaveArgs<'a> {
    path: &'a str,
    content: &'a str,
}

pub(super) async fn template_tree(api: &HttpAdminApi) -> ApiResult<Vec<FileTreeNode>> {
    let response = api.execute(api.client.get(api.url(TREE_PATH))).await?;
    // An empty template directory is serialized as null.
    let nodes: Option<Vec<FileTreeNode>> = read_json(response).await?;
    Ok(nodes.unwrap_or_default())
}

pub(super) async fn template_content(api: &HttpAdminApi, path: &str) -> ApiResult<String> {
    let url = api.url(&format!("{}?path={}", CONTENT_PATH, encode_component(path)));
    let response = api.execute(api.client.get(url)).await?;
    response.text().await.map_err(|e| ApiError::Network(e.to_string()))
}

pub(super) async fn save_template(api: &HttpAdminApi, path: &str, content: &str) -> ApiResult<()> {
    api.execute(api.client.post(api.url(SAVE_PATH)).json(&SaveArgs { path, content }))
        .await?;
    Ok(())
}
