//! Admin API Commands
//!
//! Frontend bindings to the CMS REST API, organized by domain.
//! `AdminApi` is the seam the controllers talk to; `HttpAdminApi` is the
//! real implementation over `reqwest` (browser `fetch` on wasm32).

mod resources;
mod templates;
mod upload;

#[cfg(test)]
pub(crate) mod memory;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::config::AdminConfig;
use crate::error::{ApiError, ApiResult};
use crate::listing::Listing;
use crate::models::{FileTreeNode, ResourceKind, RowView};

pub use upload::ImageUpload;

/// Every endpoint the admin consumes
#[async_trait(?Send)]
pub trait AdminApi {
    /// `GET /api/{resource}?page=N&limit=M`
    async fn list_page(&self, kind: ResourceKind, page: u32, limit: u32) -> ApiResult<Listing<RowView>>;

    /// `GET /api/{resource}/{id}`
    async fn fetch_one(&self, kind: ResourceKind, id: i64) -> ApiResult<Value>;

    /// `POST /api/{resource}`
    async fn create(&self, kind: ResourceKind, body: &Value) -> ApiResult<Value>;

    /// `PUT /api/{resource}/{id}`
    async fn update(&self, kind: ResourceKind, id: i64, body: &Value) -> ApiResult<Value>;

    /// `DELETE /api/{resource}/{id}`
    async fn delete(&self, kind: ResourceKind, id: i64) -> ApiResult<()>;

    /// `POST /api/upload/image`, returns the stored file path
    async fn upload_image(&self, upload: ImageUpload) -> ApiResult<String>;

    /// `GET /api/settings/templates`
    async fn template_tree(&self) -> ApiResult<Vec<FileTreeNode>>;

    /// `GET /api/settings/templates/content?path=P`
    async fn template_content(&self, path: &str) -> ApiResult<String>;

    /// `POST /api/settings/templates/save`
    async fn save_template(&self, path: &str, content: &str) -> ApiResult<()>;
}

/// `AdminApi` over HTTP
#[derive(Clone, Debug)]
pub struct HttpAdminApi {
    config: AdminConfig,
    client: reqwest::Client,
}

impl HttpAdminApi {
    pub fn new(config: &AdminConfig) -> Self {
        Self {
            config: config.clone(),
            client: reqwest::Client::new(),
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        self.config.api_url(path)
    }

    /// Send a request; transport failures and non-2xx statuses become errors.
    pub(crate) async fn execute(&self, request: reqwest::RequestBuilder) -> ApiResult<reqwest::Response> {
        let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        debug!(status, url = %response.url(), "response");
        if is_success(status) {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_status(status, &body))
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn parse_body(text: &str) -> ApiResult<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

pub(crate) async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
    response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Like `read_json`, but an empty body reads as `null`.
pub(crate) async fn read_value(response: reqwest::Response) -> ApiResult<Value> {
    let text = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    parse_body(&text)
}

#[async_trait(?Send)]
impl AdminApi for HttpAdminApi {
    async fn list_page(&self, kind: ResourceKind, page: u32, limit: u32) -> ApiResult<Listing<RowView>> {
        resources::list_page(self, kind, page, limit).await
    }

    async fn fetch_one(&self, kind: ResourceKind, id: i64) -> ApiResult<Value> {
        resources::fetch_one(self, kind, id).await
    }

    async fn create(&self, kind: ResourceKind, body: &Value) -> ApiResult<Value> {
        resources::create(self, kind, body).await
    }

    async fn update(&self, kind: ResourceKind, id: i64, body: &Value) -> ApiResult<Value> {
        resources::update(self, kind, id, body).await
    }

    async fn delete(&self, kind: ResourceKind, id: i64) -> ApiResult<()> {
        resources::delete(self, kind, id).await
    }

    async fn upload_image(&self, upload: ImageUpload) -> ApiResult<String> {
        upload::upload_image(self, upload).await
    }

    async fn template_tree(&self) -> ApiResult<Vec<FileTreeNode>> {
        templates::template_tree(self).await
    }

    async fn template_content(&self, path: &str) -> ApiResult<String> {
        templates::template_content(self, path).await
    }

    async fn save_template(&self, path: &str, content: &str) -> ApiResult<()> {
        templates::save_template(self, path, content).await
    }
}
