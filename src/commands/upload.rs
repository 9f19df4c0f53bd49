//! Upload Commands
//!
//! Multipart image upload used by the post, page and portfolio forms.

use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::info;

use super::HttpAdminApi;
use crate::error::{ApiError, ApiResult};

const UPLOAD_PATH: &str = "/api/upload/image";

/// A file picked in the browser, read into memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

#[derive(Deserialize)]
struct UploadResponse {
    data: Option<UploadData>,
}

#[derive(Deserialize)]
struct UploadData {
    #[serde(rename = "filePath")]
    file_path: Option<String>,
}

/// Pull `data.filePath` out of an upload response.
pub(crate) fn stored_path(body: &str) -> ApiResult<String> {
    serde_json::from_str::<UploadResponse>(body)
        .ok()
        .and_then(|r| r.data)
        .and_then(|d| d.file_path)
        .filter(|p| !p.is_empty())
        .ok_or_else(|| ApiError::Decode("Invalid response format".to_string()))
}

pub(super) async fn upload_image(api: &HttpAdminApi, upload: ImageUpload) -> ApiResult<String> {
    let size = upload.bytes.len();
    let part = Part::bytes(upload.bytes)
        .file_name(upload.file_name.clone())
        .mime_str(&upload.mime)
        .map_err(|_| ApiError::Validation("Please select an image file".to_string()))?;
    let form = Form::new().part("image", part);

    let response = api.execute(api.client.post(api.url(UPLOAD_PATH)).multipart(form)).await?;
    let body = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    let path = stored_path(&body)?;
    info!(file = %upload.file_name, size, %path, "image uploaded");
    Ok(path)
}
