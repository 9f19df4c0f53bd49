//! API Errors
//!
//! Failure taxonomy for every request the admin makes, plus the
//! user-facing wording shown in the blocking notification.

use serde::Deserialize;
use thiserror::Error;

/// Errors surfaced by the admin API client
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Rejected before any request was sent
    #[error("validation failed: {0}")]
    Validation(String),

    /// 409, the slug is already taken
    #[error("conflict: {}", .0.as_deref().unwrap_or("slug already exists"))]
    Conflict(Option<String>),

    #[error("not found")]
    NotFound,

    /// Any other non-2xx response
    #[error("http status {status}")]
    Status { status: u16, message: Option<String> },

    /// The request never completed
    #[error("network error: {0}")]
    Network(String),

    /// 2xx response whose body did not have the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// What the user was doing when an error happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Loading,
    Creating,
    Updating,
    Deleting,
    Uploading,
    Saving,
}

impl Action {
    pub fn verb(self) -> &'static str {
        match self {
            Action::Loading => "loading",
            Action::Creating => "creating",
            Action::Updating => "updating",
            Action::Deleting => "deleting",
            Action::Uploading => "uploading",
            Action::Saving => "saving",
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl ApiError {
    /// Classify a non-2xx response.
    ///
    /// The body is only consulted for its optional JSON `error` field;
    /// plain-text bodies are ignored.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.trim().is_empty());

        match status {
            409 => ApiError::Conflict(message),
            404 => ApiError::NotFound,
            _ => ApiError::Status { status, message },
        }
    }

    /// Message for the blocking notification, e.g. "Page not found".
    pub fn user_message(&self, action: Action, subject: &str) -> String {
        match self {
            ApiError::Validation(msg) => msg.clone(),
            ApiError::Conflict(_) => {
                "Error: Slug already exists. Please choose a different slug.".to_string()
            }
            ApiError::NotFound => format!("{} not found", capitalize(subject)),
            ApiError::Status { message: Some(msg), .. } => msg.clone(),
            ApiError::Status { message: None, .. } => {
                format!("Error {} {}. Please try again.", action.verb(), subject)
            }
            ApiError::Network(_) => "Network error. Please try again.".to_string(),
            ApiError::Decode(_) => "Unexpected response from server.".to_string(),
        }
    }
}

pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
