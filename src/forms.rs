//! Resource Forms
//!
//! Draft types behind the create/edit forms, their client-side
//! validation, and the submit flow shared by all three resources.

use chrono::DateTime;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::commands::AdminApi;
use crate::error::{capitalize, Action, ApiError, ApiResult};
use crate::models::{Page, PortfolioItem, Post, ResourceKind};
use crate::slug::is_valid_slug;

const SLUG_FORMAT: &str = "Slug must contain only lowercase letters, numbers, and hyphens.";

/// A form's raw field values, turned into a request body on submit
pub trait Draft {
    fn kind(&self) -> ResourceKind;

    /// Validate and build the JSON body. Nothing is sent on error.
    fn payload(&self) -> ApiResult<Value>;
}

fn invalid(msg: &str) -> ApiError {
    ApiError::Validation(msg.to_string())
}

fn to_value<T: Serialize>(body: &T) -> ApiResult<Value> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Lenient integer parse: anything unparsable is 0.
fn parse_sort_order(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn is_valid_url(raw: &str) -> bool {
    reqwest::Url::parse(raw).is_ok()
}

// ========================
// Post
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostDraft {
    pub title: String,
    pub slug: String,
    pub tags: String,
    pub content: String,
    pub published: bool,
}

#[derive(Serialize)]
struct PostBody<'a> {
    title: &'a str,
    slug: &'a str,
    tags: &'a str,
    content: &'a str,
    published: bool,
}

impl From<Post> for PostDraft {
    fn from(post: Post) -> Self {
        Self {
            title: post.title,
            slug: post.slug,
            tags: post.tags,
            content: post.content,
            published: post.published,
        }
    }
}

impl Draft for PostDraft {
    fn kind(&self) -> ResourceKind {
        ResourceKind::Posts
    }

    fn payload(&self) -> ApiResult<Value> {
        let title = self.title.trim();
        let slug = self.slug.trim();
        let content = self.content.trim();
        if title.is_empty() || slug.is_empty() || content.is_empty() {
            return Err(invalid("Please fill in all required fields: Title, Slug, and Content."));
        }
        if !is_valid_slug(slug) {
            return Err(invalid(SLUG_FORMAT));
        }
        to_value(&PostBody {
            title,
            slug,
            tags: self.tags.trim(),
            content,
            published: self.published,
        })
    }
}

// ========================
// Page
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageDraft {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub show_in_nav: bool,
    pub sort_order: String,
}

#[derive(Serialize)]
struct PageBody<'a> {
    title: &'a str,
    slug: &'a str,
    content: &'a str,
    show_in_nav: bool,
    sort_order: i64,
}

impl From<Page> for PageDraft {
    fn from(page: Page) -> Self {
        Self {
            title: page.title,
            slug: page.slug,
            content: page.content,
            show_in_nav: page.show_in_nav,
            sort_order: page.sort_order.to_string(),
        }
    }
}

impl Draft for PageDraft {
    fn kind(&self) -> ResourceKind {
        ResourceKind::Pages
    }

    fn payload(&self) -> ApiResult<Value> {
        let title = self.title.trim();
        let slug = self.slug.trim();
        let content = self.content.trim();
        if title.is_empty() {
            return Err(invalid("Please enter a title."));
        }
        if slug.is_empty() {
            return Err(invalid("Please enter a slug."));
        }
        if content.is_empty() {
            return Err(invalid("Please enter content."));
        }
        if !is_valid_slug(slug) {
            return Err(invalid(SLUG_FORMAT));
        }
        to_value(&PageBody {
            title,
            slug,
            content,
            show_in_nav: self.show_in_nav,
            sort_order: parse_sort_order(&self.sort_order),
        })
    }
}

// ========================
// Portfolio
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortfolioDraft {
    pub title: String,
    pub short_description: String,
    pub project_url: String,
    pub github_url: String,
    pub showcase_image: String,
    pub sort_order: String,
}

#[derive(Serialize)]
struct PortfolioBody<'a> {
    title: &'a str,
    short_description: &'a str,
    project_url: Option<String>,
    github_url: Option<String>,
    showcase_image: Option<String>,
    sort_order: i64,
}

impl From<PortfolioItem> for PortfolioDraft {
    fn from(item: PortfolioItem) -> Self {
        Self {
            title: item.title,
            short_description: item.short_description,
            project_url: item.project_url.unwrap_or_default(),
            github_url: item.github_url.unwrap_or_default(),
            showcase_image: item.showcase_image.unwrap_or_default(),
            sort_order: item.sort_order.to_string(),
        }
    }
}

impl Draft for PortfolioDraft {
    fn kind(&self) -> ResourceKind {
        ResourceKind::Portfolio
    }

    fn payload(&self) -> ApiResult<Value> {
        let title = self.title.trim();
        let short_description = self.short_description.trim();
        if title.is_empty() {
            return Err(invalid("Please enter a title."));
        }
        if short_description.is_empty() {
            return Err(invalid("Please enter a short description."));
        }
        let project_url = non_empty(&self.project_url);
        if project_url.as_deref().is_some_and(|u| !is_valid_url(u)) {
            return Err(invalid("Please enter a valid project URL."));
        }
        let github_url = non_empty(&self.github_url);
        if github_url.as_deref().is_some_and(|u| !is_valid_url(u)) {
            return Err(invalid("Please enter a valid GitHub URL."));
        }
        to_value(&PortfolioBody {
            title,
            short_description,
            project_url,
            github_url,
            showcase_image: non_empty(&self.showcase_image),
            sort_order: parse_sort_order(&self.sort_order),
        })
    }
}

// ========================
// Image Upload Guard
// ========================

/// Busy flag held while an image upload is in flight.
///
/// Blocks submitting the form, but a second upload may still start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UploadGuard {
    busy: bool,
}

impl UploadGuard {
    pub fn begin(&mut self) {
        self.busy = true;
    }

    pub fn finish(&mut self) {
        self.busy = false;
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn check_submit(&self) -> ApiResult<()> {
        if self.busy {
            Err(invalid("Please wait for image upload to complete before submitting."))
        } else {
            Ok(())
        }
    }
}

/// Client-side checks before an image is sent.
pub fn validate_image(mime: &str, size: u64, max_bytes: u64) -> ApiResult<()> {
    if !mime.starts_with("image/") {
        return Err(invalid("Please select an image file"));
    }
    if size > max_bytes {
        return Err(ApiError::Validation(format!(
            "File size must be less than {}MB",
            max_bytes / (1024 * 1024)
        )));
    }
    Ok(())
}

/// Alert text for a failed upload.
pub fn upload_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Validation(msg) => msg.clone(),
        ApiError::Decode(msg) => format!("Upload failed: {}", msg),
        _ => "Upload failed. Please try again.".to_string(),
    }
}

/// Markdown for an uploaded image, appended to a content field.
pub fn image_markdown(path: &str) -> String {
    format!("![image]({})", path)
}

pub fn append_block(content: &str, block: &str) -> String {
    if content.trim().is_empty() {
        block.to_string()
    } else {
        format!("{}\n\n{}", content.trim_end(), block)
    }
}

/// Read-only publish date shown on the post edit form.
/// Unparsable timestamps are shown as sent.
pub fn publish_date_label(created_at: Option<&str>) -> String {
    match created_at.map(str::trim).filter(|s| !s.is_empty()) {
        None => "Not published yet".to_string(),
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|_| raw.to_string()),
    }
}

// ========================
// Submit
// ========================

/// Result of one submit attempt, already worded for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Show the message, then go to `redirect`
    Saved { message: String, redirect: String },
    /// Show the message and stay on the form
    Failed { message: String },
}

fn submit_action(id: Option<i64>) -> Action {
    if id.is_some() {
        Action::Updating
    } else {
        Action::Creating
    }
}

pub fn success_message(kind: ResourceKind, id: Option<i64>) -> String {
    let done = if id.is_some() { "updated" } else { "created" };
    format!("{} {} successfully!", capitalize(kind.label()), done)
}

/// Fetch a record for an edit form. `Err` holds the alert text.
pub async fn load_record<A, M>(api: &A, kind: ResourceKind, id: i64) -> Result<M, String>
where
    A: AdminApi + ?Sized,
    M: DeserializeOwned,
{
    let failed = || format!("Error loading {} data.", kind.label());
    let value = api.fetch_one(kind, id).await.map_err(|e| {
        warn!(kind = kind.segment(), id, error = %e, "record load failed");
        failed()
    })?;
    serde_json::from_value(value).map_err(|e| {
        warn!(kind = kind.segment(), id, error = %e, "record decode failed");
        failed()
    })
}

/// Validate and send a draft: POST when `id` is `None`, PUT otherwise.
pub async fn submit_draft<A, D>(api: &A, draft: &D, id: Option<i64>, uploads: UploadGuard) -> SubmitOutcome
where
    A: AdminApi + ?Sized,
    D: Draft,
{
    let kind = draft.kind();
    let action = submit_action(id);

    let result = match uploads.check_submit().and_then(|_| draft.payload()) {
        Ok(body) => match id {
            Some(id) => api.update(kind, id, &body).await,
            None => api.create(kind, &body).await,
        },
        Err(e) => Err(e),
    };

    match result {
        Ok(_) => {
            info!(kind = kind.segment(), ?id, "saved");
            SubmitOutcome::Saved {
                message: success_message(kind, id),
                redirect: kind.admin_path(),
            }
        }
        Err(e) => {
            warn!(kind = kind.segment(), ?id, error = %e, "submit failed");
            SubmitOutcome::Failed {
                message: e.user_message(action, kind.label()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::memory::MemoryApi;
    use serde_json::json;

    fn page_draft(slug: &str) -> PageDraft {
        PageDraft {
            title: "About".into(),
            slug: slug.into(),
            content: "Hello".into(),
            show_in_nav: true,
            sort_order: "x".into(),
        }
    }

    #[test]
    fn test_page_payload_trims_and_defaults_sort_order() {
        let mut draft = page_draft("about");
        draft.title = "  About  ".into();
        let body = draft.payload().unwrap();
        assert_eq!(body, json!({"title": "About", "slug": "about", "content": "Hello", "show_in_nav": true, "sort_order": 0}));
    }

    #[test]
    fn test_page_validation_order() {
        let mut draft = page_draft("about");
        draft.title = " ".into();
        assert_eq!(draft.payload(), Err(invalid("Please enter a title.")));
        let draft = page_draft("");
        assert_eq!(draft.payload(), Err(invalid("Please enter a slug.")));
        let draft = page_draft("About Us");
        assert_eq!(draft.payload(), Err(invalid(SLUG_FORMAT)));
    }

    #[test]
    fn test_post_requires_all_fields() {
        let draft = PostDraft { title: "T".into(), ..Default::default() };
        assert_eq!(
            draft.payload(),
            Err(invalid("Please fill in all required fields: Title, Slug, and Content."))
        );
    }

    #[test]
    fn test_portfolio_urls() {
        let mut draft = PortfolioDraft {
            title: "Site".into(),
            short_description: "A site".into(),
            ..Default::default()
        };
        let body = draft.payload().unwrap();
        assert_eq!(body["project_url"], Value::Null);
        assert_eq!(body["showcase_image"], Value::Null);

        draft.project_url = "not a url".into();
        assert_eq!(draft.payload(), Err(invalid("Please enter a valid project URL.")));

        draft.project_url = "https://example.com".into();
        draft.github_url = "github.com/me".into();
        assert_eq!(draft.payload(), Err(invalid("Please enter a valid GitHub URL.")));
    }

    #[test]
    fn test_upload_messages_and_markdown() {
        assert_eq!(
            upload_error_message(&ApiError::Decode("Invalid response format".into())),
            "Upload failed: Invalid response format"
        );
        assert_eq!(upload_error_message(&ApiError::Network("x".into())), "Upload failed. Please try again.");
        assert_eq!(append_block("", &image_markdown("/uploads/a.png")), "![image](/uploads/a.png)");
        assert_eq!(append_block("Intro\n", "![image](/b.png)"), "Intro\n\n![image](/b.png)");
    }

    #[test]
    fn test_publish_date_label() {
        assert_eq!(publish_date_label(None), "Not published yet");
        assert_eq!(publish_date_label(Some("  ")), "Not published yet");
        assert_eq!(publish_date_label(Some("2024-03-05T10:30:00Z")), "2024-03-05 10:30");
        assert_eq!(publish_date_label(Some("2024-03-05T10:30:12.123456+02:00")), "2024-03-05 10:30");
        assert_eq!(publish_date_label(Some("yesterday")), "yesterday");
    }

    #[test]
    fn test_validate_image() {
        let max = 5 * 1024 * 1024;
        assert!(validate_image("image/png", 1024, max).is_ok());
        assert_eq!(validate_image("text/plain", 10, max), Err(invalid("Please select an image file")));
        assert_eq!(validate_image("image/jpeg", max + 1, max), Err(invalid("File size must be less than 5MB")));
    }

    #[tokio::test]
    async fn test_load_record_for_edit() {
        let api = MemoryApi::new();
        api.seed(ResourceKind::Pages, vec![json!({"id": 4, "title": "About", "slug": "about", "sort_order": 2})]);

        let page: Page = load_record(&api, ResourceKind::Pages, 4).await.unwrap();
        let draft = PageDraft::from(page);
        assert_eq!(draft.slug, "about");
        assert_eq!(draft.sort_order, "2");

        let missing = load_record::<_, PortfolioItem>(&api, ResourceKind::Portfolio, 9).await;
        assert_eq!(missing.unwrap_err(), "Error loading portfolio item data.");
    }

    #[tokio::test]
    async fn test_duplicate_slug_stays_on_form() {
        let api = MemoryApi::new();
        api.seed(ResourceKind::Pages, vec![json!({"id": 1, "title": "About", "slug": "about"})]);

        let outcome = submit_draft(&api, &page_draft("about"), None, UploadGuard::default()).await;
        assert_eq!(
            outcome,
            SubmitOutcome::Failed {
                message: "Error: Slug already exists. Please choose a different slug.".into()
            }
        );
        assert_eq!(api.count(ResourceKind::Pages), 1);
    }

    #[tokio::test]
    async fn test_create_then_update() {
        let api = MemoryApi::new();
        let outcome = submit_draft(&api, &page_draft("contact"), None, UploadGuard::default()).await;
        assert_eq!(
            outcome,
            SubmitOutcome::Saved { message: "Page created successfully!".into(), redirect: "/admin/pages".into() }
        );

        let outcome = submit_draft(&api, &page_draft("contact-us"), Some(1), UploadGuard::default()).await;
        assert_eq!(
            outcome,
            SubmitOutcome::Saved { message: "Page updated successfully!".into(), redirect: "/admin/pages".into() }
        );
    }

    #[tokio::test]
    async fn test_validation_and_busy_upload_send_nothing() {
        let api = MemoryApi::new();
        let mut guard = UploadGuard::default();
        guard.begin();
        let draft = PortfolioDraft { title: "A".into(), short_description: "B".into(), ..Default::default() };

        let outcome = submit_draft(&api, &draft, None, guard).await;
        assert_eq!(
            outcome,
            SubmitOutcome::Failed { message: "Please wait for image upload to complete before submitting.".into() }
        );

        guard.finish();
        let outcome = submit_draft(&api, &PostDraft::default(), None, guard).await;
        assert!(matches!(outcome, SubmitOutcome::Failed { .. }));
        assert_eq!(api.requests(), 0);
    }

    #[tokio::test]
    async fn test_network_failure_message() {
        let api = MemoryApi::new();
        api.fail_next(ApiError::Network("offline".into()));
        let outcome = submit_draft(&api, &page_draft("x"), None, UploadGuard::default()).await;
        assert_eq!(outcome, SubmitOutcome::Failed { message: "Network error. Please try again.".into() });
    }
}
