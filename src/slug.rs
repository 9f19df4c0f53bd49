//! Slug Helpers
//!
//! Title → slug derivation and the auto-sync rule used by the post and
//! page forms.

use std::sync::LazyLock;

use regex::Regex;

static STRIP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\s-]").expect("valid regex"));
static COLLAPSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s_-]+").expect("valid regex"));
static VALID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").expect("valid regex"));

/// Lowercase, drop punctuation, collapse separator runs into one hyphen
/// and trim hyphens from both ends.
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    let stripped = STRIP.replace_all(&lower, "");
    let collapsed = COLLAPSE.replace_all(&stripped, "-");
    collapsed.trim_matches('-').to_string()
}

pub fn is_valid_slug(slug: &str) -> bool {
    VALID.is_match(slug)
}

/// Keeps the slug field following the title until the user edits it.
///
/// The slug is re-derived only while it still equals the slug of the
/// previously seen title (or is empty).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlugSync {
    original: String,
}

impl SlugSync {
    /// Start from an existing record; its slug counts as the synced value.
    pub fn from_existing(slug: &str) -> Self {
        Self { original: slug.to_string() }
    }

    /// Returns the new slug when the field should follow the title.
    pub fn on_title_input(&mut self, title: &str, current_slug: &str) -> Option<String> {
        let title = title.trim();
        if current_slug.is_empty() || current_slug == slugify(&self.original) {
            self.original = title.to_string();
            Some(slugify(title))
        } else {
            None
        }
    }
}
