//! Pagination Controls
//!
//! Derives the Previous / numbered / Next buttons for a list page.

use crate::models::PaginationState;

/// Default number of numbered buttons
pub const DEFAULT_WINDOW: u32 = 5;

/// Inclusive range of numbered page buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub start: u32,
    pub end: u32,
}

impl PageWindow {
    pub fn pages(&self) -> impl Iterator<Item = u32> {
        self.start..=self.end
    }
}

/// Window of `width` pages centred on `page`, slid to stay inside
/// `1..=total_pages`. `None` when there are no pages at all.
pub fn page_window(page: u32, total_pages: u32, width: u32) -> Option<PageWindow> {
    if total_pages == 0 {
        return None;
    }
    let width = width.max(1);
    let start = page.saturating_sub(width / 2).max(1);
    let end = total_pages.min(start + width - 1);
    let start = if end - start + 1 < width {
        (end + 1).saturating_sub(width).max(1)
    } else {
        start
    };
    Some(PageWindow { start, end })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavButton {
    pub target: u32,
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    pub number: u32,
    pub current: bool,
}

/// Everything the pagination bar needs to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub visible: bool,
    pub previous: NavButton,
    pub next: NavButton,
    pub pages: Vec<PageButton>,
    pub summary: String,
}

impl PaginationView {
    pub fn derive(state: &PaginationState, width: u32) -> Self {
        let page = state.page;
        let total_pages = state.total_pages;
        let pages = page_window(page, total_pages, width)
            .map(|w| w.pages().map(|n| PageButton { number: n, current: n == page }).collect())
            .unwrap_or_default();

        Self {
            visible: total_pages > 1,
            previous: NavButton { target: page.saturating_sub(1).max(1), enabled: page > 1 },
            next: NavButton { target: page + 1, enabled: page < total_pages },
            pages,
            summary: summary(state),
        }
    }
}

/// "Showing 11 to 20 of 25 results"
fn summary(state: &PaginationState) -> String {
    if state.total == 0 {
        return "No results".to_string();
    }
    let first = (state.page.saturating_sub(1) * state.limit + 1).min(state.total);
    let last = (state.page * state.limit).min(state.total);
    format!("Showing {} to {} of {} results", first, last, state.total)
}
