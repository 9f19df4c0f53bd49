//! List Controller
//!
//! Per-view state of a paginated resource list: the current page, the
//! rows on screen and the pagination metadata, kept in sync with the
//! server across page navigation and deletes.

use tracing::{debug, info, warn};

use crate::commands::AdminApi;
use crate::error::{capitalize, Action, ApiError, ApiResult};
use crate::listing::Listing;
use crate::models::{PaginationState, ResourceKind, RowView};
use crate::pagination::PaginationView;
use crate::slot::StateSlot;

/// Identifies one in-flight list request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub page: u32,
    generation: u64,
}

/// What `finish_load` did with a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Rows and pagination replaced
    Applied,
    /// A newer request was issued since; response dropped
    Stale,
    /// Requested page no longer exists; fetch this one instead
    Refetch(u32),
    /// Request failed; previous rows kept
    Failed(ApiError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListController {
    kind: ResourceKind,
    limit: u32,
    current_page: u32,
    rows: Vec<RowView>,
    pagination: PaginationState,
    loaded: bool,
    error: Option<ApiError>,
    generation: u64,
}

impl ListController {
    pub fn new(kind: ResourceKind, limit: u32) -> Self {
        Self {
            kind,
            limit: limit.max(1),
            current_page: 1,
            rows: Vec::new(),
            pagination: PaginationState::default(),
            loaded: false,
            error: None,
            generation: 0,
        }
    }

    pub fn rows(&self) -> &[RowView] {
        &self.rows
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    pub fn pagination_view(&self, width: u32) -> PaginationView {
        PaginationView::derive(&self.pagination, width)
    }

    /// Record the page being requested and tag the request.
    ///
    /// Any ticket handed out earlier becomes stale.
    pub fn begin_load(&mut self, page: u32) -> LoadTicket {
        self.current_page = page.max(1);
        self.generation += 1;
        LoadTicket { page: self.current_page, generation: self.generation }
    }

    pub fn finish_load(&mut self, ticket: LoadTicket, result: ApiResult<Listing<RowView>>) -> LoadOutcome {
        if ticket.generation != self.generation {
            debug!(kind = self.kind.segment(), page = ticket.page, "stale list response dropped");
            return LoadOutcome::Stale;
        }

        let listing = match result {
            Ok(listing) => listing,
            Err(e) => {
                warn!(kind = self.kind.segment(), page = ticket.page, error = %e, "list failed");
                self.error = Some(e.clone());
                if self.loaded {
                    self.current_page = self.pagination.page;
                }
                return LoadOutcome::Failed(e);
            }
        };

        let last_page = listing.pagination.total_pages.max(1);
        if ticket.page > last_page {
            return LoadOutcome::Refetch(last_page);
        }

        debug!(
            kind = self.kind.segment(),
            page = listing.pagination.page,
            rows = listing.rows.len(),
            shape = ?listing.shape,
            "list applied"
        );
        self.current_page = listing.pagination.page;
        self.rows = listing.rows;
        self.pagination = listing.pagination;
        self.loaded = true;
        self.error = None;
        LoadOutcome::Applied
    }

    pub fn deleted_message(&self) -> String {
        format!("{} deleted successfully", capitalize(self.kind.label()))
    }

    pub fn delete_confirm_message(&self) -> String {
        format!("Are you sure you want to delete this {}?", self.kind.label())
    }

    pub fn error_message(&self, err: &ApiError, action: Action) -> String {
        err.user_message(action, self.kind.label())
    }
}

/// Fetch `page` into the controller, following the collection's last
/// page while it keeps shrinking underneath us.
///
/// Each refetch targets a strictly lower page, so this ends at page 1 at
/// the latest.
pub async fn load_page<A, S>(api: &A, slot: &S, page: u32) -> ApiResult<()>
where
    A: AdminApi + ?Sized,
    S: StateSlot<ListController>,
{
    let mut page = page;
    loop {
        let Some((ticket, kind, limit)) = slot.with_mut(|c| (c.begin_load(page), c.kind, c.limit)) else {
            return Ok(());
        };
        let result = api.list_page(kind, ticket.page, limit).await;
        match slot.with_mut(|c| c.finish_load(ticket, result)) {
            Some(LoadOutcome::Refetch(last)) => {
                debug!(kind = kind.segment(), from = ticket.page, to = last, "page past the end, refetching");
                page = last;
            }
            Some(LoadOutcome::Failed(e)) => return Err(e),
            _ => return Ok(()),
        }
    }
}

/// Delete a row, then reload the current page so totals stay right.
///
/// `Err` only when the DELETE itself failed, in which case nothing on
/// screen changes. A failed reload is left in `error()`.
pub async fn delete_row<A, S>(api: &A, slot: &S, id: i64) -> ApiResult<()>
where
    A: AdminApi + ?Sized,
    S: StateSlot<ListController>,
{
    let Some(kind) = slot.peek(|c| c.kind) else {
        return Ok(());
    };
    api.delete(kind, id).await?;
    info!(kind = kind.segment(), id, "row deleted");
    let Some(page) = slot.peek(|c| c.current_page) else {
        return Ok(());
    };
    if let Err(e) = load_page(api, slot, page).await {
        warn!(kind = kind.segment(), error = %e, "reload after delete failed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use crate::commands::memory::MemoryApi;
    use crate::pagination::DEFAULT_WINDOW;

    #[tokio::test]
    async fn test_bare_array_hides_pagination() {
        let api = MemoryApi::new();
        api.seed_titles(ResourceKind::Posts, 3);
        api.serve_bare_lists();

        let list = RefCell::new(ListController::new(ResourceKind::Posts, 10));
        load_page(&api, &list, 1).await.unwrap();

        assert_eq!(list.borrow().rows().len(), 3);
        assert_eq!(list.borrow().pagination, PaginationState { total: 3, page: 1, limit: 3, total_pages: 1 });
        assert!(!list.borrow().pagination_view(DEFAULT_WINDOW).visible);
    }

    #[tokio::test]
    async fn test_navigate_pages() {
        let api = MemoryApi::new();
        api.seed_titles(ResourceKind::Pages, 25);

        let list = RefCell::new(ListController::new(ResourceKind::Pages, 10));
        load_page(&api, &list, 2).await.unwrap();

        assert_eq!(list.borrow().current_page, 2);
        assert_eq!(list.borrow().rows().first().map(|r| r.id), Some(11));
        let view = list.borrow().pagination_view(DEFAULT_WINDOW);
        assert!(view.previous.enabled && view.next.enabled);
    }

    #[tokio::test]
    async fn test_deleting_last_row_of_last_page_clamps() {
        let api = MemoryApi::new();
        api.seed_titles(ResourceKind::Portfolio, 21);

        let list = RefCell::new(ListController::new(ResourceKind::Portfolio, 10));
        load_page(&api, &list, 3).await.unwrap();
        assert_eq!(list.borrow().rows().len(), 1);

        delete_row(&api, &list, 21).await.unwrap();

        let state = list.borrow().pagination;
        assert_eq!(state.total, 20);
        assert_eq!(state.total_pages, 2);
        assert!(list.borrow().current_page <= state.total_pages);
        assert_eq!(list.borrow().current_page, 2);
        assert_eq!(list.borrow().rows().len(), 10);
    }

    #[tokio::test]
    async fn test_deleting_everything_lands_on_page_one() {
        let api = MemoryApi::new();
        api.seed_titles(ResourceKind::Pages, 1);

        let list = RefCell::new(ListController::new(ResourceKind::Pages, 10));
        load_page(&api, &list, 1).await.unwrap();
        delete_row(&api, &list, 1).await.unwrap();

        assert!(list.borrow().rows().is_empty());
        assert_eq!(list.borrow().current_page, 1);
        assert_eq!(list.borrow().pagination.total, 0);
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_rows() {
        let api = MemoryApi::new();
        api.seed_titles(ResourceKind::Pages, 2);
        let list = RefCell::new(ListController::new(ResourceKind::Pages, 10));
        load_page(&api, &list, 1).await.unwrap();

        let err = delete_row(&api, &list, 99).await.unwrap_err();
        assert_eq!(err, ApiError::NotFound);
        assert_eq!(list.borrow().error_message(&err, Action::Deleting), "Page not found");
        assert_eq!(list.borrow().rows().len(), 2);

        api.fail_next(ApiError::Network("offline".into()));
        let err = delete_row(&api, &list, 1).await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
        assert_eq!(list.borrow().rows().len(), 2);
        assert_eq!(api.count(ResourceKind::Pages), 2);
    }

    #[tokio::test]
    async fn test_failed_load_keeps_previous_render() {
        let api = MemoryApi::new();
        api.seed_titles(ResourceKind::Posts, 12);
        let list = RefCell::new(ListController::new(ResourceKind::Posts, 10));
        load_page(&api, &list, 1).await.unwrap();

        api.fail_next(ApiError::Status { status: 500, message: None });
        assert!(load_page(&api, &list, 2).await.is_err());
        assert_eq!(list.borrow().rows().len(), 10);
        assert_eq!(list.borrow().pagination.page, 1);
        assert_eq!(list.borrow().current_page, 1);
        assert!(list.borrow().error().is_some());
    }

    #[tokio::test]
    async fn test_stale_response_is_ignored() {
        let api = MemoryApi::new();
        api.seed_titles(ResourceKind::Posts, 30);
        let mut list = ListController::new(ResourceKind::Posts, 10);

        let first = list.begin_load(1);
        let second = list.begin_load(3);
        let newer = api.list_page(ResourceKind::Posts, 3, 10).await;
        let older = api.list_page(ResourceKind::Posts, 1, 10).await;

        assert_eq!(list.finish_load(second, newer), LoadOutcome::Applied);
        assert_eq!(list.finish_load(first, older), LoadOutcome::Stale);
        assert_eq!(list.current_page, 3);
        assert_eq!(list.rows().first().map(|r| r.id), Some(21));
    }

    #[tokio::test]
    async fn test_keeps_following_a_shrinking_collection() {
        let api = MemoryApi::new();
        api.seed_titles(ResourceKind::Posts, 41);
        api.shrink_per_list(10);

        let list = RefCell::new(ListController::new(ResourceKind::Posts, 10));
        load_page(&api, &list, 5).await.unwrap();

        let list = list.borrow();
        assert!(list.is_loaded());
        assert!(list.error().is_none());
        assert!(list.current_page <= list.pagination.total_pages.max(1));
        assert_eq!(list.current_page, 1);
        assert!(list.rows().is_empty());
        assert_eq!(api.requests(), 5);
    }

    #[tokio::test]
    async fn test_delete_succeeds_even_if_reload_fails() {
        let api = MemoryApi::new();
        api.seed_titles(ResourceKind::Posts, 3);
        let list = RefCell::new(ListController::new(ResourceKind::Posts, 10));
        load_page(&api, &list, 1).await.unwrap();

        api.fail_after(1, ApiError::Network("offline".into()));
        delete_row(&api, &list, 2).await.unwrap();

        assert_eq!(api.count(ResourceKind::Posts), 2);
        assert!(matches!(list.borrow().error(), Some(ApiError::Network(_))));
        assert_eq!(list.borrow().rows().len(), 3);
    }

    #[test]
    fn test_messages() {
        let list = ListController::new(ResourceKind::Portfolio, 10);
        assert_eq!(list.deleted_message(), "Portfolio item deleted successfully");
        assert_eq!(list.delete_confirm_message(), "Are you sure you want to delete this portfolio item?");
    }
}
