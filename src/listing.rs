//! List Response Normalization
//!
//! The list endpoints answer either with a bare JSON array (older
//! handlers) or with a wrapped object carrying pagination metadata.
//! Both are folded into one `Listing` here so nothing downstream has to
//! care which shape arrived.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::models::{PaginationState, ResourceKind, RowView};

/// Which wire shape a listing was parsed from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingShape {
    Bare,
    Wrapped,
}

/// One page of a collection
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<T> {
    pub rows: Vec<T>,
    pub pagination: PaginationState,
    pub shape: ListingShape,
}

impl<T> Listing<T> {
    pub fn try_map_rows<U>(self, f: impl FnOnce(Vec<T>) -> ApiResult<Vec<U>>) -> ApiResult<Listing<U>> {
        Ok(Listing {
            rows: f(self.rows)?,
            pagination: self.pagination,
            shape: self.shape,
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawListing {
    Bare(Vec<Value>),
    Wrapped(WrappedListing),
}

#[derive(Deserialize)]
struct WrappedListing {
    // Missing and null are both an empty page.
    #[serde(default, alias = "posts", alias = "pages")]
    items: Option<Vec<Value>>,
    total: Option<u32>,
    page: Option<u32>,
    limit: Option<u32>,
    total_pages: Option<u32>,
}

/// Normalize a list response body.
///
/// `requested_limit` fills in a wrapped response that omits `limit`.
pub fn normalize_listing(body: Value, requested_limit: u32) -> ApiResult<Listing<Value>> {
    let raw: RawListing = serde_json::from_value(body).map_err(|e| ApiError::Decode(format!("list response: {e}")))?;

    let listing = match raw {
        RawListing::Bare(rows) => {
            let count = rows.len() as u32;
            Listing {
                pagination: PaginationState {
                    page: 1,
                    limit: count.max(1),
                    total: count,
                    total_pages: 1,
                },
                rows,
                shape: ListingShape::Bare,
            }
        }
        RawListing::Wrapped(wrapped) => {
            let rows = wrapped.items.unwrap_or_default();
            let total = wrapped.total.unwrap_or(rows.len() as u32);
            let limit = wrapped.limit.filter(|l| *l > 0).unwrap_or(requested_limit.max(1));
            let total_pages = wrapped.total_pages.unwrap_or_else(|| total.div_ceil(limit));
            Listing {
                pagination: PaginationState {
                    page: wrapped.page.filter(|p| *p > 0).unwrap_or(1),
                    limit,
                    total,
                    total_pages,
                },
                rows,
                shape: ListingShape::Wrapped,
            }
        }
    };
    Ok(listing)
}

/// Normalize and decode a list response into row view-models.
pub fn parse_listing(kind: ResourceKind, body: Value, requested_limit: u32) -> ApiResult<Listing<RowView>> {
    normalize_listing(body, requested_limit)?.try_map_rows(|rows| kind.decode_rows(rows))
}
