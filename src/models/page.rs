//! Pagination primitives shared by every gallery list screen.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::gallery::Gallery;

/// How many consecutive non-advancing `fetch_more` rounds are retried
/// automatically before giving up. The source list can mutate between
/// fetches, so one stale page is normal; an unbounded retry chain is not.
pub const STALE_REFETCH_LIMIT: u8 = 2;

/// Page counters as reported by the site's list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageNumber {
    pub current: u64,
    pub maximum: u64,
}

impl PageNumber {
    pub fn has_next(&self) -> bool {
        self.current + 1 < self.maximum
    }
}

/// One page of galleries with its counters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GalleryList {
    pub page: PageNumber,
    pub galleries: Vec<Gallery>,
}

/// Result of appending a `fetch_more` page, see [`Listing::finish_fetch_more`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Appended {
    /// Galleries worth caching, when the page carried any.
    pub fetched: Vec<Gallery>,
    /// The list did not grow; the reducer should re-dispatch one more
    /// `fetch_more` unless the retry budget is exhausted.
    pub retry: bool,
}

/// Paginated list sub-state: items, counters, and in-flight flags.
///
/// Guard and merge logic for the fetch/fetch-more action pairs lives here
/// so the list screens stay mechanical.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Listing {
    pub galleries: Vec<Gallery>,
    pub page: PageNumber,
    pub loading: bool,
    pub loading_more: bool,
    pub failed: bool,
    pub more_failed: bool,
    pub not_found: bool,
    stale_fetches: u8,
}

/// Parameters for the next `fetch_more` request.
///
/// Pagination keys off the last seen identifier, not an absolute offset,
/// because the source list can mutate between fetches.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
    pub page: u64,
    pub last_id: Option<String>,
}

impl Listing {
    /// Guard + flag flip for an initial fetch.
    ///
    /// Returns false (caller no-ops) when a fetch is already in flight.
    pub fn begin_refresh(&mut self) -> bool {
        self.not_found = false;
        self.failed = false;
        if self.loading {
            return false;
        }
        self.page.current = 0;
        self.loading = true;
        true
    }

    /// Merge an initial fetch result. Returns galleries worth caching.
    pub fn finish_refresh(&mut self, result: Result<GalleryList, AppError>) -> Vec<Gallery> {
        self.loading = false;
        match result {
            Ok(list) => {
                self.page = list.page;
                self.stale_fetches = 0;
                if list.galleries.is_empty() {
                    self.not_found = true;
                    Vec::new()
                } else {
                    self.galleries = list.galleries.clone();
                    list.galleries
                }
            }
            Err(error) => {
                tracing::debug!(%error, "list fetch failed");
                self.failed = true;
                Vec::new()
            }
        }
    }

    /// Guard + flag flip for a next-page fetch.
    ///
    /// Returns the request parameters, or None (caller no-ops) when the
    /// pagination is exhausted or a fetch-more is already in flight.
    pub fn begin_fetch_more(&mut self) -> Option<PageRequest> {
        self.more_failed = false;
        if !self.page.has_next() || self.loading_more {
            return None;
        }
        self.loading_more = true;
        Some(PageRequest {
            page: self.page.current + 1,
            last_id: self.galleries.last().map(|g| g.id.clone()),
        })
    }

    /// Merge a next-page result, deduplicating by gallery id.
    ///
    /// The item list length is non-decreasing. When the page did not grow
    /// the list, `retry` asks for one more fetch until the counters stop
    /// advancing [`STALE_REFETCH_LIMIT`] times in a row.
    pub fn finish_fetch_more(&mut self, result: Result<GalleryList, AppError>) -> Appended {
        self.loading_more = false;
        match result {
            Ok(list) => {
                self.page = list.page;
                let before = self.galleries.len();
                for gallery in &list.galleries {
                    if !self.galleries.iter().any(|g| g.id == gallery.id) {
                        self.galleries.push(gallery.clone());
                    }
                }
                let grew = self.galleries.len() > before;
                if grew {
                    self.stale_fetches = 0;
                } else if before != 0 {
                    self.stale_fetches = self.stale_fetches.saturating_add(1);
                }
                Appended {
                    fetched: list.galleries,
                    retry: !grew
                        && before != 0
                        && self.stale_fetches < STALE_REFETCH_LIMIT
                        && self.page.has_next(),
                }
            }
            Err(error) => {
                tracing::debug!(%error, "list fetch-more failed");
                self.more_failed = true;
                Appended::default()
            }
        }
    }
}
