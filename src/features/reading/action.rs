use crate::clients::GalleryContents;
use crate::error::AppError;
use crate::flux::Action;

#[derive(Debug, Clone, PartialEq)]
pub enum ReadingAction {
    Fetch,
    FetchDone(Result<GalleryContents, AppError>),
    FetchMore,
    FetchMoreDone(Result<GalleryContents, AppError>),

    /// Reader turned to a page; persisted fire-and-forget.
    SetProgress(u32),
    /// Swipe-down dismissal; the detail screen intercepts this and clears
    /// its route.
    PerformDismiss,

    Teardown,
}

impl Action for ReadingAction {}
