use crate::clients::{CachedGalleryState, GalleryDetailPayload};
use crate::error::AppError;
use crate::features::comments::CommentsAction;
use crate::features::reading::ReadingAction;
use crate::flux::Action;
use crate::models::{Gallery, GalleryDetail};

use super::search::DetailSearchAction;
use super::state::DetailRoute;

/// Cached records restored from the database before the network fetch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DatabaseInfos {
    pub gallery: Option<Gallery>,
    pub detail: Option<GalleryDetail>,
    pub cached: Option<CachedGalleryState>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailAction {
    OnAppear(String),
    SetNavigation(Option<DetailRoute>),
    ClearSubStates,

    SetCommentContent(String),
    SetPostCommentFocused(bool),
    OnPostCommentAppear,

    ToggleShowUserRating,
    UpdateRating(u32),
    ConfirmRating(u32),
    ConfirmRatingDone,

    FetchDatabaseInfos,
    FetchDatabaseInfosDone(DatabaseInfos),
    SaveGalleryHistory,

    FetchGalleryDetail,
    FetchGalleryDetailDone(Result<GalleryDetailPayload, AppError>),
    SyncGalleryTags,
    SyncGalleryDetail,
    SyncPreviewUrls,
    SyncComments,

    RateGallery,
    FavorGallery(usize),
    UnfavorGallery,
    PostComment,
    VoteTag(String, i32),
    /// Shared completion of rate/favor/comment/tag operations.
    AnyOpDone(Result<(), AppError>),

    SendDownloadCommand(String),
    SendDownloadCommandDone(Result<String, AppError>),
    ResetDownloadResponse,

    Teardown,

    Reading(ReadingAction),
    Comments(CommentsAction),
    DetailSearch(DetailSearchAction),
}

impl Action for DetailAction {}
