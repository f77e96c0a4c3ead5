use crate::clients::AppEnv;
use crate::error::AppError;
use crate::flux::Action;
use crate::models::GalleryList;

#[derive(Debug, Clone, PartialEq)]
pub enum SearchAction {
    SetKeyword(String),
    /// Start a search. `None` reuses the keyword currently in state.
    Fetch(Option<String>),
    FetchDone(Result<GalleryList, AppError>),
    FetchMore,
    FetchMoreDone(Result<GalleryList, AppError>),

    /// Restore the persisted environment (history, quick-search words).
    LoadAppEnv,
    LoadAppEnvDone(AppEnv),
    RemoveHistoryKeyword(String),
    SyncHistoryKeywords,

    Teardown,
}

impl Action for SearchAction {}
