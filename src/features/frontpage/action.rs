use crate::error::AppError;
use crate::flux::Action;
use crate::models::GalleryList;

#[derive(Debug, Clone, PartialEq)]
pub enum FrontpageAction {
    Fetch,
    FetchDone(Result<GalleryList, AppError>),
    FetchMore,
    FetchMoreDone(Result<GalleryList, AppError>),
    /// Cancel every in-flight operation owned by this screen.
    Teardown,
}

impl Action for FrontpageAction {}
