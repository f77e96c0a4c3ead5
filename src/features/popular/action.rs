use crate::error::AppError;
use crate::flux::Action;
use crate::models::GalleryList;

#[derive(Debug, Clone, PartialEq)]
pub enum PopularAction {
    Fetch,
    FetchDone(Result<GalleryList, AppError>),
    Teardown,
}

impl Action for PopularAction {}
