use crate::error::AppError;
use crate::flux::Action;
use crate::models::GalleryList;

#[derive(Debug, Clone, PartialEq)]
pub enum FavoritesAction {
    SetIndex(usize),
    Fetch(usize),
    FetchDone(usize, Result<GalleryList, AppError>),
    FetchMore(usize),
    FetchMoreDone(usize, Result<GalleryList, AppError>),

    AddFavorite {
        gid: String,
        token: String,
        category: usize,
    },
    RemoveFavorite {
        gid: String,
    },
    /// Result of an add/remove, carrying the category to refresh.
    OpDone(usize, Result<(), AppError>),

    Teardown,
}

impl Action for FavoritesAction {}
