use crate::features::detail::DetailAction;
use crate::features::favorites::FavoritesAction;
use crate::features::frontpage::FrontpageAction;
use crate::features::popular::PopularAction;
use crate::features::search::SearchAction;
use crate::flux::Action;
use crate::models::Gallery;

#[derive(Debug, Clone, PartialEq)]
pub enum AppRoute {
    Detail(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// Restore persisted environment and history once at startup.
    OnLaunch,
    FetchHistoryGalleriesDone(Vec<Gallery>),

    SetNavigation(Option<AppRoute>),
    ClearSubStates,

    Frontpage(FrontpageAction),
    Popular(PopularAction),
    Search(SearchAction),
    Favorites(FavoritesAction),
    Detail(DetailAction),
}

impl Action for AppAction {}
