use crate::features::detail::DetailState;
use crate::features::favorites::FavoritesState;
use crate::features::frontpage::FrontpageState;
use crate::features::popular::PopularState;
use crate::features::search::SearchState;
use crate::flux::FeatureState;
use crate::models::Gallery;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub route: Option<super::action::AppRoute>,

    pub frontpage: FrontpageState,
    pub popular: PopularState,
    pub search: SearchState,
    pub favorites: FavoritesState,

    /// Recently opened galleries, restored at launch.
    pub history: Vec<Gallery>,

    /// Present while `route` is `Detail`; absent means torn down.
    pub detail: Option<Box<DetailState>>,
}

impl FeatureState for AppState {}
