//! Favorites feature: per-category gallery lists plus add/remove
//! operations.

mod action;
mod reducer;
mod state;

pub use action::FavoritesAction;
pub use reducer::FavoritesReducer;
pub use state::{FavoritesState, FAVORITE_CATEGORIES};
