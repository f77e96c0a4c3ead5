//! Root feature: aggregates every screen and owns top-level navigation.

mod action;
mod reducer;
mod state;

pub use action::{AppAction, AppRoute};
pub use reducer::{app_reducer, AppCoreReducer, AppReducer, AppStore};
pub use state::AppState;
