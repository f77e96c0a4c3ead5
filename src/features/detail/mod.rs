//! Gallery detail feature.
//!
//! The busiest screen: metadata, rating, favoriting, the comment composer,
//! archive downloads, and navigation into reading, comments, and inline
//! tag search. Comment links and tag search can open another detail
//! screen, making this state recursive (see `MAX_NESTING_DEPTH`).

mod action;
mod reducer;
mod search;
mod state;

pub use action::{DatabaseInfos, DetailAction};
pub use reducer::DetailReducer;
pub use search::{DetailSearchAction, DetailSearchReducer, DetailSearchRoute, DetailSearchState};
pub use state::{DetailRoute, DetailState, MAX_NESTING_DEPTH};
