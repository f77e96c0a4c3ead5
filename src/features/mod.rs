//! Feature reducers: composition units of the data-flow engine.
//!
//! Each screen follows the same layout:
//! - `state.rs` - value-semantic feature state
//! - `action.rs` - user intents and completed async results
//! - `reducer.rs` - pure transitions plus effect descriptions

pub mod app;
pub mod comments;
pub mod detail;
pub mod favorites;
pub mod frontpage;
pub mod popular;
pub mod reading;
pub mod search;
