//! Unidirectional data-flow primitives.
//!
//! Every state change in the application goes through this module: events
//! become [`Action`]s, a [`Reducer`] folds them into feature state, and any
//! asynchronous follow-up work is described as an [`Effect`] value that the
//! [`Store`] schedules off the dispatch path.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Store ──→ Reducer ──→ (State, Effect)
//!    ↑                                │        │
//!    │         published snapshot ←───┘        │
//!    └──────── effect completions ─────────────┘
//! ```
//!
//! - **Action**: immutable description of what happened
//! - **State**: value-semantic snapshot owned by exactly one reducer scope
//! - **Effect**: inspectable description of async work (network, timers,
//!   persistence) that may feed further actions back into the store
//! - **Store**: the single serial dispatch loop owning the state tree

mod action;
mod effect;
mod reducer;
mod state;
mod store;

pub use action::Action;
pub use effect::{ActionSender, CancelId, Effect};
pub use reducer::{reduce_if_let, Combined, OnChange, Reducer};
pub use state::FeatureState;
pub use store::Store;
