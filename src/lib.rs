//! Application core for a gallery-board client.
//!
//! Everything user-visible is derived from one state tree that only ever
//! changes inside the serial dispatch loop of [`flux::Store`]:
//!
//! ```text
//! UI event ──→ Action ──→ Store ──→ Reducer ──→ (State, Effect)
//!                           ↑                       │
//!                           └── effect completions ─┘
//! ```
//!
//! - [`flux`] - the engine: actions, effects, reducers, the store
//! - [`features`] - one reducer per screen, composed under
//!   [`features::app`]
//! - [`clients`] - injected collaborators (network, persistence, haptics)
//! - [`models`] - plain data shared across features
//!
//! The presentation layer subscribes to state snapshots and dispatches
//! actions; it never mutates state directly.

pub mod clients;
pub mod config;
pub mod error;
pub mod features;
pub mod flux;
pub mod models;
pub mod telemetry;
