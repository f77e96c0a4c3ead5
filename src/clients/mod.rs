//! Collaborator contracts and their default implementations.
//!
//! Reducers never reach for ambient globals; every capability they use is
//! injected through [`AppClients`] and swappable per environment
//! (production, preview, test).

mod database;
mod feedback;
mod gallery;
mod http;
pub mod test_support;

pub use database::{AppEnv, CachedGalleryState, DatabaseClient, MemoryDatabase};
pub use feedback::{FeedbackClient, FeedbackStyle, NoopFeedback, NotificationKind, RecordingFeedback};
pub use gallery::{GalleryClient, GalleryContents, GalleryDetailPayload};
pub use http::HttpGalleryClient;

use std::sync::Arc;

/// Capability table injected into reducers.
#[derive(Clone)]
pub struct AppClients {
    pub gallery: Arc<dyn GalleryClient>,
    pub database: Arc<dyn DatabaseClient>,
    pub feedback: Arc<dyn FeedbackClient>,
}

impl AppClients {
    pub fn new(
        gallery: Arc<dyn GalleryClient>,
        database: Arc<dyn DatabaseClient>,
        feedback: Arc<dyn FeedbackClient>,
    ) -> Self {
        Self {
            gallery,
            database,
            feedback,
        }
    }

    /// Environment backed by an in-memory database and silent feedback,
    /// with the given gallery client. Used by tests and previews.
    pub fn with_gallery(gallery: Arc<dyn GalleryClient>) -> Self {
        Self {
            gallery,
            database: Arc::new(MemoryDatabase::default()),
            feedback: Arc::new(NoopFeedback),
        }
    }
}
