//! Persistence collaborator.
//!
//! Reads return whatever was cached (possibly nothing); writes are async
//! fire-and-forget — failures are logged by the implementation, never
//! surfaced to reducers. Called only from effects.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::models::{Gallery, GalleryComment, GalleryDetail, GalleryTag};

/// Persisted environment restored at launch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppEnv {
    pub history_keywords: Vec<String>,
    pub quick_search_words: Vec<String>,
}

/// Cached per-gallery records, fetched as one unit by the detail screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CachedGalleryState {
    pub tags: Vec<GalleryTag>,
    pub preview_urls: BTreeMap<u32, String>,
    pub comments: Vec<GalleryComment>,
    pub reading_progress: u32,
}

#[async_trait]
pub trait DatabaseClient: Send + Sync {
    async fn fetch_app_env(&self) -> AppEnv;
    async fn update_history_keywords(&self, keywords: Vec<String>);

    async fn fetch_gallery(&self, gid: &str) -> Option<Gallery>;
    async fn cache_galleries(&self, galleries: Vec<Gallery>);

    async fn fetch_gallery_detail(&self, gid: &str) -> Option<GalleryDetail>;
    async fn cache_gallery_detail(&self, detail: GalleryDetail);

    async fn fetch_gallery_state(&self, gid: &str) -> Option<CachedGalleryState>;
    async fn update_tags(&self, gid: &str, tags: Vec<GalleryTag>);
    async fn update_preview_urls(&self, gid: &str, preview_urls: BTreeMap<u32, String>);
    async fn update_comments(&self, gid: &str, comments: Vec<GalleryComment>);
    async fn update_reading_progress(&self, gid: &str, progress: u32);

    /// Record that a gallery was opened, for the history screen.
    async fn update_last_open(&self, gid: &str);
    async fn fetch_history_galleries(&self, limit: usize) -> Vec<Gallery>;
}

/// In-memory database used by tests and previews.
#[derive(Default)]
pub struct MemoryDatabase {
    inner: Mutex<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    app_env: AppEnv,
    galleries: HashMap<String, Gallery>,
    details: HashMap<String, GalleryDetail>,
    states: HashMap<String, CachedGalleryState>,
    // Most recently opened last.
    open_order: Vec<String>,
}

impl MemoryInner {
    fn state_mut(&mut self, gid: &str) -> &mut CachedGalleryState {
        self.states.entry(gid.to_string()).or_default()
    }
}

#[async_trait]
impl DatabaseClient for MemoryDatabase {
    async fn fetch_app_env(&self) -> AppEnv {
        self.inner.lock().app_env.clone()
    }

    async fn update_history_keywords(&self, keywords: Vec<String>) {
        self.inner.lock().app_env.history_keywords = keywords;
    }

    async fn fetch_gallery(&self, gid: &str) -> Option<Gallery> {
        self.inner.lock().galleries.get(gid).cloned()
    }

    async fn cache_galleries(&self, galleries: Vec<Gallery>) {
        let mut inner = self.inner.lock();
        for gallery in galleries {
            inner.galleries.insert(gallery.id.clone(), gallery);
        }
    }

    async fn fetch_gallery_detail(&self, gid: &str) -> Option<GalleryDetail> {
        self.inner.lock().details.get(gid).cloned()
    }

    async fn cache_gallery_detail(&self, detail: GalleryDetail) {
        self.inner.lock().details.insert(detail.id.clone(), detail);
    }

    async fn fetch_gallery_state(&self, gid: &str) -> Option<CachedGalleryState> {
        self.inner.lock().states.get(gid).cloned()
    }

    async fn update_tags(&self, gid: &str, tags: Vec<GalleryTag>) {
        self.inner.lock().state_mut(gid).tags = tags;
    }

    async fn update_preview_urls(&self, gid: &str, preview_urls: BTreeMap<u32, String>) {
        self.inner.lock().state_mut(gid).preview_urls = preview_urls;
    }

    async fn update_comments(&self, gid: &str, comments: Vec<GalleryComment>) {
        self.inner.lock().state_mut(gid).comments = comments;
    }

    async fn update_reading_progress(&self, gid: &str, progress: u32) {
        self.inner.lock().state_mut(gid).reading_progress = progress;
    }

    async fn update_last_open(&self, gid: &str) {
        let mut inner = self.inner.lock();
        inner.open_order.retain(|id| id != gid);
        inner.open_order.push(gid.to_string());
    }

    async fn fetch_history_galleries(&self, limit: usize) -> Vec<Gallery> {
        let inner = self.inner.lock();
        inner
            .open_order
            .iter()
            .rev()
            .take(limit)
            .filter_map(|gid| inner.galleries.get(gid).cloned())
            .collect()
    }
}
