//! Shared test harness: a programmable gallery client and store helpers.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use lightbox::clients::{
    AppClients, GalleryClient, GalleryContents, GalleryDetailPayload, MemoryDatabase,
    RecordingFeedback,
};
use lightbox::error::AppError;
use lightbox::flux::{Reducer, Store};
use lightbox::models::{Gallery, GalleryDetail, GalleryList, PageNumber};

/// Gallery client double with per-operation scripted responses.
///
/// List operations pop scripted pages front-first and repeat the last one
/// when the script runs dry. `delay` applies to every call, giving
/// cancellation tests a window to interrupt.
pub struct MockGallery {
    pub delay: Mutex<Option<Duration>>,

    pub search_pages: Mutex<VecDeque<Result<GalleryList, AppError>>>,
    pub frontpage_pages: Mutex<VecDeque<Result<GalleryList, AppError>>>,
    pub detail_result: Mutex<Option<Result<GalleryDetailPayload, AppError>>>,
    pub contents_result: Mutex<Option<Result<GalleryContents, AppError>>>,
    pub op_result: Mutex<Result<(), AppError>>,
    pub archive_result: Mutex<Result<String, AppError>>,

    pub search_calls: AtomicUsize,
    pub frontpage_calls: AtomicUsize,
    pub detail_calls: AtomicUsize,
    pub vote_comment_calls: AtomicUsize,
    pub op_calls: AtomicUsize,
}

impl Default for MockGallery {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGallery {
    pub fn new() -> Self {
        Self {
            delay: Mutex::new(None),
            search_pages: Mutex::new(VecDeque::new()),
            frontpage_pages: Mutex::new(VecDeque::new()),
            detail_result: Mutex::new(None),
            contents_result: Mutex::new(None),
            op_result: Mutex::new(Ok(())),
            archive_result: Mutex::new(Ok("queued".to_string())),
            search_calls: AtomicUsize::new(0),
            frontpage_calls: AtomicUsize::new(0),
            detail_calls: AtomicUsize::new(0),
            vote_comment_calls: AtomicUsize::new(0),
            op_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(self, delay: Duration) -> Self {
        *self.delay.lock() = Some(delay);
        self
    }

    pub fn script_search(&self, pages: Vec<Result<GalleryList, AppError>>) {
        *self.search_pages.lock() = pages.into();
    }

    pub fn script_frontpage(&self, pages: Vec<Result<GalleryList, AppError>>) {
        *self.frontpage_pages.lock() = pages.into();
    }

    pub fn script_detail(&self, result: Result<GalleryDetailPayload, AppError>) {
        *self.detail_result.lock() = Some(result);
    }

    async fn pause(&self) {
        let delay = *self.delay.lock();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn next_page(
        queue: &Mutex<VecDeque<Result<GalleryList, AppError>>>,
    ) -> Result<GalleryList, AppError> {
        let mut queue = queue.lock();
        if queue.len() > 1 {
            queue.pop_front().expect("non-empty")
        } else {
            queue.front().cloned().unwrap_or(Err(AppError::NotFound))
        }
    }

    fn op_outcome(&self) -> Result<(), AppError> {
        self.op_calls.fetch_add(1, Ordering::SeqCst);
        self.op_result.lock().clone()
    }
}

#[async_trait]
impl GalleryClient for MockGallery {
    async fn frontpage(&self, _page: u64, _last_id: Option<String>) -> Result<GalleryList, AppError> {
        self.frontpage_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        Self::next_page(&self.frontpage_pages)
    }

    async fn popular(&self) -> Result<GalleryList, AppError> {
        self.pause().await;
        Err(AppError::NotFound)
    }

    async fn search(
        &self,
        _keyword: String,
        _page: u64,
        _last_id: Option<String>,
    ) -> Result<GalleryList, AppError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        Self::next_page(&self.search_pages)
    }

    async fn favorites(
        &self,
        _category: usize,
        _page: u64,
        _last_id: Option<String>,
    ) -> Result<GalleryList, AppError> {
        self.pause().await;
        Err(AppError::NotFound)
    }

    async fn gallery_detail(&self, _gid: String) -> Result<GalleryDetailPayload, AppError> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        self.detail_result.lock().clone().unwrap_or(Err(AppError::NotFound))
    }

    async fn contents(&self, _gid: String, _page: u64) -> Result<GalleryContents, AppError> {
        self.pause().await;
        self.contents_result.lock().clone().unwrap_or(Err(AppError::NotFound))
    }

    async fn rate_gallery(
        &self,
        _gid: String,
        _token: String,
        _api_key: String,
        _rating: u32,
    ) -> Result<(), AppError> {
        self.pause().await;
        self.op_outcome()
    }

    async fn favor_gallery(
        &self,
        _gid: String,
        _token: String,
        _category: usize,
    ) -> Result<(), AppError> {
        self.pause().await;
        self.op_outcome()
    }

    async fn unfavor_gallery(&self, _gid: String) -> Result<(), AppError> {
        self.pause().await;
        self.op_outcome()
    }

    async fn post_comment(&self, _gid: String, _content: String) -> Result<(), AppError> {
        self.pause().await;
        self.op_outcome()
    }

    async fn edit_comment(
        &self,
        _gid: String,
        _comment_id: String,
        _content: String,
    ) -> Result<(), AppError> {
        self.pause().await;
        self.op_outcome()
    }

    async fn vote_comment(
        &self,
        _gid: String,
        _comment_id: String,
        _vote: i32,
    ) -> Result<(), AppError> {
        self.vote_comment_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        self.op_outcome()
    }

    async fn vote_tag(
        &self,
        _gid: String,
        _token: String,
        _api_key: String,
        _tag: String,
        _vote: i32,
    ) -> Result<(), AppError> {
        self.pause().await;
        self.op_outcome()
    }

    async fn request_archive(&self, _gid: String, _resolution: String) -> Result<String, AppError> {
        self.pause().await;
        self.archive_result.lock().clone()
    }
}

/// Wired-up test environment around one [`MockGallery`].
pub struct TestEnv {
    pub gallery: Arc<MockGallery>,
    pub feedback: Arc<RecordingFeedback>,
    pub clients: AppClients,
}

impl TestEnv {
    pub fn new() -> Self {
        let gallery = Arc::new(MockGallery::new());
        let feedback = Arc::new(RecordingFeedback::default());
        let clients = AppClients::new(
            gallery.clone(),
            Arc::new(MemoryDatabase::default()),
            feedback.clone(),
        );
        Self {
            gallery,
            feedback,
            clients,
        }
    }
}

pub fn gallery(id: &str) -> Gallery {
    Gallery {
        id: id.to_string(),
        token: format!("token-{id}"),
        title: format!("Gallery {id}"),
        category: "Manga".to_string(),
        ..Gallery::default()
    }
}

pub fn page_of(current: u64, maximum: u64, ids: &[&str]) -> GalleryList {
    GalleryList {
        page: PageNumber { current, maximum },
        galleries: ids.iter().map(|id| gallery(id)).collect(),
    }
}

pub fn detail_payload(gid: &str) -> GalleryDetailPayload {
    GalleryDetailPayload {
        detail: GalleryDetail {
            id: gid.to_string(),
            title: format!("Gallery {gid}"),
            category: "Manga".to_string(),
            page_count: 20,
            ..GalleryDetail::default()
        },
        api_key: "key".to_string(),
        ..GalleryDetailPayload::default()
    }
}

/// Poll the store until `pred` holds, or panic after two seconds.
pub async fn wait_for<R, F>(store: &Store<R>, pred: F) -> R::State
where
    R: Reducer + Send + Sync + 'static,
    F: Fn(&R::State) -> bool,
{
    let mut states = store.subscribe();
    tokio::time::timeout(Duration::from_secs(2), async {
        loop {
            if pred(&states.borrow()) {
                return states.borrow().clone();
            }
            states.changed().await.expect("store dispatch loop ended");
        }
    })
    .await
    .expect("state condition not reached within deadline")
}

/// Let in-flight effects settle.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(100)).await;
}
