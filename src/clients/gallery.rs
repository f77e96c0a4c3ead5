//! The gallery site client contract.
//!
//! One async method per site operation, each returning a typed
//! `Result<Payload, AppError>`. The core never sees wire formats; parsing
//! stays behind this trait.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::{GalleryComment, GalleryDetail, GalleryList, GalleryTag, PageNumber};

/// Everything the detail screen needs, fetched in one round trip.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GalleryDetailPayload {
    pub detail: GalleryDetail,
    pub tags: Vec<GalleryTag>,
    /// Preview thumbnails keyed by page index.
    pub preview_urls: BTreeMap<u32, String>,
    pub comments: Vec<GalleryComment>,
    /// Per-session API key scraped alongside the detail page.
    pub api_key: String,
}

/// One page of readable image URLs keyed by page index.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GalleryContents {
    pub page: PageNumber,
    pub contents: BTreeMap<u32, String>,
}

#[async_trait]
pub trait GalleryClient: Send + Sync {
    async fn frontpage(&self, page: u64, last_id: Option<String>) -> Result<GalleryList, AppError>;

    async fn popular(&self) -> Result<GalleryList, AppError>;

    async fn search(
        &self,
        keyword: String,
        page: u64,
        last_id: Option<String>,
    ) -> Result<GalleryList, AppError>;

    async fn favorites(
        &self,
        category: usize,
        page: u64,
        last_id: Option<String>,
    ) -> Result<GalleryList, AppError>;

    async fn gallery_detail(&self, gid: String) -> Result<GalleryDetailPayload, AppError>;

    async fn contents(&self, gid: String, page: u64) -> Result<GalleryContents, AppError>;

    async fn rate_gallery(
        &self,
        gid: String,
        token: String,
        api_key: String,
        rating: u32,
    ) -> Result<(), AppError>;

    async fn favor_gallery(
        &self,
        gid: String,
        token: String,
        category: usize,
    ) -> Result<(), AppError>;

    async fn unfavor_gallery(&self, gid: String) -> Result<(), AppError>;

    async fn post_comment(&self, gid: String, content: String) -> Result<(), AppError>;

    async fn edit_comment(
        &self,
        gid: String,
        comment_id: String,
        content: String,
    ) -> Result<(), AppError>;

    async fn vote_comment(&self, gid: String, comment_id: String, vote: i32)
        -> Result<(), AppError>;

    async fn vote_tag(
        &self,
        gid: String,
        token: String,
        api_key: String,
        tag: String,
        vote: i32,
    ) -> Result<(), AppError>;

    /// Ask the site's archiver to prepare a download; returns the server's
    /// response message.
    async fn request_archive(&self, gid: String, resolution: String) -> Result<String, AppError>;
}
