//! Collaborator doubles for unit tests and previews.

use async_trait::async_trait;

use crate::clients::gallery::{GalleryClient, GalleryContents, GalleryDetailPayload};
use crate::error::AppError;
use crate::models::GalleryList;

/// A gallery client for exercising reducers that must not hit the network.
/// Every call fails with a network error.
pub struct UnreachableGallery;

fn unreachable_err() -> AppError {
    AppError::Network("gallery client not available".to_string())
}

#[async_trait]
impl GalleryClient for UnreachableGallery {
    async fn frontpage(&self, _page: u64, _last_id: Option<String>) -> Result<GalleryList, AppError> {
        Err(unreachable_err())
    }

    async fn popular(&self) -> Result<GalleryList, AppError> {
        Err(unreachable_err())
    }

    async fn search(
        &self,
        _keyword: String,
        _page: u64,
        _last_id: Option<String>,
    ) -> Result<GalleryList, AppError> {
        Err(unreachable_err())
    }

    async fn favorites(
        &self,
        _category: usize,
        _page: u64,
        _last_id: Option<String>,
    ) -> Result<GalleryList, AppError> {
        Err(unreachable_err())
    }

    async fn gallery_detail(&self, _gid: String) -> Result<GalleryDetailPayload, AppError> {
        Err(unreachable_err())
    }

    async fn contents(&self, _gid: String, _page: u64) -> Result<GalleryContents, AppError> {
        Err(unreachable_err())
    }

    async fn rate_gallery(
        &self,
        _gid: String,
        _token: String,
        _api_key: String,
        _rating: u32,
    ) -> Result<(), AppError> {
        Err(unreachable_err())
    }

    async fn favor_gallery(
        &self,
        _gid: String,
        _token: String,
        _category: usize,
    ) -> Result<(), AppError> {
        Err(unreachable_err())
    }

    async fn unfavor_gallery(&self, _gid: String) -> Result<(), AppError> {
        Err(unreachable_err())
    }

    async fn post_comment(&self, _gid: String, _content: String) -> Result<(), AppError> {
        Err(unreachable_err())
    }

    async fn edit_comment(
        &self,
        _gid: String,
        _comment_id: String,
        _content: String,
    ) -> Result<(), AppError> {
        Err(unreachable_err())
    }

    async fn vote_comment(
        &self,
        _gid: String,
        _comment_id: String,
        _vote: i32,
    ) -> Result<(), AppError> {
        Err(unreachable_err())
    }

    async fn vote_tag(
        &self,
        _gid: String,
        _token: String,
        _api_key: String,
        _tag: String,
        _vote: i32,
    ) -> Result<(), AppError> {
        Err(unreachable_err())
    }

    async fn request_archive(&self, _gid: String, _resolution: String) -> Result<String, AppError> {
        Err(unreachable_err())
    }
}
