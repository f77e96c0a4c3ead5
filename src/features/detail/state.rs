use std::collections::BTreeMap;

use crate::features::comments::CommentsState;
use crate::features::reading::ReadingState;
use crate::flux::FeatureState;
use crate::models::{Gallery, GalleryComment, GalleryDetail, GalleryTag};

use super::search::DetailSearchState;

/// Practical bound on detail-in-detail nesting. A comment link or a tag
/// search can open one more detail screen; anything deeper is dropped as a
/// no-op rather than recursing without bound.
pub const MAX_NESTING_DEPTH: u64 = 2;

#[derive(Debug, Clone, PartialEq)]
pub enum DetailRoute {
    Reading,
    Archives,
    Previews,
    Comments,
    PostComment,
    DetailSearch(String),
    Share(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailState {
    pub route: Option<DetailRoute>,
    pub gid: String,

    pub loading: bool,
    pub failed: bool,
    pub api_key: String,
    pub gallery: Gallery,
    pub detail: Option<GalleryDetail>,
    pub tags: Vec<GalleryTag>,
    pub preview_urls: BTreeMap<u32, String>,
    pub gallery_comments: Vec<GalleryComment>,

    pub shows_user_rating: bool,
    /// Half-star units (1..=10) while the rating control is engaged.
    pub user_rating: u32,

    pub comment_content: String,
    pub post_comment_focused: bool,

    pub download_sending: bool,
    pub download_failed: bool,
    pub download_response: Option<String>,

    pub reading: ReadingState,
    /// Present while the comments screen is routed to; absent means torn
    /// down.
    pub comments: Option<Box<CommentsState>>,
    /// Present while the inline tag search is routed to.
    pub detail_search: Option<Box<DetailSearchState>>,
}

impl FeatureState for DetailState {}
