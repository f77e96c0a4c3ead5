//! Gallery records as consumed from the site client.

use serde::{Deserialize, Serialize};

/// A gallery as it appears in list screens.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Gallery {
    pub id: String,
    pub token: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub uploader: Option<String>,
    #[serde(default)]
    pub posted: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub page_count: u32,
}

/// Full metadata shown on the detail screen.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GalleryDetail {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub japanese_title: Option<String>,
    pub category: String,
    #[serde(default)]
    pub uploader: Option<String>,
    #[serde(default)]
    pub posted: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub rating_count: u32,
    /// The caller's own rating, 0 when unrated. Half-star units (0..=10).
    #[serde(default)]
    pub user_rating: u32,
    #[serde(default)]
    pub favorited: bool,
    #[serde(default)]
    pub favorite_category: Option<usize>,
    #[serde(default)]
    pub page_count: u32,
    #[serde(default)]
    pub archive_available: bool,
}

/// One comment thread entry under a gallery.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GalleryComment {
    pub id: String,
    pub author: String,
    pub content: String,
    #[serde(default)]
    pub score: i32,
    /// Uploader comments and the caller's own comments cannot be voted on.
    #[serde(default)]
    pub votable: bool,
    #[serde(default)]
    pub editable: bool,
    #[serde(default)]
    pub posted: Option<String>,
}

/// A tag namespace and its terms.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GalleryTag {
    pub namespace: String,
    pub terms: Vec<String>,
}
