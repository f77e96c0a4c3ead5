use crate::features::detail::DetailState;
use crate::flux::FeatureState;
use crate::models::GalleryComment;

#[derive(Debug, Clone, PartialEq)]
pub enum CommentsRoute {
    PostComment,
    /// A comment link led to another gallery.
    Detail(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommentsState {
    pub route: Option<CommentsRoute>,
    pub gid: String,
    pub comments: Vec<GalleryComment>,
    pub comment_content: String,
    pub post_comment_focused: bool,
    /// Present while `route` is `Detail`; absent means torn down.
    pub detail: Option<Box<DetailState>>,
}

impl FeatureState for CommentsState {}
