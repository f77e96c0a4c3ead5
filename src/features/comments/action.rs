use crate::error::AppError;
use crate::features::detail::DetailAction;
use crate::flux::Action;
use crate::models::GalleryComment;

use super::state::CommentsRoute;

#[derive(Debug, Clone, PartialEq)]
pub enum CommentsAction {
    /// Seed the screen from the owning detail screen's data.
    OnAppear {
        gid: String,
        comments: Vec<GalleryComment>,
    },
    SetNavigation(Option<CommentsRoute>),
    ClearSubStates,

    SetCommentContent(String),
    SetPostCommentFocused(bool),
    /// The post-comment sheet appeared; focus the editor after a beat.
    OnPostCommentAppear,

    PostComment,
    EditComment {
        comment_id: String,
    },
    VoteComment {
        comment_id: String,
        vote: i32,
    },
    PerformCommentActionDone(Result<(), AppError>),

    /// Action for the nested detail screen; routed by the owning detail
    /// reducer, which tracks nesting depth.
    Detail(Box<DetailAction>),

    Teardown,
}

impl Action for CommentsAction {}
