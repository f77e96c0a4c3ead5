use std::time::Duration;

use crate::clients::AppClients;
use crate::features::detail::{DetailAction, DetailReducer, MAX_NESTING_DEPTH};
use crate::flux::{CancelId, Effect, Reducer};

use super::action::CommentsAction;
use super::state::{CommentsRoute, CommentsState};

const POST: CancelId = CancelId::new("comments", "post");
const EDIT: CancelId = CancelId::new("comments", "edit");
const VOTE: CancelId = CancelId::new("comments", "vote");

/// Delay before focusing the post-comment editor, letting the sheet
/// animation settle.
const FOCUS_DELAY: Duration = Duration::from_millis(750);

pub struct CommentsReducer {
    clients: AppClients,
}

impl CommentsReducer {
    pub fn new(clients: AppClients) -> Self {
        Self { clients }
    }

    pub fn cancel_ids() -> [CancelId; 3] {
        [POST, EDIT, VOTE]
    }
}

impl Reducer for CommentsReducer {
    type State = CommentsState;
    type Action = CommentsAction;

    fn reduce(&self, state: &mut CommentsState, action: CommentsAction) -> Effect<CommentsAction> {
        match action {
            CommentsAction::OnAppear { gid, comments } => {
                state.gid = gid;
                state.comments = comments;
                Effect::none()
            }

            CommentsAction::SetNavigation(route) => {
                let changed = state.route != route;
                state.route = route;
                match &state.route {
                    None => Effect::send(CommentsAction::ClearSubStates),
                    Some(CommentsRoute::Detail(gid)) if changed => {
                        state.detail = Some(Box::default());
                        Effect::send(CommentsAction::Detail(Box::new(DetailAction::OnAppear(
                            gid.clone(),
                        ))))
                    }
                    Some(_) => Effect::none(),
                }
            }

            CommentsAction::ClearSubStates => {
                state.comment_content.clear();
                state.post_comment_focused = false;
                state.detail = None;
                // Nested detail screens only ever run at instance 1 and
                // deeper; cancel is idempotent, so sweeping the whole range
                // is safe.
                Effect::merge(
                    (1..=MAX_NESTING_DEPTH)
                        .flat_map(|depth| DetailReducer::cancel_ids(depth))
                        .map(Effect::cancel)
                        .collect::<Vec<_>>(),
                )
            }

            CommentsAction::SetCommentContent(content) => {
                state.comment_content = content;
                Effect::none()
            }

            CommentsAction::SetPostCommentFocused(focused) => {
                state.post_comment_focused = focused;
                Effect::none()
            }

            CommentsAction::OnPostCommentAppear => Effect::run(move |sender| async move {
                tokio::time::sleep(FOCUS_DELAY).await;
                sender.send(CommentsAction::SetPostCommentFocused(true));
            }),

            CommentsAction::PostComment => {
                if state.comment_content.is_empty() || state.gid.is_empty() {
                    return Effect::none();
                }
                let gallery = self.clients.gallery.clone();
                let gid = state.gid.clone();
                let content = state.comment_content.clone();
                Effect::run_cancellable(POST, move |sender| async move {
                    let result = gallery.post_comment(gid, content).await;
                    sender.send(CommentsAction::PerformCommentActionDone(result));
                })
            }

            CommentsAction::EditComment { comment_id } => {
                let editable = state
                    .comments
                    .iter()
                    .any(|c| c.id == comment_id && c.editable);
                if state.comment_content.is_empty() || !editable {
                    return Effect::none();
                }
                let gallery = self.clients.gallery.clone();
                let gid = state.gid.clone();
                let content = state.comment_content.clone();
                Effect::run_cancellable(EDIT, move |sender| async move {
                    let result = gallery.edit_comment(gid, comment_id, content).await;
                    sender.send(CommentsAction::PerformCommentActionDone(result));
                })
            }

            CommentsAction::VoteComment { comment_id, vote } => {
                let votable = state
                    .comments
                    .iter()
                    .any(|c| c.id == comment_id && c.votable);
                if !votable || !(vote == 1 || vote == -1) {
                    return Effect::none();
                }
                let gallery = self.clients.gallery.clone();
                let gid = state.gid.clone();
                Effect::run_cancellable(VOTE, move |sender| async move {
                    let result = gallery.vote_comment(gid, comment_id, vote).await;
                    sender.send(CommentsAction::PerformCommentActionDone(result));
                })
            }

            CommentsAction::PerformCommentActionDone(result) => {
                if result.is_ok() {
                    state.comment_content.clear();
                    state.post_comment_focused = false;
                    if matches!(state.route, Some(CommentsRoute::PostComment)) {
                        state.route = None;
                    }
                }
                Effect::none()
            }

            // Routed by the owning detail reducer; nothing to do here.
            CommentsAction::Detail(_) => Effect::none(),

            CommentsAction::Teardown => Effect::merge(Self::cancel_ids().map(Effect::cancel)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GalleryComment;
    use std::sync::Arc;

    fn reducer() -> CommentsReducer {
        CommentsReducer::new(AppClients::with_gallery(Arc::new(
            crate::clients::test_support::UnreachableGallery,
        )))
    }

    fn comment(id: &str, votable: bool, editable: bool) -> GalleryComment {
        GalleryComment {
            id: id.to_string(),
            author: "someone".to_string(),
            content: "nice gallery".to_string(),
            votable,
            editable,
            ..GalleryComment::default()
        }
    }

    fn seeded() -> CommentsState {
        CommentsState {
            gid: "g1".to_string(),
            comments: vec![comment("c1", true, false), comment("mine", false, true)],
            ..CommentsState::default()
        }
    }

    #[test]
    fn post_with_empty_content_is_noop() {
        let reducer = reducer();
        let mut state = seeded();
        let before = state.clone();
        let effect = reducer.reduce(&mut state, CommentsAction::PostComment);
        assert!(effect.is_none());
        assert_eq!(state, before);
    }

    #[test]
    fn post_with_content_schedules_request() {
        let reducer = reducer();
        let mut state = seeded();
        state.comment_content = "hello".to_string();
        let effect = reducer.reduce(&mut state, CommentsAction::PostComment);
        assert!(effect.has_run_work());
    }

    #[test]
    fn vote_on_unvotable_comment_is_noop() {
        let reducer = reducer();
        let mut state = seeded();
        let effect = reducer.reduce(
            &mut state,
            CommentsAction::VoteComment {
                comment_id: "mine".to_string(),
                vote: 1,
            },
        );
        assert!(effect.is_none());
    }

    #[test]
    fn vote_magnitude_must_be_one() {
        let reducer = reducer();
        let mut state = seeded();
        let effect = reducer.reduce(
            &mut state,
            CommentsAction::VoteComment {
                comment_id: "c1".to_string(),
                vote: 5,
            },
        );
        assert!(effect.is_none());
    }

    #[test]
    fn successful_action_resets_composer() {
        let reducer = reducer();
        let mut state = seeded();
        state.comment_content = "pending".to_string();
        state.route = Some(CommentsRoute::PostComment);
        reducer.reduce(&mut state, CommentsAction::PerformCommentActionDone(Ok(())));
        assert!(state.comment_content.is_empty());
        assert!(state.route.is_none());
    }

    #[test]
    fn navigating_to_detail_creates_child_state() {
        let reducer = reducer();
        let mut state = seeded();
        let effect = reducer.reduce(
            &mut state,
            CommentsAction::SetNavigation(Some(CommentsRoute::Detail("g2".to_string()))),
        );
        assert!(state.detail.is_some());
        assert_eq!(effect.sent_actions().len(), 1);
    }

    #[test]
    fn clearing_navigation_resets_and_tears_down() {
        let reducer = reducer();
        let mut state = seeded();
        state.comment_content = "draft".to_string();
        state.post_comment_focused = true;
        state.detail = Some(Box::default());

        let effect = reducer.reduce(&mut state, CommentsAction::SetNavigation(None));
        assert_eq!(effect.sent_actions(), vec![&CommentsAction::ClearSubStates]);

        let effect = reducer.reduce(&mut state, CommentsAction::ClearSubStates);
        assert!(state.comment_content.is_empty());
        assert!(!state.post_comment_focused);
        assert!(state.detail.is_none());
        assert!(!effect.cancellations().is_empty());
    }
}
