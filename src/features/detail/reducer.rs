use std::time::Duration;

use crate::clients::{AppClients, FeedbackStyle, NotificationKind};
use crate::features::comments::{CommentsAction, CommentsReducer};
use crate::features::reading::{ReadingAction, ReadingReducer};
use crate::flux::{reduce_if_let, CancelId, Effect, Reducer};

use super::action::{DatabaseInfos, DetailAction};
use super::search::{DetailSearchAction, DetailSearchReducer};
use super::state::{DetailRoute, DetailState, MAX_NESTING_DEPTH};

const FETCH_DB_INFOS: CancelId = CancelId::new("detail", "fetch_database_infos");
const FETCH_DETAIL: CancelId = CancelId::new("detail", "fetch_gallery_detail");
const RATE: CancelId = CancelId::new("detail", "rate_gallery");
const FAVOR: CancelId = CancelId::new("detail", "favor_gallery");
const UNFAVOR: CancelId = CancelId::new("detail", "unfavor_gallery");
const POST_COMMENT: CancelId = CancelId::new("detail", "post_comment");
const VOTE_TAG: CancelId = CancelId::new("detail", "vote_tag");
const DOWNLOAD: CancelId = CancelId::new("detail", "download");

/// Delay before focusing the post-comment editor.
const FOCUS_DELAY: Duration = Duration::from_millis(750);
/// How long the rating control stays up after a confirmed drag.
const RATING_DISMISS_DELAY: Duration = Duration::from_secs(1);

pub struct DetailReducer {
    clients: AppClients,
    reading: ReadingReducer,
    comments: CommentsReducer,
    detail_search: DetailSearchReducer,
}

impl DetailReducer {
    pub fn new(clients: AppClients) -> Self {
        Self {
            reading: ReadingReducer::new(clients.clone()),
            comments: CommentsReducer::new(clients.clone()),
            detail_search: DetailSearchReducer::new(clients.clone()),
            clients,
        }
    }

    /// The fixed set of operations owned by the detail instance at
    /// `instance` nesting depth (0 = the outermost screen).
    pub fn cancel_ids(instance: u64) -> [CancelId; 8] {
        [
            FETCH_DB_INFOS.at(instance),
            FETCH_DETAIL.at(instance),
            RATE.at(instance),
            FAVOR.at(instance),
            UNFAVOR.at(instance),
            POST_COMMENT.at(instance),
            VOTE_TAG.at(instance),
            DOWNLOAD.at(instance),
        ]
    }

    fn impact(&self, style: FeedbackStyle) -> Effect<DetailAction> {
        let feedback = self.clients.feedback.clone();
        Effect::run(move |_sender| async move {
            feedback.generate_feedback(style);
        })
    }

    fn notify(&self, kind: NotificationKind) -> Effect<DetailAction> {
        let feedback = self.clients.feedback.clone();
        Effect::run(move |_sender| async move {
            feedback.generate_notification_feedback(kind);
        })
    }

    fn reduce_at_depth(
        &self,
        state: &mut DetailState,
        action: DetailAction,
        depth: u64,
    ) -> Effect<DetailAction> {
        match action {
            DetailAction::OnAppear(gid) => {
                state.gid = gid;
                Effect::send(DetailAction::FetchDatabaseInfos)
            }

            DetailAction::SetNavigation(route) => {
                let changed = state.route != route;
                state.route = route;
                match &state.route {
                    None => Effect::send(DetailAction::ClearSubStates),
                    Some(DetailRoute::Reading) if changed => {
                        state.reading.gid = state.gid.clone();
                        Effect::send(DetailAction::Reading(ReadingAction::Fetch))
                    }
                    Some(DetailRoute::Comments) if changed => {
                        state.comments = Some(Box::default());
                        Effect::send(DetailAction::Comments(CommentsAction::OnAppear {
                            gid: state.gid.clone(),
                            comments: state.gallery_comments.clone(),
                        }))
                    }
                    Some(DetailRoute::DetailSearch(keyword)) if changed => {
                        state.detail_search = Some(Box::default());
                        Effect::send(DetailAction::DetailSearch(DetailSearchAction::Fetch(
                            Some(keyword.clone()),
                        )))
                    }
                    Some(_) => Effect::none(),
                }
            }

            DetailAction::ClearSubStates => {
                state.reading = Default::default();
                state.comments = None;
                state.detail_search = None;
                state.comment_content.clear();
                state.post_comment_focused = false;

                let mut cancels: Vec<CancelId> = Vec::new();
                cancels.extend(ReadingReducer::cancel_ids());
                cancels.extend(CommentsReducer::cancel_ids());
                cancels.extend(DetailSearchReducer::cancel_ids());
                // Nested detail screens live at deeper instances; cancel is
                // idempotent, so sweeping the remaining range is safe.
                for instance in (depth + 1)..=MAX_NESTING_DEPTH {
                    cancels.extend(Self::cancel_ids(instance));
                }
                Effect::merge(cancels.into_iter().map(Effect::cancel).collect::<Vec<_>>())
            }

            DetailAction::SetCommentContent(content) => {
                state.comment_content = content;
                Effect::none()
            }

            DetailAction::SetPostCommentFocused(focused) => {
                state.post_comment_focused = focused;
                Effect::none()
            }

            DetailAction::OnPostCommentAppear => Effect::run(move |sender| async move {
                tokio::time::sleep(FOCUS_DELAY).await;
                sender.send(DetailAction::SetPostCommentFocused(true));
            }),

            DetailAction::ToggleShowUserRating => {
                state.shows_user_rating = !state.shows_user_rating;
                self.impact(FeedbackStyle::Soft)
            }

            DetailAction::UpdateRating(rating) => {
                state.user_rating = rating.clamp(1, 10);
                Effect::none()
            }

            DetailAction::ConfirmRating(rating) => {
                state.user_rating = rating.clamp(1, 10);
                Effect::merge([
                    Effect::send(DetailAction::RateGallery),
                    self.impact(FeedbackStyle::Soft),
                    Effect::run(move |sender| async move {
                        tokio::time::sleep(RATING_DISMISS_DELAY).await;
                        sender.send(DetailAction::ConfirmRatingDone);
                    }),
                ])
            }

            DetailAction::ConfirmRatingDone => {
                state.shows_user_rating = false;
                Effect::none()
            }

            DetailAction::FetchDatabaseInfos => {
                if state.gid.is_empty() {
                    return Effect::none();
                }
                let database = self.clients.database.clone();
                let gid = state.gid.clone();
                Effect::merge([
                    Effect::send(DetailAction::SaveGalleryHistory),
                    Effect::run_cancellable(FETCH_DB_INFOS.at(depth), move |sender| async move {
                        let infos = DatabaseInfos {
                            gallery: database.fetch_gallery(&gid).await,
                            detail: database.fetch_gallery_detail(&gid).await,
                            cached: database.fetch_gallery_state(&gid).await,
                        };
                        sender.send(DetailAction::FetchDatabaseInfosDone(infos));
                    }),
                ])
            }

            DetailAction::FetchDatabaseInfosDone(infos) => {
                if let Some(gallery) = infos.gallery {
                    state.gallery = gallery;
                }
                if let Some(detail) = infos.detail {
                    state.user_rating = detail.user_rating;
                    state.detail = Some(detail);
                }
                if let Some(cached) = infos.cached {
                    state.tags = cached.tags;
                    state.preview_urls = cached.preview_urls;
                    state.gallery_comments = cached.comments;
                    state.reading.progress = cached.reading_progress;
                }
                Effect::send(DetailAction::FetchGalleryDetail)
            }

            DetailAction::SaveGalleryHistory => {
                if state.gid.is_empty() {
                    return Effect::none();
                }
                let database = self.clients.database.clone();
                let gid = state.gid.clone();
                Effect::run(move |_sender| async move {
                    database.update_last_open(&gid).await;
                })
            }

            DetailAction::FetchGalleryDetail => {
                if state.loading || state.gid.is_empty() {
                    return Effect::none();
                }
                state.failed = false;
                state.loading = true;
                let gallery = self.clients.gallery.clone();
                let gid = state.gid.clone();
                Effect::run_cancellable(FETCH_DETAIL.at(depth), move |sender| async move {
                    let result = gallery.gallery_detail(gid).await;
                    sender.send(DetailAction::FetchGalleryDetailDone(result));
                })
            }

            DetailAction::FetchGalleryDetailDone(result) => {
                state.loading = false;
                match result {
                    Ok(payload) => {
                        state.api_key = payload.api_key;
                        state.user_rating = payload.detail.user_rating;
                        state.detail = Some(payload.detail);
                        state.tags = payload.tags;
                        state.preview_urls = payload.preview_urls;
                        state.gallery_comments = payload.comments;
                        Effect::merge([
                            Effect::send(DetailAction::SyncGalleryTags),
                            Effect::send(DetailAction::SyncGalleryDetail),
                            Effect::send(DetailAction::SyncPreviewUrls),
                            Effect::send(DetailAction::SyncComments),
                        ])
                    }
                    Err(error) => {
                        tracing::debug!(%error, "gallery detail fetch failed");
                        state.failed = true;
                        Effect::none()
                    }
                }
            }

            DetailAction::SyncGalleryTags => {
                let database = self.clients.database.clone();
                let gid = state.gid.clone();
                let tags = state.tags.clone();
                Effect::run(move |_sender| async move {
                    database.update_tags(&gid, tags).await;
                })
            }

            DetailAction::SyncGalleryDetail => {
                let Some(detail) = state.detail.clone() else {
                    return Effect::none();
                };
                let database = self.clients.database.clone();
                Effect::run(move |_sender| async move {
                    database.cache_gallery_detail(detail).await;
                })
            }

            DetailAction::SyncPreviewUrls => {
                let database = self.clients.database.clone();
                let gid = state.gid.clone();
                let preview_urls = state.preview_urls.clone();
                Effect::run(move |_sender| async move {
                    database.update_preview_urls(&gid, preview_urls).await;
                })
            }

            DetailAction::SyncComments => {
                let database = self.clients.database.clone();
                let gid = state.gid.clone();
                let comments = state.gallery_comments.clone();
                Effect::run(move |_sender| async move {
                    database.update_comments(&gid, comments).await;
                })
            }

            DetailAction::RateGallery => {
                if state.api_key.is_empty() || state.user_rating == 0 {
                    return Effect::none();
                }
                let gallery = self.clients.gallery.clone();
                let gid = state.gid.clone();
                let token = state.gallery.token.clone();
                let api_key = state.api_key.clone();
                let rating = state.user_rating;
                Effect::run_cancellable(RATE.at(depth), move |sender| async move {
                    let result = gallery.rate_gallery(gid, token, api_key, rating).await;
                    sender.send(DetailAction::AnyOpDone(result));
                })
            }

            DetailAction::FavorGallery(category) => {
                let gallery = self.clients.gallery.clone();
                let gid = state.gid.clone();
                let token = state.gallery.token.clone();
                Effect::run_cancellable(FAVOR.at(depth), move |sender| async move {
                    let result = gallery.favor_gallery(gid, token, category).await;
                    sender.send(DetailAction::AnyOpDone(result));
                })
            }

            DetailAction::UnfavorGallery => {
                let gallery = self.clients.gallery.clone();
                let gid = state.gid.clone();
                Effect::run_cancellable(UNFAVOR.at(depth), move |sender| async move {
                    let result = gallery.unfavor_gallery(gid).await;
                    sender.send(DetailAction::AnyOpDone(result));
                })
            }

            DetailAction::PostComment => {
                if state.comment_content.is_empty() {
                    return Effect::none();
                }
                let gallery = self.clients.gallery.clone();
                let gid = state.gid.clone();
                let content = state.comment_content.clone();
                Effect::run_cancellable(POST_COMMENT.at(depth), move |sender| async move {
                    let result = gallery.post_comment(gid, content).await;
                    sender.send(DetailAction::AnyOpDone(result));
                })
            }

            DetailAction::VoteTag(tag, vote) => {
                if state.api_key.is_empty() || !(vote == 1 || vote == -1) {
                    return Effect::none();
                }
                let gallery = self.clients.gallery.clone();
                let gid = state.gid.clone();
                let token = state.gallery.token.clone();
                let api_key = state.api_key.clone();
                Effect::run_cancellable(VOTE_TAG.at(depth), move |sender| async move {
                    let result = gallery.vote_tag(gid, token, api_key, tag, vote).await;
                    sender.send(DetailAction::AnyOpDone(result));
                })
            }

            DetailAction::AnyOpDone(result) => match result {
                Ok(()) => Effect::merge([
                    Effect::send(DetailAction::FetchGalleryDetail),
                    self.notify(NotificationKind::Success),
                ]),
                Err(error) => {
                    tracing::debug!(%error, "gallery operation failed");
                    self.notify(NotificationKind::Error)
                }
            },

            DetailAction::SendDownloadCommand(resolution) => {
                state.download_failed = false;
                if state.download_sending {
                    return Effect::none();
                }
                state.download_sending = true;
                let gallery = self.clients.gallery.clone();
                let gid = state.gid.clone();
                Effect::run_cancellable(DOWNLOAD.at(depth), move |sender| async move {
                    let result = gallery.request_archive(gid, resolution).await;
                    sender.send(DetailAction::SendDownloadCommandDone(result));
                })
            }

            DetailAction::SendDownloadCommandDone(result) => {
                state.download_sending = false;
                match result {
                    Ok(response) => state.download_response = Some(response),
                    Err(error) => {
                        tracing::debug!(%error, "download command failed");
                        state.download_failed = true;
                    }
                }
                Effect::none()
            }

            DetailAction::ResetDownloadResponse => {
                state.download_response = None;
                state.download_sending = false;
                state.download_failed = false;
                Effect::none()
            }

            DetailAction::Teardown => {
                Effect::merge(Self::cancel_ids(depth).map(Effect::cancel))
            }

            DetailAction::Reading(ReadingAction::PerformDismiss) => {
                Effect::send(DetailAction::SetNavigation(None))
            }

            DetailAction::Reading(action) => self
                .reading
                .reduce(&mut state.reading, action)
                .map(DetailAction::Reading),

            // Nested detail actions recurse into the boxed child, bounded
            // by MAX_NESTING_DEPTH.
            DetailAction::Comments(CommentsAction::Detail(nested)) => {
                if depth >= MAX_NESTING_DEPTH {
                    tracing::warn!(depth, "dropping action beyond supported nesting depth");
                    return Effect::none();
                }
                let Some(inner) = state
                    .comments
                    .as_deref_mut()
                    .and_then(|c| c.detail.as_deref_mut())
                else {
                    tracing::trace!("dropped action for absent nested detail");
                    return Effect::none();
                };
                self.reduce_at_depth(inner, *nested, depth + 1)
                    .map(|action| DetailAction::Comments(CommentsAction::Detail(Box::new(action))))
            }

            DetailAction::Comments(CommentsAction::PerformCommentActionDone(result)) => {
                let child = reduce_if_let(
                    &self.comments,
                    state.comments.as_deref_mut(),
                    CommentsAction::PerformCommentActionDone(result.clone()),
                )
                .map(DetailAction::Comments);
                Effect::merge([child, Effect::send(DetailAction::AnyOpDone(result))])
            }

            DetailAction::Comments(action) => reduce_if_let(
                &self.comments,
                state.comments.as_deref_mut(),
                action,
            )
            .map(DetailAction::Comments),

            DetailAction::DetailSearch(DetailSearchAction::Detail(nested)) => {
                if depth >= MAX_NESTING_DEPTH {
                    tracing::warn!(depth, "dropping action beyond supported nesting depth");
                    return Effect::none();
                }
                let Some(inner) = state
                    .detail_search
                    .as_deref_mut()
                    .and_then(|s| s.detail.as_deref_mut())
                else {
                    tracing::trace!("dropped action for absent nested detail");
                    return Effect::none();
                };
                self.reduce_at_depth(inner, *nested, depth + 1)
                    .map(|action| {
                        DetailAction::DetailSearch(DetailSearchAction::Detail(Box::new(action)))
                    })
            }

            DetailAction::DetailSearch(action) => reduce_if_let(
                &self.detail_search,
                state.detail_search.as_deref_mut(),
                action,
            )
            .map(DetailAction::DetailSearch),
        }
    }
}

impl Reducer for DetailReducer {
    type State = DetailState;
    type Action = DetailAction;

    fn reduce(&self, state: &mut DetailState, action: DetailAction) -> Effect<DetailAction> {
        self.reduce_at_depth(state, action, 0)
    }
}
