use crate::clients::{AppClients, NotificationKind};
use crate::flux::{CancelId, Effect, Reducer};

use super::action::FavoritesAction;
use super::state::{FavoritesState, FAVORITE_CATEGORIES};

const FETCH: CancelId = CancelId::new("favorites", "fetch");
const FETCH_MORE: CancelId = CancelId::new("favorites", "fetch_more");
const MODIFY: CancelId = CancelId::new("favorites", "modify");

pub struct FavoritesReducer {
    clients: AppClients,
}

impl FavoritesReducer {
    pub fn new(clients: AppClients) -> Self {
        Self { clients }
    }

    pub fn cancel_ids() -> [CancelId; 3] {
        [FETCH, FETCH_MORE, MODIFY]
    }

    fn notify(&self, kind: NotificationKind) -> Effect<FavoritesAction> {
        let feedback = self.clients.feedback.clone();
        Effect::run(move |_sender| async move {
            feedback.generate_notification_feedback(kind);
        })
    }
}

impl Reducer for FavoritesReducer {
    type State = FavoritesState;
    type Action = FavoritesAction;

    fn reduce(&self, state: &mut FavoritesState, action: FavoritesAction) -> Effect<FavoritesAction> {
        match action {
            FavoritesAction::SetIndex(index) => {
                if index >= FAVORITE_CATEGORIES {
                    return Effect::none();
                }
                state.index = index;
                Effect::none()
            }

            FavoritesAction::Fetch(index) => {
                if index >= FAVORITE_CATEGORIES || !state.listing(index).begin_refresh() {
                    return Effect::none();
                }
                let gallery = self.clients.gallery.clone();
                Effect::run_cancellable(FETCH, move |sender| async move {
                    let result = gallery.favorites(index, 0, None).await;
                    sender.send(FavoritesAction::FetchDone(index, result));
                })
            }

            FavoritesAction::FetchDone(index, result) => {
                let fetched = state.listing(index).finish_refresh(result);
                if fetched.is_empty() {
                    return Effect::none();
                }
                let database = self.clients.database.clone();
                Effect::run(move |_sender| async move {
                    database.cache_galleries(fetched).await;
                })
            }

            FavoritesAction::FetchMore(index) => {
                if index >= FAVORITE_CATEGORIES {
                    return Effect::none();
                }
                let Some(request) = state.listing(index).begin_fetch_more() else {
                    return Effect::none();
                };
                let gallery = self.clients.gallery.clone();
                Effect::run_cancellable(FETCH_MORE, move |sender| async move {
                    let result = gallery.favorites(index, request.page, request.last_id).await;
                    sender.send(FavoritesAction::FetchMoreDone(index, result));
                })
            }

            FavoritesAction::FetchMoreDone(index, result) => {
                let appended = state.listing(index).finish_fetch_more(result);
                let mut effects = Vec::new();
                if !appended.fetched.is_empty() {
                    let database = self.clients.database.clone();
                    let fetched = appended.fetched;
                    effects.push(Effect::run(move |_sender| async move {
                        database.cache_galleries(fetched).await;
                    }));
                }
                if appended.retry {
                    effects.push(Effect::send(FavoritesAction::FetchMore(index)));
                }
                Effect::merge(effects)
            }

            FavoritesAction::AddFavorite { gid, token, category } => {
                if category >= FAVORITE_CATEGORIES {
                    return Effect::none();
                }
                let gallery = self.clients.gallery.clone();
                Effect::run_cancellable(MODIFY, move |sender| async move {
                    let result = gallery.favor_gallery(gid, token, category).await;
                    sender.send(FavoritesAction::OpDone(category, result));
                })
            }

            FavoritesAction::RemoveFavorite { gid } => {
                let gallery = self.clients.gallery.clone();
                let category = state.index;
                Effect::run_cancellable(MODIFY, move |sender| async move {
                    let result = gallery.unfavor_gallery(gid).await;
                    sender.send(FavoritesAction::OpDone(category, result));
                })
            }

            FavoritesAction::OpDone(category, result) => match result {
                Ok(()) => Effect::merge([
                    Effect::send(FavoritesAction::Fetch(category)),
                    self.notify(NotificationKind::Success),
                ]),
                Err(error) => {
                    tracing::debug!(%error, "favorite operation failed");
                    self.notify(NotificationKind::Error)
                }
            },

            FavoritesAction::Teardown => Effect::merge(Self::cancel_ids().map(Effect::cancel)),
        }
    }
}
