use crate::clients::AppClients;
use crate::flux::{CancelId, Effect, Reducer};
use crate::models::STALE_REFETCH_LIMIT;

use super::action::ReadingAction;
use super::state::ReadingState;

const FETCH: CancelId = CancelId::new("reading", "fetch");
const FETCH_MORE: CancelId = CancelId::new("reading", "fetch_more");

pub struct ReadingReducer {
    clients: AppClients,
}

impl ReadingReducer {
    pub fn new(clients: AppClients) -> Self {
        Self { clients }
    }

    pub fn cancel_ids() -> [CancelId; 2] {
        [FETCH, FETCH_MORE]
    }
}

impl Reducer for ReadingReducer {
    type State = ReadingState;
    type Action = ReadingAction;

    fn reduce(&self, state: &mut ReadingState, action: ReadingAction) -> Effect<ReadingAction> {
        match action {
            ReadingAction::Fetch => {
                state.failed = false;
                if state.gid.is_empty() || state.loading {
                    return Effect::none();
                }
                state.loading = true;
                state.page.current = 0;
                let gallery = self.clients.gallery.clone();
                let gid = state.gid.clone();
                Effect::run_cancellable(FETCH, move |sender| async move {
                    let result = gallery.contents(gid, 0).await;
                    sender.send(ReadingAction::FetchDone(result));
                })
            }

            ReadingAction::FetchDone(result) => {
                state.loading = false;
                match result {
                    Ok(contents) => {
                        state.page = contents.page;
                        state.contents = contents.contents;
                        state.stale_fetches = 0;
                    }
                    Err(error) => {
                        tracing::debug!(%error, "contents fetch failed");
                        state.failed = true;
                    }
                }
                Effect::none()
            }

            ReadingAction::FetchMore => {
                state.more_failed = false;
                if !state.page.has_next() || state.loading_more {
                    return Effect::none();
                }
                state.loading_more = true;
                let gallery = self.clients.gallery.clone();
                let gid = state.gid.clone();
                let page = state.page.current + 1;
                Effect::run_cancellable(FETCH_MORE, move |sender| async move {
                    let result = gallery.contents(gid, page).await;
                    sender.send(ReadingAction::FetchMoreDone(result));
                })
            }

            ReadingAction::FetchMoreDone(result) => {
                state.loading_more = false;
                match result {
                    Ok(contents) => {
                        state.page = contents.page;
                        let before = state.contents.len();
                        state.contents.extend(contents.contents);
                        let grew = state.contents.len() > before;
                        if grew {
                            state.stale_fetches = 0;
                            return Effect::none();
                        }
                        if before != 0 {
                            state.stale_fetches = state.stale_fetches.saturating_add(1);
                        }
                        if before != 0
                            && state.page.has_next()
                            && state.stale_fetches < STALE_REFETCH_LIMIT
                        {
                            Effect::send(ReadingAction::FetchMore)
                        } else {
                            Effect::none()
                        }
                    }
                    Err(error) => {
                        tracing::debug!(%error, "contents fetch-more failed");
                        state.more_failed = true;
                        Effect::none()
                    }
                }
            }

            ReadingAction::SetProgress(progress) => {
                if state.gid.is_empty() {
                    return Effect::none();
                }
                state.progress = progress;
                let database = self.clients.database.clone();
                let gid = state.gid.clone();
                Effect::run(move |_sender| async move {
                    database.update_reading_progress(&gid, progress).await;
                })
            }

            // Handled by the owning detail screen.
            ReadingAction::PerformDismiss => Effect::none(),

            ReadingAction::Teardown => Effect::merge(Self::cancel_ids().map(Effect::cancel)),
        }
    }
}
