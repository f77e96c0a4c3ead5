use crate::clients::AppClients;
use crate::flux::{CancelId, Effect, Reducer};

use super::action::PopularAction;
use super::state::PopularState;

const FETCH: CancelId = CancelId::new("popular", "fetch");

pub struct PopularReducer {
    clients: AppClients,
}

impl PopularReducer {
    pub fn new(clients: AppClients) -> Self {
        Self { clients }
    }

    pub fn cancel_ids() -> [CancelId; 1] {
        [FETCH]
    }
}

impl Reducer for PopularReducer {
    type State = PopularState;
    type Action = PopularAction;

    fn reduce(&self, state: &mut PopularState, action: PopularAction) -> Effect<PopularAction> {
        match action {
            PopularAction::Fetch => {
                state.not_found = false;
                state.failed = false;
                if state.loading {
                    return Effect::none();
                }
                state.loading = true;
                let gallery = self.clients.gallery.clone();
                Effect::run_cancellable(FETCH, move |sender| async move {
                    let result = gallery.popular().await;
                    sender.send(PopularAction::FetchDone(result));
                })
            }

            PopularAction::FetchDone(result) => {
                state.loading = false;
                match result {
                    Ok(list) if list.galleries.is_empty() => {
                        state.not_found = true;
                        Effect::none()
                    }
                    Ok(list) => {
                        state.galleries = list.galleries.clone();
                        let database = self.clients.database.clone();
                        Effect::run(move |_sender| async move {
                            database.cache_galleries(list.galleries).await;
                        })
                    }
                    Err(error) => {
                        tracing::debug!(%error, "popular fetch failed");
                        state.failed = true;
                        Effect::none()
                    }
                }
            }

            PopularAction::Teardown => Effect::merge(Self::cancel_ids().map(Effect::cancel)),
        }
    }
}
