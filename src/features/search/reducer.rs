use crate::clients::AppClients;
use crate::flux::{CancelId, Effect, Reducer};

use super::action::SearchAction;
use super::state::SearchState;

const FETCH: CancelId = CancelId::new("search", "fetch");
const FETCH_MORE: CancelId = CancelId::new("search", "fetch_more");
const LOAD_APP_ENV: CancelId = CancelId::new("search", "load_app_env");

pub struct SearchReducer {
    clients: AppClients,
}

impl SearchReducer {
    pub fn new(clients: AppClients) -> Self {
        Self { clients }
    }

    pub fn cancel_ids() -> [CancelId; 3] {
        [FETCH, FETCH_MORE, LOAD_APP_ENV]
    }

    fn sync_history(&self, state: &SearchState) -> Effect<SearchAction> {
        let database = self.clients.database.clone();
        let keywords = state.history_keywords.clone();
        Effect::run(move |_sender| async move {
            database.update_history_keywords(keywords).await;
        })
    }
}

impl Reducer for SearchReducer {
    type State = SearchState;
    type Action = SearchAction;

    fn reduce(&self, state: &mut SearchState, action: SearchAction) -> Effect<SearchAction> {
        match action {
            SearchAction::SetKeyword(keyword) => {
                state.keyword = keyword;
                Effect::none()
            }

            SearchAction::Fetch(keyword) => {
                if let Some(keyword) = keyword {
                    state.keyword = keyword;
                }
                if !state.listing.begin_refresh() {
                    return Effect::none();
                }
                state.last_keyword = state.keyword.clone();
                state.append_history_keywords(&[state.keyword.clone()]);

                let gallery = self.clients.gallery.clone();
                let keyword = state.last_keyword.clone();
                Effect::merge([
                    self.sync_history(state),
                    Effect::run_cancellable(FETCH, move |sender| async move {
                        let result = gallery.search(keyword, 0, None).await;
                        sender.send(SearchAction::FetchDone(result));
                    }),
                ])
            }

            SearchAction::FetchDone(result) => {
                let fetched = state.listing.finish_refresh(result);
                if fetched.is_empty() {
                    return Effect::none();
                }
                let database = self.clients.database.clone();
                Effect::run(move |_sender| async move {
                    database.cache_galleries(fetched).await;
                })
            }

            SearchAction::FetchMore => {
                let Some(request) = state.listing.begin_fetch_more() else {
                    return Effect::none();
                };
                let gallery = self.clients.gallery.clone();
                let keyword = state.last_keyword.clone();
                Effect::run_cancellable(FETCH_MORE, move |sender| async move {
                    let result = gallery.search(keyword, request.page, request.last_id).await;
                    sender.send(SearchAction::FetchMoreDone(result));
                })
            }

            SearchAction::FetchMoreDone(result) => {
                let appended = state.listing.finish_fetch_more(result);
                let mut effects = Vec::new();
                if !appended.fetched.is_empty() {
                    let database = self.clients.database.clone();
                    let fetched = appended.fetched;
                    effects.push(Effect::run(move |_sender| async move {
                        database.cache_galleries(fetched).await;
                    }));
                }
                if appended.retry {
                    effects.push(Effect::send(SearchAction::FetchMore));
                }
                Effect::merge(effects)
            }

            SearchAction::LoadAppEnv => {
                let database = self.clients.database.clone();
                Effect::run_cancellable(LOAD_APP_ENV, move |sender| async move {
                    let env = database.fetch_app_env().await;
                    sender.send(SearchAction::LoadAppEnvDone(env));
                })
            }

            SearchAction::LoadAppEnvDone(env) => {
                state.history_keywords = env.history_keywords;
                state.quick_search_words = env.quick_search_words;
                Effect::none()
            }

            SearchAction::RemoveHistoryKeyword(keyword) => {
                state.remove_history_keyword(&keyword);
                Effect::send(SearchAction::SyncHistoryKeywords)
            }

            SearchAction::SyncHistoryKeywords => self.sync_history(state),

            SearchAction::Teardown => Effect::merge(Self::cancel_ids().map(Effect::cancel)),
        }
    }
}
