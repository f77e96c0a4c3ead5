use crate::clients::AppClients;
use crate::flux::{CancelId, Effect, Reducer};

use super::action::FrontpageAction;
use super::state::FrontpageState;

const FETCH: CancelId = CancelId::new("frontpage", "fetch");
const FETCH_MORE: CancelId = CancelId::new("frontpage", "fetch_more");

pub struct FrontpageReducer {
    clients: AppClients,
}

impl FrontpageReducer {
    pub fn new(clients: AppClients) -> Self {
        Self { clients }
    }

    pub fn cancel_ids() -> [CancelId; 2] {
        [FETCH, FETCH_MORE]
    }
}

impl Reducer for FrontpageReducer {
    type State = FrontpageState;
    type Action = FrontpageAction;

    fn reduce(&self, state: &mut FrontpageState, action: FrontpageAction) -> Effect<FrontpageAction> {
        match action {
            FrontpageAction::Fetch => {
                if !state.listing.begin_refresh() {
                    return Effect::none();
                }
                let gallery = self.clients.gallery.clone();
                Effect::run_cancellable(FETCH, move |sender| async move {
                    let result = gallery.frontpage(0, None).await;
                    sender.send(FrontpageAction::FetchDone(result));
                })
            }

            FrontpageAction::FetchDone(result) => {
                let fetched = state.listing.finish_refresh(result);
                if fetched.is_empty() {
                    return Effect::none();
                }
                let database = self.clients.database.clone();
                Effect::run(move |_sender| async move {
                    database.cache_galleries(fetched).await;
                })
            }

            FrontpageAction::FetchMore => {
                let Some(request) = state.listing.begin_fetch_more() else {
                    return Effect::none();
                };
                let gallery = self.clients.gallery.clone();
                Effect::run_cancellable(FETCH_MORE, move |sender| async move {
                    let result = gallery.frontpage(request.page, request.last_id).await;
                    sender.send(FrontpageAction::FetchMoreDone(result));
                })
            }

            FrontpageAction::FetchMoreDone(result) => {
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
                    effects.push(Effect::send(FrontpageAction::FetchMore));
                }
                Effect::merge(effects)
            }

            FrontpageAction::Teardown => {
                Effect::merge(Self::cancel_ids().map(Effect::cancel))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::{Gallery, GalleryList, PageNumber};
    use std::sync::Arc;

    fn reducer() -> FrontpageReducer {
        FrontpageReducer::new(AppClients::with_gallery(Arc::new(
            crate::clients::test_support::UnreachableGallery,
        )))
    }

    fn page(current: u64, maximum: u64, ids: &[&str]) -> GalleryList {
        GalleryList {
            page: PageNumber { current, maximum },
            galleries: ids
                .iter()
                .map(|id| Gallery {
                    id: id.to_string(),
                    ..Gallery::default()
                })
                .collect(),
        }
    }

    #[test]
    fn fetch_flips_loading_and_schedules_work() {
        let reducer = reducer();
        let mut state = FrontpageState::default();
        let effect = reducer.reduce(&mut state, FrontpageAction::Fetch);
        assert!(state.listing.loading);
        assert_eq!(state.listing.page.current, 0);
        assert!(effect.has_run_work());
    }

    #[test]
    fn fetch_while_loading_is_noop() {
        let reducer = reducer();
        let mut state = FrontpageState::default();
        reducer.reduce(&mut state, FrontpageAction::Fetch);
        let before = state.clone();
        let effect = reducer.reduce(&mut state, FrontpageAction::Fetch);
        assert_eq!(state, before);
        assert!(effect.is_none());
    }

    #[test]
    fn fetch_done_merges_and_caches() {
        let reducer = reducer();
        let mut state = FrontpageState::default();
        reducer.reduce(&mut state, FrontpageAction::Fetch);
        let effect = reducer.reduce(
            &mut state,
            FrontpageAction::FetchDone(Ok(page(1, 5, &["a", "b"]))),
        );
        assert!(!state.listing.loading);
        assert_eq!(state.listing.galleries.len(), 2);
        assert_eq!(state.listing.page.current, 1);
        assert!(effect.has_run_work());
    }

    #[test]
    fn fetch_done_failure_sets_flag_without_effect() {
        let reducer = reducer();
        let mut state = FrontpageState::default();
        reducer.reduce(&mut state, FrontpageAction::Fetch);
        let effect = reducer.reduce(&mut state, FrontpageAction::FetchDone(Err(AppError::Timeout)));
        assert!(state.listing.failed);
        assert!(effect.is_none());
    }

    #[test]
    fn stale_fetch_more_retries_via_send() {
        let reducer = reducer();
        let mut state = FrontpageState::default();
        reducer.reduce(&mut state, FrontpageAction::Fetch);
        reducer.reduce(&mut state, FrontpageAction::FetchDone(Ok(page(0, 9, &["a"]))));
        reducer.reduce(&mut state, FrontpageAction::FetchMore);
        let effect = reducer.reduce(
            &mut state,
            FrontpageAction::FetchMoreDone(Ok(page(1, 9, &["a"]))),
        );
        assert_eq!(effect.sent_actions(), vec![&FrontpageAction::FetchMore]);
    }

    #[test]
    fn teardown_cancels_owned_identities() {
        let reducer = reducer();
        let mut state = FrontpageState::default();
        let effect = reducer.reduce(&mut state, FrontpageAction::Teardown);
        assert_eq!(effect.cancellations(), FrontpageReducer::cancel_ids().to_vec());
    }
}
