//! Search-from-detail sub-feature: tapping a tag on the detail screen
//! opens an inline search whose results can open yet another detail
//! screen. The owning detail reducer drives that recursion.

use crate::clients::AppClients;
use crate::error::AppError;
use crate::flux::{Action, CancelId, Effect, FeatureState, Reducer};
use crate::models::{GalleryList, Listing};

use super::action::DetailAction;
use super::reducer::DetailReducer;
use super::state::{DetailState, MAX_NESTING_DEPTH};

const FETCH: CancelId = CancelId::new("detail_search", "fetch");
const FETCH_MORE: CancelId = CancelId::new("detail_search", "fetch_more");

#[derive(Debug, Clone, PartialEq)]
pub enum DetailSearchRoute {
    Detail(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailSearchState {
    pub route: Option<DetailSearchRoute>,
    pub keyword: String,
    pub listing: Listing,
    /// Present while `route` is `Detail`; absent means torn down.
    pub detail: Option<Box<DetailState>>,
}

impl FeatureState for DetailSearchState {}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailSearchAction {
    Fetch(Option<String>),
    FetchDone(Result<GalleryList, AppError>),
    FetchMore,
    FetchMoreDone(Result<GalleryList, AppError>),

    SetNavigation(Option<DetailSearchRoute>),
    ClearSubStates,

    /// Action for the nested detail screen; routed by the owning detail
    /// reducer, which tracks nesting depth.
    Detail(Box<DetailAction>),

    Teardown,
}

impl Action for DetailSearchAction {}

pub struct DetailSearchReducer {
    clients: AppClients,
}

impl DetailSearchReducer {
    pub fn new(clients: AppClients) -> Self {
        Self { clients }
    }

    pub fn cancel_ids() -> [CancelId; 2] {
        [FETCH, FETCH_MORE]
    }
}

impl Reducer for DetailSearchReducer {
    type State = DetailSearchState;
    type Action = DetailSearchAction;

    fn reduce(
        &self,
        state: &mut DetailSearchState,
        action: DetailSearchAction,
    ) -> Effect<DetailSearchAction> {
        match action {
            DetailSearchAction::Fetch(keyword) => {
                if let Some(keyword) = keyword {
                    state.keyword = keyword;
                }
                if state.keyword.is_empty() || !state.listing.begin_refresh() {
                    return Effect::none();
                }
                let gallery = self.clients.gallery.clone();
                let keyword = state.keyword.clone();
                Effect::run_cancellable(FETCH, move |sender| async move {
                    let result = gallery.search(keyword, 0, None).await;
                    sender.send(DetailSearchAction::FetchDone(result));
                })
            }

            DetailSearchAction::FetchDone(result) => {
                let fetched = state.listing.finish_refresh(result);
                if fetched.is_empty() {
                    return Effect::none();
                }
                let database = self.clients.database.clone();
                Effect::run(move |_sender| async move {
                    database.cache_galleries(fetched).await;
                })
            }

            DetailSearchAction::FetchMore => {
                let Some(request) = state.listing.begin_fetch_more() else {
                    return Effect::none();
                };
                let gallery = self.clients.gallery.clone();
                let keyword = state.keyword.clone();
                Effect::run_cancellable(FETCH_MORE, move |sender| async move {
                    let result = gallery.search(keyword, request.page, request.last_id).await;
                    sender.send(DetailSearchAction::FetchMoreDone(result));
                })
            }

            DetailSearchAction::FetchMoreDone(result) => {
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
                    effects.push(Effect::send(DetailSearchAction::FetchMore));
                }
                Effect::merge(effects)
            }

            DetailSearchAction::SetNavigation(route) => {
                let changed = state.route != route;
                state.route = route;
                match &state.route {
                    None => Effect::send(DetailSearchAction::ClearSubStates),
                    Some(DetailSearchRoute::Detail(gid)) if changed => {
                        state.detail = Some(Box::default());
                        Effect::send(DetailSearchAction::Detail(Box::new(
                            DetailAction::OnAppear(gid.clone()),
                        )))
                    }
                    Some(_) => Effect::none(),
                }
            }

            DetailSearchAction::ClearSubStates => {
                state.detail = None;
                Effect::merge(
                    (1..=MAX_NESTING_DEPTH)
                        .flat_map(|depth| DetailReducer::cancel_ids(depth))
                        .map(Effect::cancel)
                        .collect::<Vec<_>>(),
                )
            }

            // Routed by the owning detail reducer; nothing to do here.
            DetailSearchAction::Detail(_) => Effect::none(),

            DetailSearchAction::Teardown => Effect::merge(Self::cancel_ids().map(Effect::cancel)),
        }
    }
}
