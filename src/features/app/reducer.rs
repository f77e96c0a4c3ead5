use crate::clients::{AppClients, FeedbackStyle};
use crate::config::Config;
use crate::features::comments::CommentsReducer;
use crate::features::detail::{DetailAction, DetailReducer, DetailSearchReducer, MAX_NESTING_DEPTH};
use crate::features::favorites::FavoritesReducer;
use crate::features::frontpage::FrontpageReducer;
use crate::features::popular::PopularReducer;
use crate::features::reading::ReadingReducer;
use crate::features::search::SearchReducer;
use crate::flux::{reduce_if_let, CancelId, Effect, OnChange, Reducer, Store};

use super::action::{AppAction, AppRoute};
use super::state::AppState;

const FETCH_HISTORY: CancelId = CancelId::new("app", "fetch_history");

/// Root reducer composing every feature, wrapped with route haptics.
pub type AppReducer = OnChange<AppCoreReducer, Option<AppRoute>>;

/// The fully wired store most embedders want.
pub type AppStore = Store<AppReducer>;

/// Build the root reducer: feature composition plus a haptic tick whenever
/// a screen is presented.
pub fn app_reducer(clients: AppClients, config: &Config) -> AppReducer {
    let feedback = clients.feedback.clone();
    OnChange::new(
        AppCoreReducer::new(clients, config),
        |state: &AppState| state.route.clone(),
        move |_old, new| {
            if new.is_some() {
                let feedback = feedback.clone();
                Effect::run(move |_sender| async move {
                    feedback.generate_feedback(FeedbackStyle::Light);
                })
            } else {
                Effect::none()
            }
        },
    )
}

pub struct AppCoreReducer {
    clients: AppClients,
    history_limit: usize,
    frontpage: FrontpageReducer,
    popular: PopularReducer,
    search: SearchReducer,
    favorites: FavoritesReducer,
    detail: DetailReducer,
}

impl AppCoreReducer {
    pub fn new(clients: AppClients, config: &Config) -> Self {
        Self {
            history_limit: config.history_limit,
            frontpage: FrontpageReducer::new(clients.clone()),
            popular: PopularReducer::new(clients.clone()),
            search: SearchReducer::new(clients.clone()),
            favorites: FavoritesReducer::new(clients.clone()),
            detail: DetailReducer::new(clients.clone()),
            clients,
        }
    }

    /// Every identity the detail sub-tree can hold in flight, across all
    /// nesting levels.
    fn detail_subtree_cancel_ids() -> Vec<CancelId> {
        let mut ids: Vec<CancelId> = Vec::new();
        for instance in 0..=MAX_NESTING_DEPTH {
            ids.extend(DetailReducer::cancel_ids(instance));
        }
        ids.extend(ReadingReducer::cancel_ids());
        ids.extend(CommentsReducer::cancel_ids());
        ids.extend(DetailSearchReducer::cancel_ids());
        ids
    }
}

impl Reducer for AppCoreReducer {
    type State = AppState;
    type Action = AppAction;

    fn reduce(&self, state: &mut AppState, action: AppAction) -> Effect<AppAction> {
        match action {
            AppAction::OnLaunch => {
                let database = self.clients.database.clone();
                let limit = self.history_limit;
                Effect::merge([
                    Effect::send(AppAction::Search(
                        crate::features::search::SearchAction::LoadAppEnv,
                    )),
                    Effect::run_cancellable(FETCH_HISTORY, move |sender| async move {
                        let history = database.fetch_history_galleries(limit).await;
                        sender.send(AppAction::FetchHistoryGalleriesDone(history));
                    }),
                ])
            }

            AppAction::FetchHistoryGalleriesDone(history) => {
                state.history = history;
                Effect::none()
            }

            AppAction::SetNavigation(route) => {
                let changed = state.route != route;
                state.route = route;
                match &state.route {
                    None => Effect::send(AppAction::ClearSubStates),
                    Some(AppRoute::Detail(gid)) if changed => {
                        state.detail = Some(Box::default());
                        Effect::send(AppAction::Detail(DetailAction::OnAppear(gid.clone())))
                    }
                    Some(_) => Effect::none(),
                }
            }

            AppAction::ClearSubStates => {
                state.detail = None;
                Effect::merge(
                    Self::detail_subtree_cancel_ids()
                        .into_iter()
                        .map(Effect::cancel)
                        .collect::<Vec<_>>(),
                )
            }

            AppAction::Frontpage(action) => self
                .frontpage
                .reduce(&mut state.frontpage, action)
                .map(AppAction::Frontpage),

            AppAction::Popular(action) => self
                .popular
                .reduce(&mut state.popular, action)
                .map(AppAction::Popular),

            AppAction::Search(action) => self
                .search
                .reduce(&mut state.search, action)
                .map(AppAction::Search),

            AppAction::Favorites(action) => self
                .favorites
                .reduce(&mut state.favorites, action)
                .map(AppAction::Favorites),

            AppAction::Detail(action) => reduce_if_let(
                &self.detail,
                state.detail.as_deref_mut(),
                action,
            )
            .map(AppAction::Detail),
        }
    }
}
