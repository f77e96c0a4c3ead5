mod common;

use common::{page_of, settle, wait_for, TestEnv};

use lightbox::config::Config;
use lightbox::features::app::{app_reducer, AppAction, AppCoreReducer, AppState};
use lightbox::features::search::SearchAction;
use lightbox::flux::{Reducer, Store};

fn replay(reducer: &AppCoreReducer, actions: &[AppAction]) -> AppState {
    let mut state = AppState::default();
    for action in actions {
        // Effects are descriptions only; discarding them cannot change
        // the state transition.
        let _ = reducer.reduce(&mut state, action.clone());
    }
    state
}

#[test]
fn reduction_is_deterministic_under_replay() {
    let env = TestEnv::new();
    let reducer = AppCoreReducer::new(env.clients.clone(), &Config::default());

    let actions = vec![
        AppAction::Search(SearchAction::SetKeyword("fox".to_string())),
        AppAction::Search(SearchAction::Fetch(None)),
        AppAction::Search(SearchAction::FetchDone(Ok(page_of(0, 4, &["a", "b"])))),
        AppAction::SetNavigation(Some(lightbox::features::app::AppRoute::Detail(
            "a".to_string(),
        ))),
        AppAction::SetNavigation(None),
        AppAction::ClearSubStates,
    ];

    let first = replay(&reducer, &actions);
    let second = replay(&reducer, &actions);
    assert_eq!(first, second);
}

#[tokio::test]
async fn store_publishes_each_committed_state() {
    let env = TestEnv::new();
    let store = Store::new(
        app_reducer(env.clients.clone(), &Config::default()),
        AppState::default(),
    );

    store.dispatch(AppAction::Search(SearchAction::SetKeyword("a".to_string())));
    store.dispatch(AppAction::Search(SearchAction::SetKeyword("ab".to_string())));

    let state = wait_for(&store, |s| s.search.keyword == "ab").await;
    assert_eq!(state.search.keyword, "ab");
}

#[tokio::test]
async fn effect_completions_reenter_the_dispatch_path() {
    let env = TestEnv::new();
    env.gallery.script_search(vec![Ok(page_of(1, 5, &["a", "b"]))]);

    let store = Store::new(
        app_reducer(env.clients.clone(), &Config::default()),
        AppState::default(),
    );
    store.dispatch(AppAction::Search(SearchAction::Fetch(Some(
        "foo".to_string(),
    ))));

    let state = wait_for(&store, |s| !s.search.listing.loading).await;
    assert_eq!(state.search.listing.galleries.len(), 2);
    assert_eq!(state.search.listing.page.current, 1);
}

#[tokio::test]
async fn launch_restores_persisted_environment() {
    let env = TestEnv::new();
    env.clients
        .database
        .update_history_keywords(vec!["archived keyword".to_string()])
        .await;

    let store = Store::new(
        app_reducer(env.clients.clone(), &Config::default()),
        AppState::default(),
    );
    store.dispatch(AppAction::OnLaunch);

    let state = wait_for(&store, |s| !s.search.history_keywords.is_empty()).await;
    assert_eq!(state.search.history_keywords, vec!["archived keyword"]);
    settle().await;
}
