mod common;

use std::sync::atomic::Ordering;

use common::{page_of, settle, wait_for, TestEnv};

use lightbox::config::Config;
use lightbox::features::app::{app_reducer, AppAction, AppState};
use lightbox::features::search::{SearchAction, SearchReducer, SearchState};
use lightbox::flux::{Reducer, Store};

#[test]
fn search_scenario_loading_then_merged() {
    let env = TestEnv::new();
    let reducer = SearchReducer::new(env.clients.clone());
    let mut state = SearchState::default();

    let effect = reducer.reduce(&mut state, SearchAction::Fetch(Some("foo".to_string())));
    assert!(state.listing.loading);
    assert_eq!(state.listing.page.current, 0);
    assert!(effect.has_run_work());

    let effect = reducer.reduce(
        &mut state,
        SearchAction::FetchDone(Ok(page_of(1, 5, &["A", "B"]))),
    );
    assert!(!state.listing.loading);
    assert_eq!(state.listing.page.current, 1);
    let ids: Vec<_> = state
        .listing
        .galleries
        .iter()
        .map(|g| g.id.as_str())
        .collect();
    assert_eq!(ids, vec!["A", "B"]);
    assert!(effect.has_run_work());
}

#[test]
fn fetch_while_loading_leaves_listing_untouched() {
    let env = TestEnv::new();
    let reducer = SearchReducer::new(env.clients.clone());
    let mut state = SearchState::default();

    reducer.reduce(&mut state, SearchAction::Fetch(Some("foo".to_string())));
    let listing_before = state.listing.clone();
    let effect = reducer.reduce(&mut state, SearchAction::Fetch(None));
    assert!(effect.is_none());
    assert_eq!(state.listing, listing_before);
}

#[test]
fn pagination_list_length_is_non_decreasing() {
    let env = TestEnv::new();
    let reducer = SearchReducer::new(env.clients.clone());
    let mut state = SearchState::default();

    reducer.reduce(&mut state, SearchAction::Fetch(Some("foo".to_string())));
    reducer.reduce(
        &mut state,
        SearchAction::FetchDone(Ok(page_of(0, 5, &["A", "B"]))),
    );

    let mut previous_len = state.listing.galleries.len();
    for (page, ids) in [(1u64, &["B", "C"][..]), (2, &[][..]), (3, &["D"][..])] {
        reducer.reduce(&mut state, SearchAction::FetchMore);
        reducer.reduce(
            &mut state,
            SearchAction::FetchMoreDone(Ok(page_of(page, 5, ids))),
        );
        assert!(state.listing.galleries.len() >= previous_len);
        assert_eq!(state.listing.page.current, page);
        previous_len = state.listing.galleries.len();
    }
}

#[tokio::test]
async fn stale_fetch_more_is_retried_a_bounded_number_of_times() {
    let env = TestEnv::new();
    // First page, then the same non-advancing page forever.
    env.gallery.script_search(vec![
        Ok(page_of(0, 9, &["a", "b"])),
        Ok(page_of(1, 9, &["a", "b"])),
    ]);

    let store = Store::new(
        app_reducer(env.clients.clone(), &Config::default()),
        AppState::default(),
    );
    store.dispatch(AppAction::Search(SearchAction::Fetch(Some(
        "foo".to_string(),
    ))));
    wait_for(&store, |s| !s.search.listing.loading).await;

    store.dispatch(AppAction::Search(SearchAction::FetchMore));
    wait_for(&store, |s| !s.search.listing.loading_more).await;
    settle().await;

    // One explicit fetch, one fetch_more, and exactly one automatic
    // retry before the chain stops.
    assert_eq!(env.gallery.search_calls.load(Ordering::SeqCst), 3);

    let state = store.state();
    assert_eq!(state.search.listing.galleries.len(), 2);
    assert_eq!(state.search.listing.page.current, 1);
}

#[tokio::test]
async fn search_records_history_through_the_store() {
    let env = TestEnv::new();
    env.gallery.script_search(vec![Ok(page_of(0, 2, &["a"]))]);

    let store = Store::new(
        app_reducer(env.clients.clone(), &Config::default()),
        AppState::default(),
    );
    store.dispatch(AppAction::Search(SearchAction::Fetch(Some(
        "landscape".to_string(),
    ))));

    let state = wait_for(&store, |s| !s.search.listing.loading).await;
    assert_eq!(state.search.history_keywords, vec!["landscape"]);
    settle().await;

    // The history sync effect persisted the keyword for the next launch.
    let env_snapshot = env.clients.database.fetch_app_env().await;
    assert_eq!(env_snapshot.history_keywords, vec!["landscape"]);
}
