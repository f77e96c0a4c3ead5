mod common;

use std::sync::atomic::Ordering;
use std::time::Duration;

use common::{page_of, wait_for, TestEnv};

use lightbox::config::Config;
use lightbox::features::app::{app_reducer, AppAction, AppState};
use lightbox::features::frontpage::{FrontpageAction, FrontpageReducer};
use lightbox::flux::{Reducer, Store};

#[tokio::test]
async fn teardown_cancels_an_in_flight_fetch() {
    let env = TestEnv::new();
    env.gallery
        .script_frontpage(vec![Ok(page_of(0, 3, &["a", "b"]))]);
    *env.gallery.delay.lock() = Some(Duration::from_millis(100));

    let store = Store::new(
        app_reducer(env.clients.clone(), &Config::default()),
        AppState::default(),
    );
    store.dispatch(AppAction::Frontpage(FrontpageAction::Fetch));
    wait_for(&store, |s| s.frontpage.listing.loading).await;
    store.dispatch(AppAction::Frontpage(FrontpageAction::Teardown));

    tokio::time::sleep(Duration::from_millis(250)).await;
    // The request reached the client but its completion was cancelled, so
    // no result was merged into state.
    assert_eq!(env.gallery.frontpage_calls.load(Ordering::SeqCst), 1);
    assert!(store.state().frontpage.listing.galleries.is_empty());
}

#[tokio::test]
async fn cancelling_with_nothing_in_flight_is_idempotent() {
    let env = TestEnv::new();
    env.gallery
        .script_frontpage(vec![Ok(page_of(0, 3, &["a", "b"]))]);

    let store = Store::new(
        app_reducer(env.clients.clone(), &Config::default()),
        AppState::default(),
    );

    // Nothing is running; these must be harmless.
    store.dispatch(AppAction::Frontpage(FrontpageAction::Teardown));
    store.dispatch(AppAction::Frontpage(FrontpageAction::Teardown));

    // The store keeps working normally afterwards.
    store.dispatch(AppAction::Frontpage(FrontpageAction::Fetch));
    let state = wait_for(&store, |s| !s.frontpage.listing.galleries.is_empty()).await;
    assert_eq!(state.frontpage.listing.galleries.len(), 2);
}

#[tokio::test]
async fn cancellation_does_not_leak_across_identities() {
    let env = TestEnv::new();
    env.gallery
        .script_frontpage(vec![Ok(page_of(0, 3, &["a", "b"]))]);
    env.gallery.script_search(vec![Ok(page_of(0, 3, &["s1"]))]);
    *env.gallery.delay.lock() = Some(Duration::from_millis(50));

    let store = Store::new(
        app_reducer(env.clients.clone(), &Config::default()),
        AppState::default(),
    );
    store.dispatch(AppAction::Frontpage(FrontpageAction::Fetch));
    store.dispatch(AppAction::Search(
        lightbox::features::search::SearchAction::Fetch(Some("s".to_string())),
    ));
    // Tearing down the frontpage must not interfere with the search.
    store.dispatch(AppAction::Frontpage(FrontpageAction::Teardown));

    let state = wait_for(&store, |s| !s.search.listing.galleries.is_empty()).await;
    assert_eq!(state.search.listing.galleries[0].id, "s1");
    assert!(state.frontpage.listing.galleries.is_empty());
}

#[test]
fn teardown_effect_targets_the_full_owned_set() {
    let env = TestEnv::new();
    let reducer = FrontpageReducer::new(env.clients.clone());
    let mut state = Default::default();
    let effect = reducer.reduce(&mut state, FrontpageAction::Teardown);
    assert_eq!(
        effect.cancellations(),
        FrontpageReducer::cancel_ids().to_vec()
    );
}
