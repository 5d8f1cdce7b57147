use leptos::prelude::*;

use super::*;
use crate::state::auth::User;

#[test]
fn local_store_starts_from_given_state() {
    let store = LocalStore::new(AuthState::default());
    assert_eq!(store.snapshot(), AuthState::default());
}

#[test]
fn local_store_dispatch_runs_reducer() {
    let store = LocalStore::default();
    store.dispatch(AuthAction::Initialize(None));
    store.dispatch(AuthAction::SignIn(User::placeholder(None)));

    let state = store.snapshot();
    assert!(state.is_authenticated);
    assert!(!state.is_loading);
    assert_eq!(state.user, Some(User::placeholder(None)));
}

#[test]
fn local_store_clones_share_state() {
    let store = LocalStore::default();
    let other = store.clone();
    other.dispatch(AuthAction::Initialize(Some(User::placeholder(None))));
    assert!(store.snapshot().is_authenticated);
}

#[test]
fn signal_store_dispatch_updates_signal() {
    let owner = Owner::new();
    owner.with(|| {
        let signal = RwSignal::new(AuthState::default());
        signal.dispatch(AuthAction::Initialize(Some(User::placeholder(None))));
        assert!(signal.get_untracked().is_authenticated);

        signal.dispatch(AuthAction::SignOut);
        let state = signal.snapshot();
        assert!(!state.is_authenticated);
        assert!(!state.is_loading);
        assert!(state.user.is_none());
    });
}
