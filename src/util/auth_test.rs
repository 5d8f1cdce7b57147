use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::state::auth::User;
use crate::testing::{init_executor, memory_context, settle};
use crate::util::storage::{AUTHENTICATED_KEY, MemoryStorage};

fn record_redirects(auth: AuthContext) -> Rc<RefCell<Vec<String>>> {
    let visited = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&visited);
    install_unauth_redirect(auth, move |path: &str, _: NavigateOptions| {
        sink.borrow_mut().push(path.to_owned());
    });
    visited
}

// =============================================================
// should_redirect_unauth
// =============================================================

#[test]
fn should_redirect_unauth_when_loaded_and_signed_out() {
    let state = AuthState { is_authenticated: false, is_loading: false, user: None };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&AuthState::default()));
}

#[test]
fn should_not_redirect_when_signed_in() {
    let state = AuthState {
        is_authenticated: true,
        is_loading: false,
        user: Some(User::placeholder(None)),
    };
    assert!(!should_redirect_unauth(&state));
}

// =============================================================
// install_unauth_redirect
// =============================================================

#[test]
fn redirect_waits_for_loading_then_goes_to_login() {
    init_executor();
    Owner::new().with(|| {
        let auth = memory_context(MemoryStorage::new(), MemoryStorage::new());
        let visited = record_redirects(auth);

        settle();
        assert!(visited.borrow().is_empty());

        auth.initialize();
        settle();
        assert_eq!(*visited.borrow(), vec!["/auth/login".to_owned()]);
    });
}

#[test]
fn redirect_skipped_when_restored_session_is_signed_in() {
    init_executor();
    Owner::new().with(|| {
        let auth = memory_context(
            MemoryStorage::with_entries([(AUTHENTICATED_KEY, "true")]),
            MemoryStorage::new(),
        );
        let visited = record_redirects(auth);

        auth.initialize();
        settle();
        assert!(visited.borrow().is_empty());
    });
}

#[test]
fn redirect_fires_after_sign_out() {
    init_executor();
    Owner::new().with(|| {
        let auth = memory_context(MemoryStorage::new(), MemoryStorage::new());
        let visited = record_redirects(auth);

        auth.skip();
        auth.initialize();
        settle();
        assert!(visited.borrow().is_empty());

        auth.sign_out();
        settle();
        assert_eq!(*visited.borrow(), vec!["/auth/login".to_owned()]);
    });
}
