//! Holders that own an `AuthState` and apply actions to it.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session layer only needs "read current state" and "dispatch". In the
//! app the holder is the `RwSignal` provided via context, so a dispatch
//! re-renders dependent views. `LocalStore` serves non-reactive callers.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use super::auth::AuthState;
use super::reducer::{AuthAction, reduce};

/// Owner of the current `AuthState`.
pub trait AuthStore {
    /// Current state, without subscribing to changes.
    fn snapshot(&self) -> AuthState;

    /// Run `action` through the reducer and store the result.
    fn dispatch(&self, action: AuthAction);
}

impl AuthStore for RwSignal<AuthState> {
    fn snapshot(&self) -> AuthState {
        self.get_untracked()
    }

    fn dispatch(&self, action: AuthAction) {
        self.update(|state| *state = reduce(std::mem::take(state), action));
    }
}

/// Plain shared cell. Clones share the same state.
#[derive(Clone, Debug, Default)]
pub struct LocalStore(Rc<RefCell<AuthState>>);

impl LocalStore {
    #[must_use]
    pub fn new(state: AuthState) -> Self {
        Self(Rc::new(RefCell::new(state)))
    }
}

impl AuthStore for LocalStore {
    fn snapshot(&self) -> AuthState {
        self.0.borrow().clone()
    }

    fn dispatch(&self, action: AuthAction) {
        let mut state = self.0.borrow_mut();
        *state = reduce(std::mem::take(&mut *state), action);
    }
}
