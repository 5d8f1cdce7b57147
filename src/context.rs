//! Leptos provider exposing auth state and operations to the component tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthProvider` is mounted once under `<Router>`. Components call
//! `use_auth()` to read state reactively and trigger sign-in/out.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use std::rc::Rc;

use leptos::prelude::*;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::net::api::{AuthClient, FetchTransport};
use crate::session::AuthSession;
use crate::state::auth::{AuthState, User};
use crate::util::navigation::RouterNavigator;

/// Session wired to the reactive store and the browser transport.
pub type BrowserSession = AuthSession<RwSignal<AuthState>, FetchTransport>;

/// Copyable handle provided via context.
#[derive(Clone, Copy)]
pub struct AuthContext {
    state: RwSignal<AuthState>,
    session: StoredValue<Rc<BrowserSession>, LocalStorage>,
}

impl AuthContext {
    /// `session` must dispatch into `state`.
    pub fn new(state: RwSignal<AuthState>, session: BrowserSession) -> Self {
        Self { state, session: StoredValue::new_local(Rc::new(session)) }
    }

    /// Build the browser session for `state`. Must be called under `<Router>`.
    pub fn browser(state: RwSignal<AuthState>) -> Self {
        let client = AuthClient::new(AuthConfig::from_env(), FetchTransport);
        Self::new(state, AuthSession::new(state, client, RouterNavigator::from_router()))
    }

    /// Current state, tracked.
    pub fn state(&self) -> AuthState {
        self.state.get()
    }

    pub fn signal(&self) -> ReadSignal<AuthState> {
        self.state.read_only()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.is_authenticated)
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.is_loading)
    }

    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }

    pub fn initialize(&self) {
        self.session.with_value(|s| s.initialize());
    }

    pub fn skip(&self) {
        self.session.with_value(|s| s.skip());
    }

    /// # Errors
    ///
    /// See [`AuthSession::sign_in`].
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let session = self.session.get_value();
        session.sign_in(email, password).await
    }

    /// # Errors
    ///
    /// See [`AuthSession::sign_up`].
    pub async fn sign_up(&self, email: &str, name: &str, password: &str) -> Result<(), AuthError> {
        let session = self.session.get_value();
        session.sign_up(email, name, password).await
    }

    pub fn sign_out(&self) {
        self.session.with_value(|s| s.sign_out());
    }

    pub fn clear_storage(&self) {
        self.session.with_value(|s| s.clear_storage());
    }
}

/// Provides `AuthContext` to `children` and restores state from storage
/// once mounted in the browser.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let state = RwSignal::new(AuthState::default());
    let auth = AuthContext::browser(state);
    provide_context(auth);
    restore_on_mount(auth);

    children()
}

/// Schedule the storage restore for `auth`. Only the first run dispatches.
pub fn restore_on_mount(auth: AuthContext) {
    // Effects only run client-side, where storage exists.
    Effect::new(move || auth.initialize());
}

/// The `AuthContext` provided by the nearest `AuthProvider`.
///
/// # Panics
///
/// Panics when called outside an `AuthProvider`.
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
