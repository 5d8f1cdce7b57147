//! Auth operations: startup restore, skip, sign-in, sign-up, sign-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `AuthSession` is built at the application root. Each operation talks
//! to the network or storage, then dispatches at most one action into the
//! store, which re-renders whatever depends on auth state.
//!
//! ERROR HANDLING
//! ==============
//! Network and credential errors are returned to the caller (a form handler)
//! for display. Storage errors are logged and otherwise ignored: the app keeps
//! working as if the stored value were absent.
//!
//! TRADE-OFFS
//! ==========
//! `sign_out` leaves storage untouched, so a reload in the same tab restores
//! the signed-in flag. Clearing it is a product decision, see `clear_storage`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::Cell;

use leptos::logging::{log, warn};

use crate::error::AuthError;
use crate::net::api::{AuthClient, HttpTransport};
use crate::state::auth::{AuthState, User};
use crate::state::reducer::AuthAction;
use crate::state::store::AuthStore;
use crate::util::navigation::{LOGIN_ROUTE, Navigator};
use crate::util::storage::{
    AUTHENTICATED_KEY, BrowserStorage, EMAIL_KEY, KeyValueStore, TOKEN_KEY,
};

const FLAG_TRUE: &str = "true";

pub struct AuthSession<S, T> {
    store: S,
    client: AuthClient<T>,
    navigator: Box<dyn Navigator>,
    session_storage: Box<dyn KeyValueStore>,
    persistent_storage: Box<dyn KeyValueStore>,
    initialized: Cell<bool>,
}

impl<S: AuthStore, T: HttpTransport> AuthSession<S, T> {
    /// Build a session backed by the browser's session and local storage.
    pub fn new(store: S, client: AuthClient<T>, navigator: impl Navigator + 'static) -> Self {
        Self {
            store,
            client,
            navigator: Box::new(navigator),
            session_storage: Box::new(BrowserStorage::session()),
            persistent_storage: Box::new(BrowserStorage::local()),
            initialized: Cell::new(false),
        }
    }

    /// Replace both storage areas.
    #[must_use]
    pub fn with_storage(
        mut self,
        session: impl KeyValueStore + 'static,
        persistent: impl KeyValueStore + 'static,
    ) -> Self {
        self.session_storage = Box::new(session);
        self.persistent_storage = Box::new(persistent);
        self
    }

    pub fn state(&self) -> AuthState {
        self.store.snapshot()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Restore auth state from storage. Only the first call has any effect.
    pub fn initialize(&self) {
        if self.initialized.replace(true) {
            return;
        }

        let authenticated = match self.session_storage.get(AUTHENTICATED_KEY) {
            Ok(value) => value.as_deref() == Some(FLAG_TRUE),
            Err(e) => {
                warn!("auth: reading {AUTHENTICATED_KEY} failed: {e}");
                false
            }
        };
        log!("auth: restored authenticated={authenticated}");

        if !authenticated {
            self.store.dispatch(AuthAction::Initialize(None));
            return;
        }

        let token = self.persistent_storage.get(TOKEN_KEY).unwrap_or_else(|e| {
            warn!("auth: reading {TOKEN_KEY} failed: {e}");
            None
        });
        if token.is_none() {
            warn!("auth: restored session has no token");
        }
        self.store.dispatch(AuthAction::Initialize(Some(User::placeholder(token))));
    }

    /// Mark the tab as signed in with the placeholder user, without credentials.
    pub fn skip(&self) {
        self.write_session(AUTHENTICATED_KEY, FLAG_TRUE);
        self.store.dispatch(AuthAction::SignIn(User::placeholder(None)));
    }

    /// Log in with credentials and persist the resulting token.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` for a rejected login, or the
    /// transport error if no response arrived. State is unchanged on error.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let token = self.client.login(email, password).await?;

        self.write_session(AUTHENTICATED_KEY, FLAG_TRUE);
        self.write_session(EMAIL_KEY, email);
        if let Err(e) = self.persistent_storage.set(TOKEN_KEY, &token) {
            warn!("auth: writing {TOKEN_KEY} failed: {e}");
        }

        self.store.dispatch(AuthAction::SignIn(User::signed_in(email, token)));
        Ok(())
    }

    /// Register an account, then send the user to the sign-in page.
    ///
    /// Registration does not sign the user in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::RegistrationFailed` with the server's message, or
    /// the transport error if no response arrived.
    pub async fn sign_up(&self, email: &str, name: &str, password: &str) -> Result<(), AuthError> {
        self.client.register(email, name, password).await?;
        self.navigator.navigate(LOGIN_ROUTE);
        Ok(())
    }

    pub fn sign_out(&self) {
        self.store.dispatch(AuthAction::SignOut);
    }

    /// Remove everything this session persisted. Not called by `sign_out`.
    pub fn clear_storage(&self) {
        for key in [AUTHENTICATED_KEY, EMAIL_KEY] {
            if let Err(e) = self.session_storage.remove(key) {
                warn!("auth: removing {key} failed: {e}");
            }
        }
        if let Err(e) = self.persistent_storage.remove(TOKEN_KEY) {
            warn!("auth: removing {TOKEN_KEY} failed: {e}");
        }
    }

    fn write_session(&self, key: &str, value: &str) {
        if let Err(e) = self.session_storage.set(key, value) {
            warn!("auth: writing {key} failed: {e}");
        }
    }
}
