//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages should apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use super::navigation::LOGIN_ROUTE;
use crate::context::AuthContext;
use crate::state::auth::AuthState;

/// True once startup restore finished and nobody is signed in.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.is_loading && !state.is_authenticated
}

/// Redirect to the sign-in page whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: AuthContext, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.signal().with(should_redirect_unauth) {
            navigate(LOGIN_ROUTE, NavigateOptions::default());
        }
    });
}
