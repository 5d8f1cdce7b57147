//! State transitions for `AuthState`.
//!
//! DESIGN
//! ======
//! Typed callers go through `reduce`, which matches every `AuthAction`.
//! Actions that arrive by name (devtools replay, logs) go through
//! `reduce_named`, which leaves the state untouched for anything it cannot
//! turn into an `AuthAction`.
//!
//! Only `reduce` is pure. `reduce_named` also logs a warning for every
//! action it drops.

#[cfg(test)]
#[path = "reducer_test.rs"]
mod reducer_test;

use std::fmt;
use std::str::FromStr;

use super::auth::{AuthState, User};

/// A requested state transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthAction {
    /// Startup read finished. `Some` when storage said we were signed in.
    Initialize(Option<User>),
    SignIn(User),
    SignOut,
}

impl AuthAction {
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::Initialize(_) => ActionKind::Initialize,
            Self::SignIn(_) => ActionKind::SignIn,
            Self::SignOut => ActionKind::SignOut,
        }
    }

    /// Build an action from its kind and optional payload.
    ///
    /// Returns `None` for `SignIn` without a user.
    #[must_use]
    pub fn from_parts(kind: ActionKind, payload: Option<User>) -> Option<Self> {
        match kind {
            ActionKind::Initialize => Some(Self::Initialize(payload)),
            ActionKind::SignIn => payload.map(Self::SignIn),
            ActionKind::SignOut => Some(Self::SignOut),
        }
    }
}

/// Wire name of an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    Initialize,
    SignIn,
    SignOut,
}

impl ActionKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Initialize => "INITIALIZE",
            Self::SignIn => "SIGN_IN",
            Self::SignOut => "SIGN_OUT",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown action kind: {0}")]
pub struct UnknownActionKind(pub String);

impl FromStr for ActionKind {
    type Err = UnknownActionKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INITIALIZE" => Ok(Self::Initialize),
            "SIGN_IN" => Ok(Self::SignIn),
            "SIGN_OUT" => Ok(Self::SignOut),
            other => Err(UnknownActionKind(other.to_owned())),
        }
    }
}

/// Compute the next state.
#[must_use]
pub fn reduce(state: AuthState, action: AuthAction) -> AuthState {
    match action {
        AuthAction::Initialize(Some(user)) => {
            AuthState { is_authenticated: true, is_loading: false, user: Some(user) }
        }
        AuthAction::Initialize(None) => AuthState { is_loading: false, ..state },
        AuthAction::SignIn(user) => AuthState { is_authenticated: true, user: Some(user), ..state },
        AuthAction::SignOut => AuthState { is_authenticated: false, user: None, ..state },
    }
}

/// Apply an action given by name. Unknown kinds and malformed actions
/// return `state` as-is.
#[must_use]
pub fn reduce_named(state: AuthState, kind: &str, payload: Option<User>) -> AuthState {
    let action = match kind.parse::<ActionKind>() {
        Ok(kind) => AuthAction::from_parts(kind, payload),
        Err(e) => {
            leptos::logging::warn!("ignoring action: {e}");
            return state;
        }
    };
    match action {
        Some(action) => reduce(state, action),
        None => {
            leptos::logging::warn!("ignoring {kind} action without payload");
            state
        }
    }
}
