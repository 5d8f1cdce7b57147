//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by route guards and user-aware components; written only through the
//! reducer in `state::reducer`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

const PLACEHOLDER_ID: &str = "5e86809283e28b96d2d38537";
const PLACEHOLDER_AVATAR: &str = "/assets/avatars/default-avatar.png";
const PLACEHOLDER_NAME: &str = "Oktopus";
const PLACEHOLDER_EMAIL: &str = "anika.visser@devias.io";
const SIGNED_IN_NAME: &str = "ZNID";

/// The signed-in user as seen by the UI.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub avatar: String,
    pub name: String,
    pub email: String,
    /// Bearer token from the login endpoint. Absent after `skip`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl User {
    /// Development identity used when no real profile is available.
    ///
    /// The login endpoint only returns a token, so identity fields are fixed.
    #[must_use]
    pub fn placeholder(token: Option<String>) -> Self {
        Self {
            id: PLACEHOLDER_ID.to_owned(),
            avatar: PLACEHOLDER_AVATAR.to_owned(),
            name: PLACEHOLDER_NAME.to_owned(),
            email: PLACEHOLDER_EMAIL.to_owned(),
            token,
        }
    }

    /// Identity after a successful credential login.
    #[must_use]
    pub fn signed_in(email: &str, token: String) -> Self {
        Self {
            id: PLACEHOLDER_ID.to_owned(),
            avatar: PLACEHOLDER_AVATAR.to_owned(),
            name: SIGNED_IN_NAME.to_owned(),
            email: email.to_owned(),
            token: Some(token),
        }
    }
}

/// Authentication state tracking the current user and loading status.
///
/// `is_authenticated` implies `user.is_some()`. `is_loading` is true only
/// until the first initialization completes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub user: Option<User>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { is_authenticated: false, is_loading: true, user: None }
    }
}

impl AuthState {
    /// Token of the current user, if signed in with credentials.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.user.as_ref().and_then(|u| u.token.as_deref())
    }
}
