//! # auth-session
//!
//! Client-side authentication state for a Leptos single-page application.
//!
//! Tracks whether the user is signed in, calls the REST login and
//! registration endpoints, and persists a signed-in flag plus the login token
//! in browser storage so a reload restores the session. Mount
//! [`context::AuthProvider`] inside the router and read it with
//! [`context::use_auth`].

pub mod config;
pub mod context;
pub mod error;
pub mod net;
pub mod session;
pub mod state;
pub mod util;

#[cfg(test)]
mod testing;

/// Browser start-up hook: route Rust panics to the console.
pub fn init() {
    #[cfg(feature = "hydrate")]
    console_error_panic_hook::set_once();
}
