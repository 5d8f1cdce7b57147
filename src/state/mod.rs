//! Client-side auth state.
//!
//! DESIGN
//! ======
//! `auth` is the data model, `reducer` the only way it changes, and `store`
//! the holders the session layer dispatches into.

pub mod auth;
pub mod reducer;
pub mod store;
