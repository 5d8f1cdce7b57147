//! Networking for the auth REST endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns transport and status interpretation, `types` the request bodies.

pub mod api;
pub mod types;
