//! Utility helpers shared across auth modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, routing) from the
//! session logic so it can run against in-memory stand-ins.

pub mod auth;
pub mod navigation;
pub mod storage;
