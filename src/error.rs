//! Error types surfaced by auth operations and browser storage.
//!
//! ERROR HANDLING
//! ==============
//! `AuthError` reaches form handlers and is meant for display. `StorageError`
//! never leaves the session layer: storage failures are logged and treated as
//! "feature unavailable".

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Please check your email and password")]
    InvalidCredentials,
    #[error("{0}")]
    RegistrationFailed(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage access failed: {0}")]
    Access(String),
}
