//! Build-time configuration for the REST endpoint.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Where auth requests are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthConfig {
    /// Scheme + host prefix for API paths. Empty means same origin.
    pub base_url: String,
}

impl AuthConfig {
    /// Build from an explicit base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Load from `AUTH_REST_ENDPOINT`, captured at compile time so the WASM
    /// bundle carries it. Falls back to same origin when unset.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(option_env!("AUTH_REST_ENDPOINT").unwrap_or_default())
    }

    /// Join the base URL with an absolute API path.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }
}
