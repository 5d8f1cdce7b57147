//! REST API helpers for the login and registration endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native builds: the transport reports a network error
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Status codes are interpreted here, in `AuthClient`, so the transport stays
//! a dumb pipe and the interpretation can be exercised with canned responses.
//! Only status 200 counts as success. No retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;

use super::types::{LoginRequest, RegisterRequest};
use crate::config::AuthConfig;
use crate::error::AuthError;

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/auth/admin/register";

const STATUS_OK: u16 = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Put,
    Post,
}

/// A JSON request ready to send.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: serde_json::Value,
}

impl ApiRequest {
    /// # Errors
    ///
    /// Returns `AuthError::Decode` if `body` cannot be serialized.
    pub fn json<T: Serialize>(method: Method, url: String, body: &T) -> Result<Self, AuthError> {
        let body = serde_json::to_value(body).map_err(|e| AuthError::Decode(e.to_string()))?;
        Ok(Self { method, url, body })
    }
}

/// Status and raw body of a completed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

/// Sends one request and waits for the full response.
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    /// # Errors
    ///
    /// Returns `AuthError::Network` when no response was received.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, AuthError>;
}

/// Browser `fetch` through `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl HttpTransport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let builder = match request.method {
                Method::Put => gloo_net::http::Request::put(&request.url),
                Method::Post => gloo_net::http::Request::post(&request.url),
            };
            let resp = builder
                .json(&request.body)
                .map_err(|e| AuthError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| AuthError::Decode(e.to_string()))?;
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(AuthError::Network("not available on server".to_owned()))
        }
    }
}

/// Typed calls against the auth endpoints.
#[derive(Clone, Debug)]
pub struct AuthClient<T> {
    config: AuthConfig,
    transport: T,
}

impl<T: HttpTransport> AuthClient<T> {
    pub fn new(config: AuthConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Exchange credentials for a token via `PUT /api/auth/login`.
    ///
    /// # Errors
    ///
    /// `InvalidCredentials` for any non-200 status, `Network` if the request
    /// never completed, `Decode` if the success body holds no token.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AuthError> {
        let request = ApiRequest::json(
            Method::Put,
            self.config.endpoint(LOGIN_PATH),
            &LoginRequest { email, password },
        )?;
        let resp = self.transport.send(request).await?;
        if resp.status != STATUS_OK {
            return Err(AuthError::InvalidCredentials);
        }
        parse_token(&resp.body)
    }

    /// Create an account via `POST /api/auth/admin/register`.
    ///
    /// # Errors
    ///
    /// `RegistrationFailed` carrying the server's error content for any
    /// non-200 status, `Network` if the request never completed.
    pub async fn register(&self, email: &str, name: &str, password: &str) -> Result<(), AuthError> {
        let request = ApiRequest::json(
            Method::Post,
            self.config.endpoint(REGISTER_PATH),
            &RegisterRequest { email, password, name },
        )?;
        let resp = self.transport.send(request).await?;
        if resp.status == STATUS_OK {
            return Ok(());
        }
        Err(AuthError::RegistrationFailed(error_content(resp.status, &resp.body)))
    }
}

/// The login endpoint answers with a JSON string. Anything else, such as an
/// HTML fallback page served with status 200, is rejected.
fn parse_token(body: &str) -> Result<String, AuthError> {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::String(token)) => Ok(token),
        Ok(other) => Err(AuthError::Decode(format!("expected token string, got {other}"))),
        Err(e) => Err(AuthError::Decode(format!("login response is not JSON: {e}"))),
    }
}

fn error_content(status: u16, body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::String(message)) => message,
        Ok(other) => other.to_string(),
        Err(_) if body.trim().is_empty() => registration_failed_message(status),
        Err(_) => body.trim().to_owned(),
    }
}

fn registration_failed_message(status: u16) -> String {
    format!("registration failed: {status}")
}
