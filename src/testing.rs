//! In-memory collaborators shared by unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use any_spawner::Executor;
use futures::executor::block_on;
use leptos::prelude::*;

use crate::config::AuthConfig;
use crate::context::AuthContext;
use crate::error::{AuthError, StorageError};
use crate::net::api::{ApiRequest, ApiResponse, AuthClient, FetchTransport, HttpTransport};
use crate::session::AuthSession;
use crate::state::auth::AuthState;
use crate::util::navigation::{Navigator, RouterNavigator};
use crate::util::storage::{KeyValueStore, MemoryStorage};

/// Browser-shaped context whose storage lives in memory.
pub fn memory_context(session_storage: MemoryStorage, persistent_storage: MemoryStorage) -> AuthContext {
    let state = RwSignal::new(AuthState::default());
    let session = AuthSession::new(
        state,
        AuthClient::new(AuthConfig::default(), FetchTransport),
        RouterNavigator::new(|_, _| {}),
    )
    .with_storage(session_storage, persistent_storage);
    AuthContext::new(state, session)
}

/// Install the futures executor so `Effect`s can be spawned. Idempotent.
pub fn init_executor() {
    let _ = Executor::init_futures_executor();
}

/// Run every pending effect on this thread until nothing is left to do.
pub fn settle() {
    block_on(Executor::tick());
    Executor::poll_local();
}

/// Answers every request with the same canned response and records requests.
#[derive(Clone, Default)]
pub struct MockTransport {
    response: Option<ApiResponse>,
    pub requests: Rc<RefCell<Vec<ApiRequest>>>,
}

impl MockTransport {
    pub fn responding(status: u16, body: &str) -> Self {
        Self {
            response: Some(ApiResponse { status, body: body.to_owned() }),
            requests: Rc::default(),
        }
    }

    /// Every request fails before a response arrives.
    pub fn offline() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

impl HttpTransport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, AuthError> {
        self.requests.borrow_mut().push(request);
        self.response
            .clone()
            .ok_or_else(|| AuthError::Network("connection refused".to_owned()))
    }
}

/// Remembers every path it was asked to navigate to.
#[derive(Clone, Default)]
pub struct RecordingNavigator(pub Rc<RefCell<Vec<String>>>);

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.0.borrow_mut().push(path.to_owned());
    }
}

/// Storage that fails every call, like a browser with storage disabled.
#[derive(Clone, Copy, Default)]
pub struct BrokenStorage;

impl KeyValueStore for BrokenStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Access("SecurityError".to_owned()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Access("QuotaExceededError".to_owned()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Access("SecurityError".to_owned()))
    }
}
