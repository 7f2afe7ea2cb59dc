//! Integration tests for Showroom.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p showroom-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `content_sync` - Repository, notifier and cross-page propagation
//! - `transfer` - Export/import across durable file stores
//! - `http_admin` - Editor flow through the full storefront router
//!
//! Nothing here needs external services; the HTTP tests drive the router
//! in-process.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::Path;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use showroom_content::{ContentRepository, FileStore, MemoryStore, Origin};
use showroom_storefront::{build_router, config::ShowroomConfig, state::AppState};
use tower::ServiceExt;

/// A fresh in-memory origin.
#[must_use]
pub fn memory_origin() -> Origin {
    Origin::new(MemoryStore::new())
}

/// An origin backed by the JSON file at `path`.
///
/// # Panics
///
/// Panics if the file exists but is not a valid store.
#[must_use]
#[allow(clippy::expect_used)]
pub fn file_origin(path: &Path) -> Origin {
    Origin::new(FileStore::open(path).expect("open file store"))
}

/// A repository on a new page of `origin`.
#[must_use]
pub fn page(origin: &Origin) -> ContentRepository {
    ContentRepository::new(origin.open_page())
}

/// In-process storefront with its state.
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    /// Storefront over a fresh in-memory origin with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_origin(memory_origin())
    }

    #[must_use]
    pub fn with_origin(origin: Origin) -> Self {
        let state = AppState::new(ShowroomConfig::default(), origin);
        Self {
            router: build_router(state.clone()),
            state,
        }
    }

    /// Send a request and return the status and body text.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the body is not UTF-8.
    #[allow(clippy::expect_used)]
    pub async fn send(&self, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, String) {
        let mut request = Request::builder().method(method).uri(uri);
        if body.is_some() {
            request = request.header(header::CONTENT_TYPE, "application/json");
        }
        let request = request
            .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
            .expect("build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        (status, String::from_utf8(bytes.to_vec()).expect("utf-8 body"))
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: &str) -> (StatusCode, String) {
        self.send(Method::POST, uri, Some(body)).await
    }

    /// Log in with the default credentials.
    ///
    /// # Panics
    ///
    /// Panics if the login is rejected.
    pub async fn login(&self) {
        let (status, body) = self
            .post(
                "/admin/login",
                r#"{"username": "admin", "password": "brasil10"}"#,
            )
            .await;
        assert_eq!(status, StatusCode::NO_CONTENT, "login failed: {body}");
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
