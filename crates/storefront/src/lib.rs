//! Showroom Storefront library.
//!
//! The public product page and the server that hosts it:
//! - [`display`] - Read-only projections (navbar, hero, showcase, benefits)
//! - [`page`] - A mounted page that keeps its projections current
//! - [`routes`] - Public HTTP surface; the editor API is nested under `/admin`
//!
//! This crate provides the storefront as a library so the router can be
//! tested without binding a socket.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod display;
pub mod error;
pub mod page;
pub mod routes;
pub mod state;

use axum::{
    Router,
    http::{HeaderValue, Uri, header},
    routing::get,
};
use showroom_content::{FileStore, MemoryStore, Origin, StorageError};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::config::DataSource;
use crate::error::AppError;
use crate::state::AppState;

/// Open the origin backing the configured data source.
///
/// # Errors
///
/// Returns an error if the data file exists but cannot be read or parsed.
pub fn open_origin(data: &DataSource) -> Result<Origin, StorageError> {
    match data {
        DataSource::Memory => {
            tracing::info!("Using in-memory content store");
            Ok(Origin::new(MemoryStore::new()))
        }
        DataSource::File(path) => {
            let store = FileStore::open(path)?;
            tracing::info!(path = %path.display(), "Using file content store");
            Ok(Origin::new(store))
        }
    }
}

/// Build the full application router.
pub fn build_router(state: AppState) -> Router {
    let admin = showroom_admin::routes::router().with_state(state.admin().clone());

    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .with_state(state)
        .nest("/admin", admin)
        .fallback(not_found)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(TraceLayer::new_for_http())
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use showroom_core::{ThemeField, ThemeSettings};
    use tower::ServiceExt;

    use super::*;
    use crate::config::ShowroomConfig;

    fn app() -> (Router, AppState) {
        let state = AppState::new(ShowroomConfig::default(), Origin::new(MemoryStore::new()));
        (build_router(state.clone()), state)
    }

    async fn get_text(app: &Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .clone()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _) = app();
        assert_eq!(get_text(&app, "/health").await, (StatusCode::OK, "ok".to_string()));
    }

    #[tokio::test]
    async fn test_home_snapshot() {
        let (app, _) = app();
        let (status, body) = get_text(&app, "/").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["navbar"]["background"], "#1e40af");
        assert_eq!(json["hero"]["title"], "Sofá Conforto Supremo");
        assert_eq!(json["view"]["view"], "storefront");
        assert_eq!(json["view"]["loginAffordance"], true);
    }

    #[tokio::test]
    async fn test_stylesheet_follows_editor() {
        let (app, state) = app();
        let theme = ThemeSettings::default().with_color(ThemeField::Accent, "#ec4899");
        state.editor_repository().save_theme(&theme).unwrap();

        let (status, css) = get_text(&app, "/theme.css").await;
        assert_eq!(status, StatusCode::OK);
        assert!(css.contains("--accent-color: #ec4899;"));
        assert!(css.contains("--primary-color: #1e40af;"));
    }

    #[tokio::test]
    async fn test_admin_routes_are_nested() {
        let (app, _) = app();
        let (status, _) = get_text(&app, "/admin/api/editor").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    async fn post_json(app: &Router, uri: &str) -> serde_json::Value {
        let response = app
            .clone()
            .oneshot(Request::post(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let (app, _) = app();
        let (status, body) = get_text(&app, "/favicon.ico").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "Not found: /favicon.ico");
    }

    #[tokio::test]
    async fn test_showcase_carousel_wraps() {
        let (app, state) = app();

        assert_eq!(post_json(&app, "/showcase/next").await["current"], 1);
        assert_eq!(post_json(&app, "/showcase/next").await["current"], 0);
        assert_eq!(post_json(&app, "/showcase/previous").await["current"], 1);
        assert_eq!(post_json(&app, "/showcase/select/0").await["current"], 0);
        assert_eq!(post_json(&app, "/showcase/select/9").await["current"], 1);

        assert_eq!(state.page().unwrap().showcase().current_index(), 1);
        let (_, body) = get_text(&app, "/").await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["showcase"]["current"], 1);
    }

    #[test]
    fn test_open_origin_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        let origin = open_origin(&DataSource::File(path)).unwrap();
        assert!(origin.open_page().keys().unwrap().is_empty());
    }
}
