//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! Mounted under `/admin` by the storefront.
//!
//! ```text
//! # Session
//! POST /login                  - Check credentials, set the session flag
//! POST /logout                 - Clear the session flag
//!
//! # Editor (session flag required)
//! GET  /api/editor             - Editor snapshot
//! POST /api/edit               - Apply one edit command
//! GET  /api/export             - Download both records
//! POST /api/import             - Upload a document to import
//! POST /api/reset              - Restore defaults (`{"confirm": true}`)
//! ```

pub mod api;
pub mod auth;

use axum::Router;

use crate::state::AdminState;

/// Build the admin router.
pub fn router() -> Router<AdminState> {
    Router::new().merge(auth::router()).merge(api::router())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::{Method, Request, StatusCode, header},
    };
    use showroom_content::{ContentRepository, MemoryStore, Origin};
    use showroom_core::{ProductData, ThemeSettings};
    use tower::ServiceExt;

    use super::*;
    use crate::editor::{EditorSnapshot, IMPORT_FAILURE_NOTICE};
    use crate::session::AdminCredentials;

    fn app() -> (Router, ContentRepository) {
        let repository = ContentRepository::new(Origin::new(MemoryStore::new()).open_page());
        let state = AdminState::new(repository.clone(), AdminCredentials::default());
        (router().with_state(state), repository)
    }

    fn json_request(method: Method, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn login(app: &Router) {
        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/login",
                r#"{"username": "admin", "password": "brasil10"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_api_requires_session() {
        let (app, _) = app();
        let response = app
            .oneshot(Request::get("/api/editor").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_bad_login_is_rejected() {
        let (app, repository) = app();
        let response = app
            .oneshot(json_request(
                Method::POST,
                "/login",
                r#"{"username": "admin", "password": "nope"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_text(response).await,
            "Credenciais inválidas. Tente novamente."
        );
        assert!(!repository.load_session());
    }

    #[tokio::test]
    async fn test_edit_commits_and_returns_snapshot() {
        let (app, repository) = app();
        login(&app).await;

        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/api/edit",
                r#"{"action": "apply_color_scheme", "name": "red"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let snapshot: serde_json::Value =
            serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(snapshot["theme"]["primaryColor"], "#b91c1c");
        assert_eq!(repository.load_theme().primary_color, "#b91c1c");
    }

    #[tokio::test]
    async fn test_unknown_preset_is_bad_request() {
        let (app, _) = app();
        login(&app).await;

        let response = app
            .oneshot(json_request(
                Method::POST,
                "/api/edit",
                r#"{"action": "apply_accent", "name": "mauve"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_export_is_attachment() {
        let (app, _) = app();
        login(&app).await;

        let response = app
            .oneshot(Request::get("/api/export").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"campos-moveis-config.json\""
        );

        let document: serde_json::Value =
            serde_json::from_str(&body_text(response).await).unwrap();
        let theme: ThemeSettings =
            serde_json::from_value(document["themeSettings"].clone()).unwrap();
        assert_eq!(theme, ThemeSettings::default());
    }

    #[tokio::test]
    async fn test_import_failure_notice() {
        let (app, repository) = app();
        login(&app).await;

        let response = app
            .oneshot(json_request(Method::POST, "/api/import", "not json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, IMPORT_FAILURE_NOTICE);
        assert_eq!(repository.load_product(), ProductData::default());
    }

    #[tokio::test]
    async fn test_import_replaces_present_records() {
        let (app, repository) = app();
        login(&app).await;
        let product = ProductData {
            title: "Mesa".to_string(),
            ..ProductData::default()
        };
        let document = serde_json::json!({ "productData": &product }).to_string();

        let response = app
            .oneshot(json_request(Method::POST, "/api/import", &document))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["imported"], serde_json::json!(["productData"]));
        assert_eq!(repository.load_product(), product);
    }

    #[tokio::test]
    async fn test_reset_requires_confirmation() {
        let (app, repository) = app();
        login(&app).await;
        app.clone()
            .oneshot(json_request(
                Method::POST,
                "/api/edit",
                r#"{"action": "set_field", "field": "title", "value": "Mesa"}"#,
            ))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(json_request(Method::POST, "/api/reset", "{}"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(repository.load_product().title, "Mesa");

        let response = app
            .oneshot(json_request(Method::POST, "/api/reset", r#"{"confirm": true}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let snapshot: serde_json::Value =
            serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(snapshot["product"]["title"], ProductData::default().title);
        assert_eq!(repository.load_product(), ProductData::default());
    }

    #[tokio::test]
    async fn test_logout_locks_api() {
        let (app, _) = app();
        login(&app).await;

        let response = app
            .clone()
            .oneshot(Request::post("/logout").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .oneshot(Request::get("/api/editor").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let repository = ContentRepository::new(Origin::new(MemoryStore::new()).open_page());
        let state = AdminState::new(repository, AdminCredentials::default());
        let snapshot: EditorSnapshot = state.editor().unwrap().snapshot();
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["activeTab"], "images");
        assert_eq!(json["currentBenefitIndex"], 0);
        assert_eq!(json["previewMode"], false);
    }
}
