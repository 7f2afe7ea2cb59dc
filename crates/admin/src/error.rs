//! Unified error handling for the admin API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use showroom_content::{ContentError, ImportError};
use thiserror::Error;

use crate::editor::{EditorError, IMPORT_FAILURE_NOTICE};
use crate::session::SessionError;

/// Error type for admin route handlers.
#[derive(Debug, Error)]
pub enum AdminError {
    /// An editor handler failed.
    #[error("Editor error: {0}")]
    Editor(#[from] EditorError),

    /// Login or logout failed.
    #[error("{0}")]
    Session(#[from] SessionError),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AdminError {
    const fn is_server_error(&self) -> bool {
        matches!(
            self,
            Self::Internal(_)
                | Self::Editor(
                    EditorError::Content(_) | EditorError::Import(ImportError::Content(_))
                )
                | Self::Session(SessionError::Content(_))
        )
    }
}

impl From<ContentError> for AdminError {
    fn from(err: ContentError) -> Self {
        Self::Editor(EditorError::Content(err))
    }
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        if self.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Admin request error"
            );
            return (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response();
        }

        let status = match &self {
            Self::Session(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::BAD_REQUEST,
        };

        let message = match &self {
            Self::Editor(EditorError::Import(err)) => {
                tracing::warn!(error = %err, "Import rejected");
                IMPORT_FAILURE_NOTICE.to_string()
            }
            Self::Editor(err) => err.to_string(),
            _ => self.to_string(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AdminError`.
pub type Result<T> = std::result::Result<T, AdminError>;
