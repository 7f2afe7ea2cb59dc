//! Session extractor for admin API handlers.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};

use crate::state::AdminState;

/// Extractor that requires the admin session flag.
///
/// The flag lives in the shared store, so any client is accepted once
/// someone has logged in and until someone logs out.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(_: RequireAdminSession) -> impl IntoResponse {
///     "editor"
/// }
/// ```
pub struct RequireAdminSession;

/// Error returned when the admin session flag is not set.
#[derive(Debug)]
pub enum AdminSessionRejection {
    /// No session flag.
    Unauthorized,
    /// The session gate could not be read.
    Unavailable,
}

impl IntoResponse for AdminSessionRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthorized => (StatusCode::UNAUTHORIZED, "Login required").into_response(),
            Self::Unavailable => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}

impl FromRequestParts<AdminState> for RequireAdminSession {
    type Rejection = AdminSessionRejection;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AdminState,
    ) -> Result<Self, Self::Rejection> {
        let logged_in = state
            .session()
            .map_err(|_| AdminSessionRejection::Unavailable)?
            .is_logged_in();

        if logged_in {
            Ok(Self)
        } else {
            Err(AdminSessionRejection::Unauthorized)
        }
    }
}
