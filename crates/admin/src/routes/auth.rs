//! Login and logout handlers.

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use serde::Deserialize;

use crate::error::Result;
use crate::state::AdminState;

/// Build the auth router.
pub fn router() -> Router<AdminState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
}

/// Submitted login form.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Check credentials and set the session flag.
///
/// POST /admin/login
async fn login(
    State(state): State<AdminState>,
    Json(form): Json<LoginRequest>,
) -> Result<StatusCode> {
    state.session()?.login(&form.username, &form.password)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Clear the session flag.
///
/// POST /admin/logout
async fn logout(State(state): State<AdminState>) -> Result<StatusCode> {
    state.session()?.logout()?;
    Ok(StatusCode::NO_CONTENT)
}
