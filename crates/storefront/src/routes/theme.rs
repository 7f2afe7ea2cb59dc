//! Theme stylesheet handler.

use axum::{extract::State, http::header, response::IntoResponse};

use crate::error::Result;
use crate::state::AppState;

/// The current theme as a `:root` rule.
///
/// GET /theme.css
pub async fn stylesheet(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let css = state.page()?.repository().style().to_css();
    Ok(([(header::CONTENT_TYPE, "text/css; charset=utf-8")], css))
}
