//! Page snapshot handler.

use axum::{Json, extract::State};

use crate::error::Result;
use crate::page::PageSnapshot;
use crate::state::AppState;

/// Everything the public page shows.
///
/// GET /
pub async fn home(State(state): State<AppState>) -> Result<Json<PageSnapshot>> {
    let view = state.view()?;
    let snapshot = state.page()?.snapshot(state.whatsapp(), view);
    Ok(Json(snapshot))
}
