//! Showcase carousel handlers.
//!
//! The cursor lives on the public page and survives product edits, clamped to
//! the new image count.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::display::ShowcaseView;
use crate::error::Result;
use crate::state::AppState;

/// POST /showcase/next
pub async fn next(State(state): State<AppState>) -> Result<Json<ShowcaseView>> {
    let mut page = state.page()?;
    let showcase = page.showcase_mut();
    showcase.next();
    Ok(Json(showcase.clone()))
}

/// POST /showcase/previous
pub async fn previous(State(state): State<AppState>) -> Result<Json<ShowcaseView>> {
    let mut page = state.page()?;
    let showcase = page.showcase_mut();
    showcase.previous();
    Ok(Json(showcase.clone()))
}

/// Jump to a thumbnail.
///
/// POST /showcase/select/{index}
pub async fn select(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<ShowcaseView>> {
    let mut page = state.page()?;
    let showcase = page.showcase_mut();
    showcase.select(index);
    Ok(Json(showcase.clone()))
}
