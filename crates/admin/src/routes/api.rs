//! Editor API handlers. Every route requires the admin session flag.

use axum::{
    Json, Router,
    extract::State,
    http::header,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use showroom_content::EXPORT_FILE_NAME;

use crate::editor::{Confirmation, EditCommand, EditorSnapshot, IMPORT_SUCCESS_NOTICE};
use crate::error::{AdminError, Result};
use crate::middleware::RequireAdminSession;
use crate::state::AdminState;

/// Build the editor API router.
pub fn router() -> Router<AdminState> {
    Router::new()
        .route("/api/editor", get(snapshot))
        .route("/api/edit", post(edit))
        .route("/api/export", get(export))
        .route("/api/import", post(import))
        .route("/api/reset", post(reset))
}

/// Result of a successful import.
#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub message: &'static str,
    pub imported: Vec<&'static str>,
}

/// Restore-defaults request; `confirm` must be `true`.
#[derive(Debug, Deserialize)]
pub struct ResetRequest {
    #[serde(default)]
    pub confirm: bool,
}

/// GET /admin/api/editor
async fn snapshot(
    _: RequireAdminSession,
    State(state): State<AdminState>,
) -> Result<Json<EditorSnapshot>> {
    Ok(Json(state.editor()?.snapshot()))
}

/// Apply one edit command and return the updated editor.
///
/// POST /admin/api/edit
async fn edit(
    _: RequireAdminSession,
    State(state): State<AdminState>,
    Json(command): Json<EditCommand>,
) -> Result<Json<EditorSnapshot>> {
    let mut editor = state.editor()?;
    editor.apply(command)?;
    Ok(Json(editor.snapshot()))
}

/// Download both records as a JSON attachment.
///
/// GET /admin/api/export
async fn export(
    _: RequireAdminSession,
    State(state): State<AdminState>,
) -> Result<impl IntoResponse> {
    let document = state.editor()?.export()?;
    let disposition = format!("attachment; filename=\"{EXPORT_FILE_NAME}\"");

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        document,
    ))
}

/// Replace the records present in the uploaded document.
///
/// POST /admin/api/import
async fn import(
    _: RequireAdminSession,
    State(state): State<AdminState>,
    body: String,
) -> Result<Json<ImportResponse>> {
    let outcome = state.editor()?.import(&body)?;

    Ok(Json(ImportResponse {
        message: IMPORT_SUCCESS_NOTICE,
        imported: outcome.keys(),
    }))
}

/// Overwrite both records with the defaults.
///
/// POST /admin/api/reset
async fn reset(
    _: RequireAdminSession,
    State(state): State<AdminState>,
    Json(request): Json<ResetRequest>,
) -> Result<Json<EditorSnapshot>> {
    let mut editor = state.editor()?;
    if !editor.restore_defaults(Confirmation::from(request.confirm))? {
        return Err(AdminError::BadRequest(
            "restoring defaults requires confirmation".to_string(),
        ));
    }
    Ok(Json(editor.snapshot()))
}
