//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Page snapshot (JSON)
//! GET  /health                 - Health check
//! GET  /theme.css              - Theme colors as CSS custom properties
//! GET  /events                 - Content changes (server-sent events)
//!
//! # Showcase carousel
//! POST /showcase/next          - Advance to the next image
//! POST /showcase/previous      - Step back one image
//! POST /showcase/select/:index - Jump to an image
//!
//! # Editor (see showroom-admin)
//! /admin/*                     - Login, logout and editor API
//! ```

pub mod events;
pub mod home;
pub mod showcase;
pub mod theme;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the public routes router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/theme.css", get(theme::stylesheet))
        .route("/events", get(events::stream))
        .route("/showcase/next", post(showcase::next))
        .route("/showcase/previous", post(showcase::previous))
        .route("/showcase/select/{index}", post(showcase::select))
}
