//! Showroom Admin library.
//!
//! The content-editing side of the storefront:
//! - [`editor`] - Tabbed editor that commits every change immediately
//! - [`session`] - Login/logout gate deciding whether the editor is shown
//! - [`routes`] - JSON API over both, mounted under `/admin` by the storefront
//!
//! # Security
//!
//! The session gate compares against configured literals and stores a flag
//! readable by anyone with access to the store. It is a UI gate, not an
//! authentication system.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod editor;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod session;
pub mod state;

pub use editor::{
    AdminEditor, Confirmation, EditCommand, EditorError, EditorSnapshot, EditorTab,
    IMPORT_FAILURE_NOTICE, IMPORT_SUCCESS_NOTICE,
};
pub use error::AdminError;
pub use middleware::RequireAdminSession;
pub use session::{AdminCredentials, SessionError, SessionGate, View};
pub use state::AdminState;
