//! Request extractors for admin routes.

mod auth;

pub use auth::{AdminSessionRejection, RequireAdminSession};
