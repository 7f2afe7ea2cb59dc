//! Session flag commands.

use std::path::Path;

use super::{CommandError, open_repository};

/// Clear the admin session flag.
///
/// Returns whether a session was active.
///
/// # Errors
///
/// Returns an error if the store cannot be opened or written.
pub fn logout(data: &Path) -> Result<bool, CommandError> {
    let repository = open_repository(data)?;
    let was_active = repository.load_session();
    repository.clear_session()?;
    tracing::info!(was_active, "Admin session cleared");
    Ok(was_active)
}
