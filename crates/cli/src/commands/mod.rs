//! Command implementations.
//!
//! Every command opens the JSON file store as its own page. A running server
//! on the same file reads these writes on its next store access, and its
//! later writes to other keys leave them in place. The server's editor still
//! holds its last loaded records until it reloads.

pub mod content;
pub mod session;

use std::path::{Path, PathBuf};

use showroom_admin::EditorError;
use showroom_content::{ContentError, ContentRepository, FileStore, Origin, StorageError};
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The data file could not be opened.
    #[error("Cannot open content store: {0}")]
    Store(#[from] StorageError),

    /// A record could not be written.
    #[error(transparent)]
    Content(#[from] ContentError),

    /// The editor rejected the operation.
    #[error(transparent)]
    Editor(#[from] EditorError),

    /// A file given on the command line could not be read or written.
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A destructive command was run without `--yes`.
    #[error("Refusing to restore defaults without --yes")]
    ConfirmationRequired,
}

/// Open the file store at `data` as a new page.
fn open_repository(data: &Path) -> Result<ContentRepository, CommandError> {
    let store = FileStore::open(data)?;
    Ok(ContentRepository::new(Origin::new(store).open_page()))
}
