//! Content layer errors.

use thiserror::Error;

use crate::storage::StorageError;

/// Error type for repository writes.
///
/// Reads never fail: a missing or malformed record is a cache miss and the
/// compiled-in default is returned instead.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A listener fell behind and its oldest pending messages were discarded.
///
/// The messages themselves are gone; the receiver should re-read whatever
/// it derives from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("listener lagged, {skipped} messages dropped")]
pub struct Lagged {
    pub skipped: u64,
}
