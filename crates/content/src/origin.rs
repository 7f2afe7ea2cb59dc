//! Origin-scoped storage shared by page instances.
//!
//! An [`Origin`] owns one backend and the cross-page storage-event channel.
//! Each page (the equivalent of a browser tab) writes through its own
//! [`PageStorage`] handle, which tags events with the writing page so that
//! only *other* pages observe them.

use std::sync::Arc;

use showroom_core::PageId;
use tokio::sync::broadcast;

use crate::error::Lagged;
use crate::storage::{KeyValueStore, StorageError};

const EVENT_CAPACITY: usize = 64;

/// A stored key changed. Carries no value: receivers re-read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageEvent {
    pub key: String,
    pub source: PageId,
}

/// The storage scope shared by every page of one origin.
#[derive(Clone)]
pub struct Origin {
    inner: Arc<OriginInner>,
}

struct OriginInner {
    backend: Box<dyn KeyValueStore>,
    events: broadcast::Sender<StorageEvent>,
}

impl Origin {
    /// Create an origin over a storage backend.
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            inner: Arc::new(OriginInner {
                backend: Box::new(backend),
                events,
            }),
        }
    }

    /// Open a storage handle for a new page.
    #[must_use]
    pub fn open_page(&self) -> PageStorage {
        PageStorage {
            page: PageId::generate(),
            origin: self.clone(),
        }
    }

    fn emit(&self, key: &str, source: PageId) {
        // No other page listening is not an error.
        let _ = self.inner.events.send(StorageEvent {
            key: key.to_string(),
            source,
        });
    }
}

impl std::fmt::Debug for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Origin")
            .field("listeners", &self.inner.events.receiver_count())
            .finish_non_exhaustive()
    }
}

/// One page's view of its origin's storage.
#[derive(Debug, Clone)]
pub struct PageStorage {
    page: PageId,
    origin: Origin,
}

impl PageStorage {
    /// The page this handle belongs to.
    #[must_use]
    pub const fn page(&self) -> PageId {
        self.page
    }

    /// Read a raw value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    pub fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.origin.inner.backend.get(key)
    }

    /// Write a raw value. Other pages are notified only if the value changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    pub fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let previous = self.origin.inner.backend.set(key, value)?;
        if previous.as_deref() != Some(value) {
            self.origin.emit(key, self.page);
        }
        Ok(())
    }

    /// Remove a key. Other pages are notified only if it existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        if self.origin.inner.backend.remove(key)?.is_some() {
            self.origin.emit(key, self.page);
        }
        Ok(())
    }

    /// List every key in the origin.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    pub fn keys(&self) -> Result<Vec<String>, StorageError> {
        self.origin.inner.backend.keys()
    }

    /// Listen for changes made by other pages of this origin.
    #[must_use]
    pub fn subscribe(&self) -> StorageEvents {
        StorageEvents {
            page: self.page,
            rx: self.origin.inner.events.subscribe(),
        }
    }
}

/// Storage events written by pages other than the subscriber's own.
#[derive(Debug)]
pub struct StorageEvents {
    page: PageId,
    rx: broadcast::Receiver<StorageEvent>,
}

impl StorageEvents {
    /// Take the next pending foreign event without waiting.
    ///
    /// Yields `Err(Lagged)` when events were dropped for this listener. The
    /// dropped events may have named any key, so the caller should treat
    /// every key as changed.
    pub fn try_next(&mut self) -> Option<Result<StorageEvent, Lagged>> {
        loop {
            match self.rx.try_recv() {
                Ok(event) if event.source == self.page => {}
                Ok(event) => return Some(Ok(event)),
                Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Storage listener lagged, events dropped");
                    return Some(Err(Lagged { skipped }));
                }
                Err(_) => return None,
            }
        }
    }

    /// Wait for the next foreign event. Returns `None` once the origin is gone.
    pub async fn next(&mut self) -> Option<Result<StorageEvent, Lagged>> {
        loop {
            match self.rx.recv().await {
                Ok(event) if event.source == self.page => {}
                Ok(event) => return Some(Ok(event)),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Storage listener lagged, events dropped");
                    return Some(Err(Lagged { skipped }));
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}
