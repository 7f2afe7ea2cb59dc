//! Showroom Content - the content store and its change propagation.
//!
//! # Layers
//!
//! - [`storage`] - Key-value backends (in-memory and JSON file)
//! - [`origin`] - Origin-scoped storage shared by page instances, with
//!   cross-page storage events
//! - [`repository`] - Typed load/save of the product, theme and session flag
//! - [`notifier`] - In-page publish/subscribe of record changes
//! - [`style`] - Live CSS custom properties derived from the theme
//! - [`transfer`] - Export/import document
//!
//! Everything here is synchronous. Writes are whole-record replace at the
//! single-key granularity of the backend.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod error;
pub mod notifier;
pub mod origin;
pub mod repository;
pub mod storage;
pub mod style;
pub mod transfer;

pub use error::{ContentError, Lagged};
pub use notifier::{ChangeNotifier, ContentChange, Subscription};
pub use origin::{Origin, PageStorage, StorageEvent, StorageEvents};
pub use repository::{ContentRepository, keys};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use style::StyleContext;
pub use transfer::{EXPORT_FILE_NAME, ImportError, ImportOutcome, TransferBundle};
