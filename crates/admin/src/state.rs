//! State shared across admin handlers.

use std::sync::{Arc, Mutex, MutexGuard};

use showroom_content::ContentRepository;

use crate::editor::AdminEditor;
use crate::error::AdminError;
use crate::session::{AdminCredentials, SessionGate};

/// Admin state shared across all handlers.
///
/// Both locks are only ever held across synchronous work.
#[derive(Clone)]
pub struct AdminState {
    inner: Arc<AdminStateInner>,
}

struct AdminStateInner {
    editor: Mutex<AdminEditor>,
    session: Mutex<SessionGate>,
}

impl AdminState {
    /// Open the editor and session gate over `repository`.
    #[must_use]
    pub fn new(repository: ContentRepository, credentials: AdminCredentials) -> Self {
        let session = SessionGate::new(repository.clone(), credentials);
        let editor = AdminEditor::open(repository);

        Self {
            inner: Arc::new(AdminStateInner {
                editor: Mutex::new(editor),
                session: Mutex::new(session),
            }),
        }
    }

    /// Lock the editor.
    ///
    /// # Errors
    ///
    /// Returns an error if a previous holder panicked.
    pub fn editor(&self) -> Result<MutexGuard<'_, AdminEditor>, AdminError> {
        self.inner
            .editor
            .lock()
            .map_err(|_| AdminError::Internal("editor lock poisoned".to_string()))
    }

    /// Lock the session gate.
    ///
    /// # Errors
    ///
    /// Returns an error if a previous holder panicked.
    pub fn session(&self) -> Result<MutexGuard<'_, SessionGate>, AdminError> {
        self.inner
            .session
            .lock()
            .map_err(|_| AdminError::Internal("session lock poisoned".to_string()))
    }
}
