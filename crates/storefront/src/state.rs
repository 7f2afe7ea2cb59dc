//! Application state shared across handlers.

use std::sync::{Arc, Mutex, MutexGuard};

use showroom_admin::{AdminState, View};
use showroom_content::{ContentRepository, Origin};

use crate::config::ShowroomConfig;
use crate::display::WhatsAppLink;
use crate::error::AppError;
use crate::page::PageInstance;

/// Application state shared across all handlers.
///
/// The editor and the public page are separate pages of one origin, so
/// editor commits reach the public page as storage events.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    editor_repository: ContentRepository,
    admin: AdminState,
    page: Mutex<PageInstance>,
    whatsapp: WhatsAppLink,
}

impl AppState {
    /// Create the application state over `origin`.
    #[must_use]
    pub fn new(config: ShowroomConfig, origin: Origin) -> Self {
        let editor_repository = ContentRepository::new(origin.open_page());
        let admin = AdminState::new(editor_repository.clone(), config.admin_credentials());
        let page = PageInstance::open(&origin);
        let whatsapp = WhatsAppLink::new(config.whatsapp_number.clone());

        Self {
            inner: Arc::new(AppStateInner {
                editor_repository,
                admin,
                page: Mutex::new(page),
                whatsapp,
            }),
        }
    }

    /// Repository of the editor's page; its notifier carries every edit.
    #[must_use]
    pub fn editor_repository(&self) -> &ContentRepository {
        &self.inner.editor_repository
    }

    #[must_use]
    pub fn admin(&self) -> &AdminState {
        &self.inner.admin
    }

    #[must_use]
    pub fn whatsapp(&self) -> &WhatsAppLink {
        &self.inner.whatsapp
    }

    /// Lock the public page after delivering pending notifications to it.
    ///
    /// # Errors
    ///
    /// Returns an error if a previous holder panicked.
    pub fn page(&self) -> Result<MutexGuard<'_, PageInstance>, AppError> {
        let mut page = self
            .inner
            .page
            .lock()
            .map_err(|_| AppError::Internal("page lock poisoned".to_string()))?;
        page.pump();
        Ok(page)
    }

    /// What the page should show for the current session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session gate is unavailable.
    pub fn view(&self) -> Result<View, AppError> {
        Ok(self.inner.admin.session()?.view())
    }
}
