//! Login/logout gate for the content editor.
//!
//! The gate compares submitted credentials with configured literals and
//! records success as the `isAdmin` flag in the page's store. Anyone who
//! can write that key is "logged in"; this decides what is shown, nothing
//! more.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use showroom_content::{ContentError, ContentRepository};
use thiserror::Error;

/// Username accepted when none is configured.
pub const DEFAULT_USERNAME: &str = "admin";

/// Password accepted when none is configured.
pub const DEFAULT_PASSWORD: &str = "brasil10";

/// Errors from the session gate.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Credenciais inválidas. Tente novamente.")]
    InvalidCredentials,

    #[error(transparent)]
    Content(#[from] ContentError),
}

/// The username/password pair the gate accepts.
#[derive(Clone)]
pub struct AdminCredentials {
    username: String,
    password: SecretString,
}

impl AdminCredentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password.expose_secret() == password
    }
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self::new(DEFAULT_USERNAME, SecretString::from(DEFAULT_PASSWORD))
    }
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// What the page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "camelCase")]
pub enum View {
    /// The public storefront; `login_affordance` is set while logged out.
    #[serde(rename_all = "camelCase")]
    Storefront { login_affordance: bool },
    /// The content editor, replacing the storefront sections.
    AdminPanel,
}

/// Session gate for one page.
#[derive(Debug)]
pub struct SessionGate {
    repository: ContentRepository,
    credentials: AdminCredentials,
    panel_open: bool,
}

impl SessionGate {
    #[must_use]
    pub const fn new(repository: ContentRepository, credentials: AdminCredentials) -> Self {
        Self {
            repository,
            credentials,
            panel_open: false,
        }
    }

    /// Whether the stored session flag is set.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.repository.load_session()
    }

    /// Check credentials and set the session flag on a match.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidCredentials`] on mismatch, leaving the
    /// flag untouched. There is no lockout.
    pub fn login(&mut self, username: &str, password: &str) -> Result<(), SessionError> {
        if !self.credentials.matches(username, password) {
            tracing::warn!(username, "Admin login rejected");
            return Err(SessionError::InvalidCredentials);
        }
        self.repository.save_session(true)?;
        tracing::info!(username, "Admin logged in");
        Ok(())
    }

    /// Clear the session flag and close the editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the flag cannot be removed.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.panel_open = false;
        self.repository.clear_session()?;
        tracing::info!("Admin logged out");
        Ok(())
    }

    /// Flip between storefront and editor. Returns whether the editor is
    /// now shown; always `false` while logged out.
    pub fn toggle_admin_panel(&mut self) -> bool {
        self.panel_open = !self.panel_open;
        self.view() == View::AdminPanel
    }

    #[must_use]
    pub fn view(&self) -> View {
        match (self.is_logged_in(), self.panel_open) {
            (true, true) => View::AdminPanel,
            (true, false) => View::Storefront {
                login_affordance: false,
            },
            (false, _) => View::Storefront {
                login_affordance: true,
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use showroom_content::{MemoryStore, Origin, keys};

    use super::*;

    fn gate() -> SessionGate {
        SessionGate::new(
            ContentRepository::new(Origin::new(MemoryStore::new()).open_page()),
            AdminCredentials::default(),
        )
    }

    #[test]
    fn test_login_sets_flag() {
        let mut gate = gate();
        gate.login("admin", "brasil10").unwrap();

        assert!(gate.is_logged_in());
        assert_eq!(
            gate.repository.storage().get(keys::SESSION).unwrap().as_deref(),
            Some("true")
        );
    }

    #[test]
    fn test_wrong_password_changes_nothing() {
        let mut gate = gate();
        let err = gate.login("admin", "wrong").unwrap_err();

        assert!(matches!(err, SessionError::InvalidCredentials));
        assert_eq!(err.to_string(), "Credenciais inválidas. Tente novamente.");
        assert!(!gate.is_logged_in());
        assert!(gate.repository.storage().keys().unwrap().is_empty());
    }

    #[test]
    fn test_logout_removes_flag_and_closes_panel() {
        let mut gate = gate();
        gate.login("admin", "brasil10").unwrap();
        assert!(gate.toggle_admin_panel());

        gate.logout().unwrap();

        assert!(!gate.is_logged_in());
        assert_eq!(gate.repository.storage().get(keys::SESSION).unwrap(), None);
        assert_eq!(
            gate.view(),
            View::Storefront {
                login_affordance: true
            }
        );
    }

    #[test]
    fn test_view_transitions() {
        let mut gate = gate();
        assert!(!gate.toggle_admin_panel());
        gate.toggle_admin_panel();

        gate.login("admin", "brasil10").unwrap();
        assert_eq!(
            gate.view(),
            View::Storefront {
                login_affordance: false
            }
        );
        assert!(gate.toggle_admin_panel());
        assert_eq!(gate.view(), View::AdminPanel);
        assert!(!gate.toggle_admin_panel());
    }

    #[test]
    fn test_custom_credentials() {
        let mut gate = SessionGate::new(
            ContentRepository::new(Origin::new(MemoryStore::new()).open_page()),
            AdminCredentials::new("loja", SecretString::from("segredo")),
        );
        assert!(gate.login("admin", "brasil10").is_err());
        gate.login("loja", "segredo").unwrap();
        assert!(gate.is_logged_in());
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let debug = format!("{:?}", AdminCredentials::default());
        assert!(debug.contains("admin"));
        assert!(!debug.contains("brasil10"));
    }

    #[test]
    fn test_view_json_shape() {
        let json = serde_json::to_value(View::Storefront {
            login_affordance: true,
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"view": "storefront", "loginAffordance": true})
        );
    }
}
