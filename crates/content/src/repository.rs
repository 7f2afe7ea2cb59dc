//! Typed access to the persisted records.
//!
//! Reads fall back to compiled-in defaults whenever a record is absent or
//! cannot be parsed; the two cases are indistinguishable to callers.
//! Defaults are never written by a read.

use serde::Serialize;
use serde::de::DeserializeOwned;
use showroom_core::{PageId, ProductData, ThemeSettings};

use crate::error::ContentError;
use crate::notifier::{ChangeNotifier, ContentChange};
use crate::origin::PageStorage;
use crate::style::StyleContext;
use crate::transfer::{ImportError, ImportOutcome, TransferBundle};

/// Storage keys.
pub mod keys {
    /// Key for the product record.
    pub const PRODUCT: &str = "productData";

    /// Key for the theme record.
    pub const THEME: &str = "themeSettings";

    /// Key for the admin session flag.
    pub const SESSION: &str = "isAdmin";
}

const SESSION_ACTIVE: &str = "true";

/// Load/save wrapper over one page's storage.
///
/// Cloning is cheap; clones share the page's storage handle, notifier and
/// style context.
#[derive(Debug, Clone)]
pub struct ContentRepository {
    storage: PageStorage,
    notifier: ChangeNotifier,
    style: StyleContext,
}

impl ContentRepository {
    /// Create a repository with a fresh notifier and style context.
    #[must_use]
    pub fn new(storage: PageStorage) -> Self {
        Self::with_parts(storage, ChangeNotifier::new(), StyleContext::new())
    }

    /// Create a repository around existing page components.
    #[must_use]
    pub const fn with_parts(
        storage: PageStorage,
        notifier: ChangeNotifier,
        style: StyleContext,
    ) -> Self {
        Self {
            storage,
            notifier,
            style,
        }
    }

    #[must_use]
    pub const fn page(&self) -> PageId {
        self.storage.page()
    }

    #[must_use]
    pub const fn storage(&self) -> &PageStorage {
        &self.storage
    }

    #[must_use]
    pub const fn notifier(&self) -> &ChangeNotifier {
        &self.notifier
    }

    #[must_use]
    pub const fn style(&self) -> &StyleContext {
        &self.style
    }

    /// Current product, or the default.
    #[must_use]
    pub fn load_product(&self) -> ProductData {
        self.load(keys::PRODUCT)
    }

    /// Replace the stored product and notify subscribers.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    pub fn save_product(&self, product: &ProductData) -> Result<(), ContentError> {
        self.store(keys::PRODUCT, product)?;
        self.notifier
            .publish(ContentChange::Product(Box::new(product.clone())));
        Ok(())
    }

    /// Current theme, or the default.
    #[must_use]
    pub fn load_theme(&self) -> ThemeSettings {
        self.load(keys::THEME)
    }

    /// Replace the stored theme, apply it to the style context and notify
    /// subscribers.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written; nothing is applied
    /// or published in that case.
    pub fn save_theme(&self, theme: &ThemeSettings) -> Result<(), ContentError> {
        self.store(keys::THEME, theme)?;
        self.style.apply(theme);
        self.notifier.publish(ContentChange::Theme(theme.clone()));
        Ok(())
    }

    /// Apply the stored theme to the style context without saving.
    ///
    /// Used at page mount and after another page changed the theme.
    pub fn refresh_style(&self) {
        self.style.apply(&self.load_theme());
    }

    /// Whether the admin session flag is set.
    #[must_use]
    pub fn load_session(&self) -> bool {
        matches!(self.storage.get(keys::SESSION), Ok(Some(flag)) if flag == SESSION_ACTIVE)
    }

    /// Set or clear the admin session flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the flag cannot be written.
    pub fn save_session(&self, active: bool) -> Result<(), ContentError> {
        if active {
            self.storage.set(keys::SESSION, SESSION_ACTIVE)?;
            Ok(())
        } else {
            self.clear_session()
        }
    }

    /// Remove the admin session flag entirely.
    ///
    /// # Errors
    ///
    /// Returns an error if the flag cannot be removed.
    pub fn clear_session(&self) -> Result<(), ContentError> {
        self.storage.remove(keys::SESSION)?;
        Ok(())
    }

    /// Both current records, ready for export.
    #[must_use]
    pub fn export(&self) -> TransferBundle {
        TransferBundle::complete(self.load_product(), self.load_theme())
    }

    /// Validate an import document and save each record it contains.
    ///
    /// # Errors
    ///
    /// Returns an error and changes nothing if the document is rejected.
    /// A storage failure after validation may leave the first record saved.
    pub fn import(&self, raw: &str) -> Result<ImportOutcome, ImportError> {
        let bundle = TransferBundle::parse(raw)?;
        if let Some(product) = &bundle.product_data {
            self.save_product(product)?;
        }
        if let Some(theme) = &bundle.theme_settings {
            self.save_theme(theme)?;
        }
        tracing::info!(keys = ?bundle.keys(), "Content imported");
        Ok(bundle)
    }

    /// Overwrite both records with the compiled-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if either record cannot be written.
    pub fn restore_defaults(&self) -> Result<(ProductData, ThemeSettings), ContentError> {
        let product = ProductData::default();
        let theme = ThemeSettings::default();
        self.save_product(&product)?;
        self.save_theme(&theme)?;
        tracing::info!("Content restored to defaults");
        Ok((product, theme))
    }

    fn load<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.storage.get(key) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::debug!(key, error = %e, "Stored record unreadable, using default");
                T::default()
            }),
            Ok(None) => T::default(),
            Err(e) => {
                tracing::warn!(key, error = %e, "Storage read failed, using default");
                T::default()
            }
        }
    }

    fn store<T: Serialize>(&self, key: &str, value: &T) -> Result<(), ContentError> {
        let raw = serde_json::to_string(value)?;
        self.storage.set(key, &raw)?;
        tracing::debug!(key, bytes = raw.len(), "Record committed");
        Ok(())
    }
}
