//! Export/import document.
//!
//! The document is a single JSON object:
//!
//! ```json
//! { "productData": { ... }, "themeSettings": { ... } }
//! ```
//!
//! Either key may be omitted on import. A present key whose value is `null`
//! counts as omitted.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use showroom_core::{ProductData, ThemeSettings};
use thiserror::Error;

use crate::error::ContentError;
use crate::repository::keys;

/// Fixed download name for exports.
pub const EXPORT_FILE_NAME: &str = "campos-moveis-config.json";

/// Errors rejecting an import. A rejected import changes nothing.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("file is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),
    #[error("file must contain a JSON object")]
    NotAnObject,
    #[error("{key} does not have the expected shape: {source}")]
    InvalidRecord {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("file contains neither productData nor themeSettings")]
    NoRecords,
    #[error(transparent)]
    Content(#[from] ContentError),
}

/// Both records, either of which may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferBundle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_data: Option<ProductData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_settings: Option<ThemeSettings>,
}

/// Records actually applied by an import.
pub type ImportOutcome = TransferBundle;

impl TransferBundle {
    /// Bundle holding both records.
    #[must_use]
    pub const fn complete(product: ProductData, theme: ThemeSettings) -> Self {
        Self {
            product_data: Some(product),
            theme_settings: Some(theme),
        }
    }

    /// Pretty-printed export document.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse and validate an import document.
    ///
    /// Every present record is validated before anything is returned, so a
    /// bad `themeSettings` also rejects an otherwise valid `productData`.
    ///
    /// # Errors
    ///
    /// Returns an [`ImportError`] describing the first problem found.
    pub fn parse(raw: &str) -> Result<Self, ImportError> {
        let value: JsonValue = serde_json::from_str(raw).map_err(ImportError::InvalidJson)?;
        let JsonValue::Object(mut map) = value else {
            return Err(ImportError::NotAnObject);
        };

        let product_data = take_record(&mut map, keys::PRODUCT)?;
        let theme_settings = take_record(&mut map, keys::THEME)?;

        if product_data.is_none() && theme_settings.is_none() {
            return Err(ImportError::NoRecords);
        }

        Ok(Self {
            product_data,
            theme_settings,
        })
    }

    /// Storage keys present in this bundle.
    #[must_use]
    pub fn keys(&self) -> Vec<&'static str> {
        let mut present = Vec::new();
        if self.product_data.is_some() {
            present.push(keys::PRODUCT);
        }
        if self.theme_settings.is_some() {
            present.push(keys::THEME);
        }
        present
    }
}

fn take_record<T: serde::de::DeserializeOwned>(
    map: &mut serde_json::Map<String, JsonValue>,
    key: &'static str,
) -> Result<Option<T>, ImportError> {
    match map.remove(key) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|source| ImportError::InvalidRecord { key, source }),
    }
}
