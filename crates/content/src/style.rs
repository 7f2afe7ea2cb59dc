//! Live style context consumed by presentation.
//!
//! Holds the CSS custom properties derived from the current theme. Every
//! successful theme save applies all five colors here.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::sync::{Arc, RwLock};

use showroom_core::{ThemeField, ThemeSettings};

/// Shared map of CSS custom properties.
#[derive(Debug, Clone, Default)]
pub struct StyleContext {
    properties: Arc<RwLock<BTreeMap<&'static str, String>>>,
}

impl StyleContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish every color of `theme` as a custom property.
    pub fn apply(&self, theme: &ThemeSettings) {
        // A poisoned lock still holds a usable map; the next apply overwrites it.
        let mut properties = self
            .properties
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        for (field, value) in theme.colors() {
            properties.insert(field.css_variable(), value.to_string());
        }
    }

    /// Current value of one property.
    #[must_use]
    pub fn property(&self, field: ThemeField) -> Option<String> {
        self.properties
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(field.css_variable())
            .cloned()
    }

    /// Render the properties as a `:root` rule.
    #[must_use]
    pub fn to_css(&self) -> String {
        let properties = self
            .properties
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let mut css = String::from(":root {\n");
        for (name, value) in properties.iter() {
            let _ = writeln!(css, "  {name}: {value};");
        }
        css.push_str("}\n");
        css
    }
}
