//! Navigation bar colors.

use serde::Serialize;
use showroom_content::{ContentChange, ContentRepository};
use showroom_core::ThemeSettings;

use super::Projection;

/// The navbar's view of the theme.
///
/// The bar is painted with the primary color and text color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavbarView {
    background: String,
    text: String,
}

impl NavbarView {
    #[must_use]
    pub fn from_theme(theme: &ThemeSettings) -> Self {
        Self {
            background: theme.primary_color.clone(),
            text: theme.text_color.clone(),
        }
    }

    #[must_use]
    pub fn background(&self) -> &str {
        &self.background
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Projection for NavbarView {
    fn mount(repository: &ContentRepository) -> Self {
        Self::from_theme(&repository.load_theme())
    }

    fn apply(&mut self, change: &ContentChange) -> bool {
        let ContentChange::Theme(theme) = change else {
            return false;
        };
        *self = Self::from_theme(theme);
        true
    }
}
