//! Hero banner.

use serde::Serialize;
use showroom_content::{ContentChange, ContentRepository};
use showroom_core::ProductData;

use super::Projection;

/// Hero banner values with fallbacks resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroView {
    title: String,
    description: String,
    video_url: String,
    product_title: String,
}

impl HeroView {
    #[must_use]
    pub fn from_product(product: &ProductData) -> Self {
        Self {
            title: product.hero_title_or_title().to_string(),
            description: product.hero_description_or_default().to_string(),
            video_url: product.video_url_or_default().to_string(),
            product_title: product.title.clone(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn video_url(&self) -> &str {
        &self.video_url
    }

    /// Product title, used in the contact message.
    #[must_use]
    pub fn product_title(&self) -> &str {
        &self.product_title
    }

    /// The video URL with muted autoplay requested.
    #[must_use]
    pub fn autoplay_video_url(&self) -> String {
        let separator = if self.video_url.contains('?') { '&' } else { '?' };
        format!("{}{separator}autoplay=1&muted=1", self.video_url)
    }
}

impl Projection for HeroView {
    fn mount(repository: &ContentRepository) -> Self {
        Self::from_product(&repository.load_product())
    }

    fn apply(&mut self, change: &ContentChange) -> bool {
        let ContentChange::Product(product) = change else {
            return false;
        };
        *self = Self::from_product(product);
        true
    }
}
