//! Product showcase with an image carousel.

use serde::Serialize;
use showroom_content::{ContentChange, ContentRepository};
use showroom_core::ProductData;

use super::Projection;

/// Product details and the carousel position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowcaseView {
    title: String,
    price: String,
    description: String,
    images: Vec<String>,
    current: usize,
}

impl ShowcaseView {
    #[must_use]
    pub fn from_product(product: &ProductData) -> Self {
        Self {
            title: product.title.clone(),
            price: product.price.clone(),
            description: product.description.clone(),
            images: product.images.clone(),
            current: 0,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn price(&self) -> &str {
        &self.price
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn images(&self) -> &[String] {
        &self.images
    }

    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    /// The image under the carousel cursor, if there are any images.
    #[must_use]
    pub fn current_image(&self) -> Option<&str> {
        self.images.get(self.current).map(String::as_str)
    }

    /// Advance, wrapping from the last image to the first.
    pub fn next(&mut self) {
        if !self.images.is_empty() {
            self.current = (self.current + 1) % self.images.len();
        }
    }

    /// Step back, wrapping from the first image to the last.
    pub fn previous(&mut self) {
        if !self.images.is_empty() {
            self.current = self
                .current
                .checked_sub(1)
                .unwrap_or(self.images.len() - 1);
        }
    }

    /// Jump to `index`, clamped to the last image.
    pub fn select(&mut self, index: usize) {
        self.current = index.min(self.images.len().saturating_sub(1));
    }

    fn replace(&mut self, product: &ProductData) {
        let current = self.current;
        *self = Self::from_product(product);
        self.select(current);
    }
}

impl Projection for ShowcaseView {
    fn mount(repository: &ContentRepository) -> Self {
        Self::from_product(&repository.load_product())
    }

    fn apply(&mut self, change: &ContentChange) -> bool {
        let ContentChange::Product(product) = change else {
            return false;
        };
        self.replace(product);
        true
    }

    fn reload(&mut self, repository: &ContentRepository) {
        self.replace(&repository.load_product());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn showcase(images: &[&str]) -> ShowcaseView {
        ShowcaseView::from_product(&ProductData {
            images: images.iter().map(ToString::to_string).collect(),
            ..ProductData::default()
        })
    }

    #[test]
    fn test_carousel_wraps() {
        let mut view = showcase(&["a", "b", "c"]);
        view.previous();
        assert_eq!(view.current_image(), Some("c"));
        view.next();
        assert_eq!(view.current_image(), Some("a"));
        view.next();
        assert_eq!(view.current_image(), Some("b"));
    }

    #[test]
    fn test_empty_carousel() {
        let mut view = showcase(&[]);
        view.next();
        view.previous();
        view.select(3);
        assert_eq!(view.current_index(), 0);
        assert_eq!(view.current_image(), None);
    }

    #[test]
    fn test_position_clamped_when_images_shrink() {
        let mut view = showcase(&["a", "b", "c"]);
        view.select(2);

        let product = ProductData {
            images: vec!["x".to_string()],
            ..ProductData::default()
        };
        assert!(view.apply(&ContentChange::Product(Box::new(product))));
        assert_eq!(view.current_image(), Some("x"));
    }

    #[test]
    fn test_position_kept_when_images_grow() {
        let mut view = showcase(&["a", "b"]);
        view.select(1);

        let product = ProductData {
            images: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            ..ProductData::default()
        };
        view.apply(&ContentChange::Product(Box::new(product)));
        assert_eq!(view.current_index(), 1);
    }
}
