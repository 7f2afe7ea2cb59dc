//! Benefits section.

use serde::Serialize;
use showroom_content::{ContentChange, ContentRepository};
use showroom_core::{Benefit, IconKind, MAX_BENEFITS, ProductData};

use super::Projection;

/// One rendered benefit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenefitCard {
    pub title: String,
    pub description: String,
    pub icon: IconKind,
}

/// Up to [`MAX_BENEFITS`] cards in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenefitsView {
    cards: Vec<BenefitCard>,
}

impl BenefitsView {
    /// Cards for `product`. A product without a benefits list shows the
    /// default benefits.
    #[must_use]
    pub fn from_product(product: &ProductData) -> Self {
        let cards = match &product.benefits_list {
            Some(list) => cards(list),
            None => cards(
                ProductData::default()
                    .benefits_list
                    .as_deref()
                    .unwrap_or_default(),
            ),
        };
        Self { cards }
    }

    #[must_use]
    pub fn cards(&self) -> &[BenefitCard] {
        &self.cards
    }
}

fn cards(list: &[Benefit]) -> Vec<BenefitCard> {
    list.iter()
        .take(MAX_BENEFITS)
        .enumerate()
        .filter_map(|(position, benefit)| {
            Some(BenefitCard {
                title: benefit.title.clone(),
                description: benefit.description.clone(),
                icon: benefit.icon_at(position)?,
            })
        })
        .collect()
}

impl Projection for BenefitsView {
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
