//! The product record shown across the storefront.
//!
//! There is exactly one product per origin. The record is persisted as a
//! single JSON object under the `productData` key and always replaced
//! whole, never patched field by field.

use serde::{Deserialize, Serialize};

/// Hero description used when the product carries none.
pub const DEFAULT_HERO_DESCRIPTION: &str = "Elegância e conforto para transformar sua sala de estar";

/// Video shown when the product carries no video URL.
pub const DEFAULT_VIDEO_URL: &str = "https://www.youtube.com/embed/dQw4w9WgXcQ";

/// Maximum number of benefits displayed and editable.
pub const MAX_BENEFITS: usize = 4;

/// The single product promoted by the storefront.
///
/// `price` is a display string (e.g. `R$ 1.999,00`); no arithmetic is ever
/// performed on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductData {
    pub title: String,
    pub price: String,
    pub description: String,
    /// Image URLs in display order. Duplicates are allowed and the list may be empty.
    pub images: Vec<String>,
    pub video_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefits_list: Option<Vec<Benefit>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<ContactInfo>,
}

/// A selling point shown in the benefits section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Benefit {
    pub title: String,
    pub description: String,
    /// Explicit icon. Records written before icons were stored fall back to
    /// [`IconKind::for_position`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_kind: Option<IconKind>,
}

impl Benefit {
    /// Create a benefit with an explicit icon.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>, icon: IconKind) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            icon_kind: Some(icon),
        }
    }

    /// Resolve the icon for the benefit at `position`.
    ///
    /// Returns `None` only for an icon-less benefit past [`MAX_BENEFITS`].
    #[must_use]
    pub fn icon_at(&self, position: usize) -> Option<IconKind> {
        self.icon_kind.or_else(|| IconKind::for_position(position))
    }
}

/// Icon glyphs available to benefits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IconKind {
    Truck,
    Shield,
    Clock,
    CreditCard,
}

impl IconKind {
    /// Icon order used for benefits that carry no explicit icon.
    pub const POSITIONAL: [Self; MAX_BENEFITS] =
        [Self::Truck, Self::Shield, Self::Clock, Self::CreditCard];

    /// Icon for an icon-less benefit at `position`. No wraparound past the cap.
    #[must_use]
    pub fn for_position(position: usize) -> Option<Self> {
        Self::POSITIONAL.get(position).copied()
    }
}

/// Store contact details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl ContactInfo {
    /// Return a copy with one field replaced.
    #[must_use]
    pub fn with_field(&self, field: ContactField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match field {
            ContactField::Phone => next.phone = value,
            ContactField::Email => next.email = value,
            ContactField::Address => next.address = value,
        }
        next
    }
}

/// Editable contact fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactField {
    Phone,
    Email,
    Address,
}

/// Editable free-text product fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProductField {
    Title,
    Price,
    Description,
    VideoUrl,
    HeroTitle,
    HeroDescription,
}

impl ProductData {
    /// Return a copy with one free-text field replaced.
    #[must_use]
    pub fn with_field(&self, field: ProductField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match field {
            ProductField::Title => next.title = value,
            ProductField::Price => next.price = value,
            ProductField::Description => next.description = value,
            ProductField::VideoUrl => next.video_url = value,
            ProductField::HeroTitle => next.hero_title = Some(value),
            ProductField::HeroDescription => next.hero_description = Some(value),
        }
        next
    }

    /// Hero title, falling back to the product title when unset or empty.
    #[must_use]
    pub fn hero_title_or_title(&self) -> &str {
        non_empty(self.hero_title.as_deref()).unwrap_or(&self.title)
    }

    /// Hero description, falling back to [`DEFAULT_HERO_DESCRIPTION`].
    #[must_use]
    pub fn hero_description_or_default(&self) -> &str {
        non_empty(self.hero_description.as_deref()).unwrap_or(DEFAULT_HERO_DESCRIPTION)
    }

    /// Video URL, falling back to [`DEFAULT_VIDEO_URL`] when empty.
    #[must_use]
    pub fn video_url_or_default(&self) -> &str {
        non_empty(Some(self.video_url.as_str())).unwrap_or(DEFAULT_VIDEO_URL)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

impl Default for ProductData {
    fn default() -> Self {
        let title = "Sofá Conforto Supremo".to_string();
        Self {
            hero_title: Some(title.clone()),
            title,
            price: "R$ 1.999,00".to_string(),
            description: "Sofá de 3 lugares com tecido premium, estrutura reforçada e almofadas \
                          de espuma de alta densidade. O máximo de conforto para sua sala de estar."
                .to_string(),
            images: vec![
                "https://images.unsplash.com/photo-1555041469-a586c61ea9bc?ixlib=rb-1.2.1&auto=format&fit=crop&w=1050&q=80".to_string(),
                "https://images.unsplash.com/photo-1493663284031-b7e3aefcae8e?ixlib=rb-1.2.1&auto=format&fit=crop&w=1050&q=80".to_string(),
            ],
            video_url: DEFAULT_VIDEO_URL.to_string(),
            hero_description: Some(DEFAULT_HERO_DESCRIPTION.to_string()),
            benefits_list: Some(vec![
                Benefit::new(
                    "Entrega no Mesmo Dia",
                    "Receba seu novo sofá hoje mesmo após a confirmação da compra.",
                    IconKind::Truck,
                ),
                Benefit::new(
                    "Frete Grátis",
                    "Não cobramos pelo transporte, economize ainda mais na sua compra.",
                    IconKind::Shield,
                ),
                Benefit::new(
                    "Montagem Inclusa",
                    "Nossos profissionais montam seu sofá na hora da entrega sem custo adicional.",
                    IconKind::Clock,
                ),
                Benefit::new(
                    "Pagamento na Entrega",
                    "Pague apenas quando receber e conferir seu produto, maior segurança para você.",
                    IconKind::CreditCard,
                ),
            ]),
            contact_info: Some(ContactInfo {
                phone: "(34) 99148-3602".to_string(),
                email: "contato@camposmoveis.com.br".to_string(),
                address: "Av. Paulista, 1000 - Bela Vista, São Paulo - SP".to_string(),
            }),
        }
    }
}
