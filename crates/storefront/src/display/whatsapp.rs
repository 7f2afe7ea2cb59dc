//! WhatsApp contact links.

use serde::Serialize;

/// Number used when none is configured.
pub const DEFAULT_WHATSAPP_NUMBER: &str = "5534991483602";

/// Builds `wa.me` links with a prefilled message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WhatsAppLink {
    number: String,
}

impl Default for WhatsAppLink {
    fn default() -> Self {
        Self::new(DEFAULT_WHATSAPP_NUMBER)
    }
}

impl WhatsAppLink {
    #[must_use]
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
        }
    }

    /// Link opening a chat with `message` prefilled.
    #[must_use]
    pub fn with_message(&self, message: &str) -> String {
        format!(
            "https://wa.me/{}?text={}",
            self.number,
            urlencoding::encode(message)
        )
    }

    /// Link asking about `product_title`, used by the hero.
    #[must_use]
    pub fn interested_in(&self, product_title: &str) -> String {
        self.with_message(&format!("Olá! Estou interessado no {product_title}"))
    }

    /// Link asking about `product_title` after seeing the showcase.
    #[must_use]
    pub fn showcase_inquiry(&self, product_title: &str) -> String {
        self.with_message(&format!(
            "Olá! Estou interessado no {product_title} que vi no anúncio. Gostaria de mais informações."
        ))
    }

    /// Link for general questions, used by the benefits section.
    #[must_use]
    pub fn questions(&self) -> String {
        self.with_message("Olá! Estou com dúvidas sobre o sofá. Pode me ajudar?")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_is_url_encoded() {
        let link = WhatsAppLink::default().interested_in("Sofá Retrô");
        assert_eq!(
            link,
            "https://wa.me/5534991483602?text=Ol%C3%A1%21%20Estou%20interessado%20no%20Sof%C3%A1%20Retr%C3%B4"
        );
    }

    #[test]
    fn test_custom_number() {
        let link = WhatsAppLink::new("5511999990000").with_message("oi");
        assert_eq!(link, "https://wa.me/5511999990000?text=oi");
    }
}
