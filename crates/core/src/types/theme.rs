//! Theme colors and the preset catalogs the editor offers.
//!
//! Color values are opaque CSS literals. Nothing here validates them; any
//! string is accepted and applied verbatim. Presets are resolved to plain
//! values when applied, so changing a catalog never alters a saved theme.

use serde::{Deserialize, Serialize};

/// Plain white, forced as text color when a color scheme is applied.
pub const WHITE: &str = "#ffffff";

/// The five theme colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSettings {
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub text_color: String,
    pub background_color: String,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            primary_color: "#1e40af".to_string(),
            secondary_color: "#1e3a8a".to_string(),
            accent_color: "#eab308".to_string(),
            text_color: WHITE.to_string(),
            background_color: WHITE.to_string(),
        }
    }
}

impl ThemeSettings {
    /// Get one color by field.
    #[must_use]
    pub fn get(&self, field: ThemeField) -> &str {
        match field {
            ThemeField::Primary => &self.primary_color,
            ThemeField::Secondary => &self.secondary_color,
            ThemeField::Accent => &self.accent_color,
            ThemeField::Text => &self.text_color,
            ThemeField::Background => &self.background_color,
        }
    }

    /// Return a copy with one color replaced.
    #[must_use]
    pub fn with_color(&self, field: ThemeField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match field {
            ThemeField::Primary => next.primary_color = value,
            ThemeField::Secondary => next.secondary_color = value,
            ThemeField::Accent => next.accent_color = value,
            ThemeField::Text => next.text_color = value,
            ThemeField::Background => next.background_color = value,
        }
        next
    }

    /// Return a copy with primary, secondary and text colors replaced.
    ///
    /// Accent and background are carried over unchanged.
    #[must_use]
    pub fn with_complete_theme(
        &self,
        primary: impl Into<String>,
        secondary: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            primary_color: primary.into(),
            secondary_color: secondary.into(),
            text_color: text.into(),
            ..self.clone()
        }
    }

    /// Iterate over `(field, value)` pairs in a fixed order.
    pub fn colors(&self) -> impl Iterator<Item = (ThemeField, &str)> {
        ThemeField::ALL.into_iter().map(|field| (field, self.get(field)))
    }
}

/// Theme color fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ThemeField {
    Primary,
    Secondary,
    Accent,
    Text,
    Background,
}

impl ThemeField {
    pub const ALL: [Self; 5] = [
        Self::Primary,
        Self::Secondary,
        Self::Accent,
        Self::Text,
        Self::Background,
    ];

    /// CSS custom property the color is published under.
    #[must_use]
    pub const fn css_variable(self) -> &'static str {
        match self {
            Self::Primary => "--primary-color",
            Self::Secondary => "--secondary-color",
            Self::Accent => "--accent-color",
            Self::Text => "--text-primary",
            Self::Background => "--background-color",
        }
    }
}

/// A named primary/secondary pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorScheme {
    pub name: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
}

/// A named single color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NamedColor {
    pub name: &'static str,
    pub value: &'static str,
}

/// Color schemes offered by the theme tab (Tailwind 700/900 shades).
pub const COLOR_SCHEMES: &[ColorScheme] = &[
    ColorScheme { name: "blue", primary: "#1e40af", secondary: "#1e3a8a" },
    ColorScheme { name: "green", primary: "#15803d", secondary: "#14532d" },
    ColorScheme { name: "red", primary: "#b91c1c", secondary: "#7f1d1d" },
    ColorScheme { name: "purple", primary: "#7e22ce", secondary: "#581c87" },
    ColorScheme { name: "amber", primary: "#b45309", secondary: "#78350f" },
    ColorScheme { name: "teal", primary: "#0f766e", secondary: "#134e4a" },
    ColorScheme { name: "gray", primary: "#374151", secondary: "#111827" },
    ColorScheme { name: "indigo", primary: "#4338ca", secondary: "#312e81" },
];

/// Accent colors offered by the theme tab (Tailwind 500 shades).
pub const ACCENT_COLORS: &[NamedColor] = &[
    NamedColor { name: "yellow", value: "#eab308" },
    NamedColor { name: "emerald", value: "#10b981" },
    NamedColor { name: "rose", value: "#f43f5e" },
    NamedColor { name: "orange", value: "#f97316" },
    NamedColor { name: "sky", value: "#0ea5e9" },
    NamedColor { name: "violet", value: "#8b5cf6" },
    NamedColor { name: "pink", value: "#ec4899" },
    NamedColor { name: "lime", value: "#84cc16" },
];

/// Text colors offered by the theme tab.
pub const TEXT_COLORS: &[NamedColor] = &[
    NamedColor { name: "white", value: WHITE },
    NamedColor { name: "lightGray", value: "#f3f4f6" },
    NamedColor { name: "darkGray", value: "#111827" },
    NamedColor { name: "black", value: "#000000" },
];

/// Look up a color scheme by name.
#[must_use]
pub fn find_color_scheme(name: &str) -> Option<&'static ColorScheme> {
    COLOR_SCHEMES.iter().find(|scheme| scheme.name == name)
}

/// Look up an accent color by name.
#[must_use]
pub fn find_accent(name: &str) -> Option<&'static NamedColor> {
    ACCENT_COLORS.iter().find(|color| color.name == name)
}

/// Look up a text color by name.
#[must_use]
pub fn find_text_color(name: &str) -> Option<&'static NamedColor> {
    TEXT_COLORS.iter().find(|color| color.name == name)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_theme_keeps_accent_and_background() {
        let before = ThemeSettings {
            accent_color: "#f43f5e".to_string(),
            background_color: "beige".to_string(),
            ..ThemeSettings::default()
        };
        let after = before.with_complete_theme("#15803d", "#14532d", WHITE);

        assert_eq!(after.primary_color, "#15803d");
        assert_eq!(after.secondary_color, "#14532d");
        assert_eq!(after.text_color, WHITE);
        assert_eq!(after.accent_color, before.accent_color);
        assert_eq!(after.background_color, before.background_color);
    }

    #[test]
    fn test_with_color_accepts_any_string() {
        let theme = ThemeSettings::default().with_color(ThemeField::Accent, "not a color");
        assert_eq!(theme.accent_color, "not a color");
    }

    #[test]
    fn test_catalog_lookups() {
        assert_eq!(find_color_scheme("teal").unwrap().primary, "#0f766e");
        assert_eq!(find_accent("lime").unwrap().value, "#84cc16");
        assert_eq!(find_text_color("black").unwrap().value, "#000000");
        assert!(find_color_scheme("chartreuse").is_none());
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(ThemeSettings::default()).unwrap();
        assert_eq!(json["primaryColor"], "#1e40af");
        assert_eq!(json["backgroundColor"], WHITE);
        assert_eq!(json.as_object().unwrap().len(), 5);
    }

    #[test]
    fn test_colors_iterates_all_fields() {
        let theme = ThemeSettings::default();
        let vars: Vec<_> = theme.colors().map(|(f, _)| f.css_variable()).collect();
        assert_eq!(
            vars,
            [
                "--primary-color",
                "--secondary-color",
                "--accent-color",
                "--text-primary",
                "--background-color"
            ]
        );
    }
}
