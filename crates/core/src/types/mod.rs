//! Core types for Showroom.
//!
//! This module provides the two editable records and the catalogs the
//! editor resolves presets from.

pub mod id;
pub mod product;
pub mod theme;

pub use id::*;
pub use product::{
    Benefit, ContactField, ContactInfo, DEFAULT_HERO_DESCRIPTION, DEFAULT_VIDEO_URL, IconKind,
    MAX_BENEFITS, ProductData, ProductField,
};
pub use theme::{
    ACCENT_COLORS, COLOR_SCHEMES, ColorScheme, NamedColor, TEXT_COLORS, ThemeField, ThemeSettings,
    WHITE, find_accent, find_color_scheme, find_text_color,
};
