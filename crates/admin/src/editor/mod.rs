//! The content editor.
//!
//! [`AdminEditor`] keeps an in-memory copy of both records. Every handler
//! builds a modified copy of the affected record, saves it through the
//! repository and only then replaces the in-memory copy, so the editor
//! never shows a value the store does not hold.

mod command;
mod tab;

pub use command::EditCommand;
pub use tab::EditorTab;

use serde::Serialize;
use showroom_content::{ContentError, ContentRepository, ImportError, ImportOutcome};
use showroom_core::{
    Benefit, ContactField, MAX_BENEFITS, ProductData, ProductField, ThemeField, ThemeSettings, WHITE,
    find_accent, find_color_scheme, find_text_color,
};
use thiserror::Error;

/// Notice shown after a successful import.
pub const IMPORT_SUCCESS_NOTICE: &str = "Configurações importadas com sucesso!";

/// Notice shown after a rejected import.
pub const IMPORT_FAILURE_NOTICE: &str =
    "Erro ao importar configurações. Verifique o formato do arquivo.";

/// Errors from editor handlers.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("unknown {kind} preset: {name}")]
    UnknownPreset { kind: &'static str, name: String },
    #[error("benefit {index} is out of range (0..{available})")]
    BenefitOutOfRange { index: usize, available: usize },
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error(transparent)]
    Import(#[from] ImportError),
}

/// Explicit answer to the restore-defaults prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl From<bool> for Confirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Self::Confirmed
        } else {
            Self::Declined
        }
    }
}

/// Everything the editor surface renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorSnapshot {
    pub active_tab: EditorTab,
    pub current_benefit_index: usize,
    pub preview_mode: bool,
    pub product: ProductData,
    pub theme: ThemeSettings,
}

/// Tabbed editor over the product and theme records.
#[derive(Debug)]
pub struct AdminEditor {
    repository: ContentRepository,
    product: ProductData,
    theme: ThemeSettings,
    active_tab: EditorTab,
    current_benefit_index: usize,
    preview_mode: bool,
}

impl AdminEditor {
    /// Open the editor, seeding both records from the repository and
    /// applying the stored theme to the page style.
    #[must_use]
    pub fn open(repository: ContentRepository) -> Self {
        let product = repository.load_product();
        let theme = repository.load_theme();
        repository.style().apply(&theme);

        Self {
            repository,
            product,
            theme,
            active_tab: EditorTab::default(),
            current_benefit_index: 0,
            preview_mode: false,
        }
    }

    #[must_use]
    pub const fn product(&self) -> &ProductData {
        &self.product
    }

    #[must_use]
    pub const fn theme(&self) -> &ThemeSettings {
        &self.theme
    }

    #[must_use]
    pub const fn active_tab(&self) -> EditorTab {
        self.active_tab
    }

    #[must_use]
    pub const fn current_benefit_index(&self) -> usize {
        self.current_benefit_index
    }

    #[must_use]
    pub const fn preview_mode(&self) -> bool {
        self.preview_mode
    }

    #[must_use]
    pub const fn repository(&self) -> &ContentRepository {
        &self.repository
    }

    #[must_use]
    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            active_tab: self.active_tab,
            current_benefit_index: self.current_benefit_index,
            preview_mode: self.preview_mode,
            product: self.product.clone(),
            theme: self.theme.clone(),
        }
    }

    /// Re-read both records, picking up changes made elsewhere.
    pub fn reload(&mut self) {
        self.product = self.repository.load_product();
        self.theme = self.repository.load_theme();
        self.clamp_benefit_index();
    }

    pub const fn select_tab(&mut self, tab: EditorTab) {
        self.active_tab = tab;
    }

    /// Flip preview mode, returning the new value.
    pub const fn toggle_preview(&mut self) -> bool {
        self.preview_mode = !self.preview_mode;
        self.preview_mode
    }

    // -------------------------------------------------------------------------
    // Product
    // -------------------------------------------------------------------------

    /// Replace one free-text product field.
    ///
    /// # Errors
    ///
    /// Returns an error if the product cannot be saved.
    pub fn set_product_field(
        &mut self,
        field: ProductField,
        value: impl Into<String>,
    ) -> Result<(), EditorError> {
        let next = self.product.with_field(field, value);
        self.commit_product(next)
    }

    /// Replace one contact field, creating empty contact details if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the product cannot be saved.
    pub fn set_contact_field(
        &mut self,
        field: ContactField,
        value: impl Into<String>,
    ) -> Result<(), EditorError> {
        let contact = self
            .product
            .contact_info
            .clone()
            .unwrap_or_default()
            .with_field(field, value);
        let next = ProductData {
            contact_info: Some(contact),
            ..self.product.clone()
        };
        self.commit_product(next)
    }

    /// Append a trimmed image URL. Blank input is ignored.
    ///
    /// Returns whether an image was added.
    ///
    /// # Errors
    ///
    /// Returns an error if the product cannot be saved.
    pub fn add_image(&mut self, url: &str) -> Result<bool, EditorError> {
        let url = url.trim();
        if url.is_empty() {
            return Ok(false);
        }
        let mut next = self.product.clone();
        next.images.push(url.to_string());
        self.commit_product(next)?;
        Ok(true)
    }

    /// Remove the image at `index`, shifting later images left.
    ///
    /// Returns whether an image was removed; an out-of-range index is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the product cannot be saved.
    pub fn remove_image(&mut self, index: usize) -> Result<bool, EditorError> {
        if index >= self.product.images.len() {
            return Ok(false);
        }
        let mut next = self.product.clone();
        next.images.remove(index);
        self.commit_product(next)?;
        Ok(true)
    }

    /// Choose which benefit the title/description handlers edit.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::BenefitOutOfRange`] if `index` does not name
    /// one of the displayed benefits.
    pub fn select_benefit(&mut self, index: usize) -> Result<(), EditorError> {
        let available = self.editable_benefits();
        if index >= available {
            return Err(EditorError::BenefitOutOfRange { index, available });
        }
        self.current_benefit_index = index;
        Ok(())
    }

    /// Replace the selected benefit's title.
    ///
    /// Returns `false` without saving when the product has no benefits list.
    ///
    /// # Errors
    ///
    /// Returns an error if the product cannot be saved.
    pub fn set_benefit_title(&mut self, value: impl Into<String>) -> Result<bool, EditorError> {
        let value = value.into();
        self.update_selected_benefit(|benefit| benefit.title = value)
    }

    /// Replace the selected benefit's description.
    ///
    /// Returns `false` without saving when the product has no benefits list.
    ///
    /// # Errors
    ///
    /// Returns an error if the product cannot be saved.
    pub fn set_benefit_description(
        &mut self,
        value: impl Into<String>,
    ) -> Result<bool, EditorError> {
        let value = value.into();
        self.update_selected_benefit(|benefit| benefit.description = value)
    }

    fn update_selected_benefit(
        &mut self,
        edit: impl FnOnce(&mut Benefit),
    ) -> Result<bool, EditorError> {
        let index = self.current_benefit_index;
        let Some(mut benefits) = self.product.benefits_list.clone() else {
            tracing::debug!("No benefits list to edit");
            return Ok(false);
        };
        let Some(benefit) = benefits.get_mut(index) else {
            return Ok(false);
        };
        edit(benefit);

        let next = ProductData {
            benefits_list: Some(benefits),
            ..self.product.clone()
        };
        self.commit_product(next)?;
        Ok(true)
    }

    fn editable_benefits(&self) -> usize {
        self.product
            .benefits_list
            .as_ref()
            .map_or(0, |list| list.len().min(MAX_BENEFITS))
    }

    fn clamp_benefit_index(&mut self) {
        let available = self.editable_benefits();
        if self.current_benefit_index >= available {
            self.current_benefit_index = 0;
        }
    }

    fn commit_product(&mut self, next: ProductData) -> Result<(), EditorError> {
        self.repository.save_product(&next)?;
        self.product = next;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Theme
    // -------------------------------------------------------------------------

    /// Set one theme color to a raw value.
    ///
    /// # Errors
    ///
    /// Returns an error if the theme cannot be saved.
    pub fn set_theme_color(
        &mut self,
        field: ThemeField,
        value: impl Into<String>,
    ) -> Result<(), EditorError> {
        let next = self.theme.with_color(field, value);
        self.commit_theme(next)
    }

    /// Set primary, secondary and text colors at once.
    ///
    /// # Errors
    ///
    /// Returns an error if the theme cannot be saved.
    pub fn apply_complete_theme(
        &mut self,
        primary: impl Into<String>,
        secondary: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<(), EditorError> {
        let next = self.theme.with_complete_theme(primary, secondary, text);
        self.commit_theme(next)
    }

    /// Apply a named color scheme; text is forced to white.
    ///
    /// # Errors
    ///
    /// Returns an error if the scheme is unknown or the theme cannot be saved.
    pub fn apply_color_scheme(&mut self, name: &str) -> Result<(), EditorError> {
        let scheme = find_color_scheme(name).ok_or_else(|| EditorError::UnknownPreset {
            kind: "color scheme",
            name: name.to_string(),
        })?;
        self.apply_complete_theme(scheme.primary, scheme.secondary, WHITE)
    }

    /// Apply a named accent color.
    ///
    /// # Errors
    ///
    /// Returns an error if the accent is unknown or the theme cannot be saved.
    pub fn apply_accent(&mut self, name: &str) -> Result<(), EditorError> {
        let color = find_accent(name).ok_or_else(|| EditorError::UnknownPreset {
            kind: "accent",
            name: name.to_string(),
        })?;
        self.set_theme_color(ThemeField::Accent, color.value)
    }

    /// Apply a named text color.
    ///
    /// # Errors
    ///
    /// Returns an error if the color is unknown or the theme cannot be saved.
    pub fn apply_text_color(&mut self, name: &str) -> Result<(), EditorError> {
        let color = find_text_color(name).ok_or_else(|| EditorError::UnknownPreset {
            kind: "text color",
            name: name.to_string(),
        })?;
        self.set_theme_color(ThemeField::Text, color.value)
    }

    fn commit_theme(&mut self, next: ThemeSettings) -> Result<(), EditorError> {
        self.repository.save_theme(&next)?;
        self.theme = next;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Settings
    // -------------------------------------------------------------------------

    /// Pretty-printed export of the stored records.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn export(&self) -> Result<String, EditorError> {
        self.repository
            .export()
            .to_pretty_json()
            .map_err(|e| EditorError::Content(ContentError::Serialization(e)))
    }

    /// Import a document, replacing each record it contains both in the
    /// store and in the editor.
    ///
    /// # Errors
    ///
    /// Returns an error and changes nothing if the document is rejected. If
    /// a save fails part way, the editor re-reads whatever the store holds.
    pub fn import(&mut self, raw: &str) -> Result<ImportOutcome, EditorError> {
        let outcome = match self.repository.import(raw) {
            Ok(outcome) => outcome,
            Err(err @ ImportError::Content(_)) => {
                self.reload();
                return Err(err.into());
            }
            Err(err) => return Err(err.into()),
        };
        if let Some(product) = &outcome.product_data {
            self.product = product.clone();
            self.clamp_benefit_index();
        }
        if let Some(theme) = &outcome.theme_settings {
            self.theme = theme.clone();
        }
        Ok(outcome)
    }

    /// Overwrite both records with the defaults once confirmed.
    ///
    /// Returns whether defaults were restored.
    ///
    /// # Errors
    ///
    /// Returns an error if either record cannot be saved; the editor then
    /// re-reads whatever the store holds.
    pub fn restore_defaults(&mut self, confirmation: Confirmation) -> Result<bool, EditorError> {
        if confirmation == Confirmation::Declined {
            return Ok(false);
        }
        let (product, theme) = match self.repository.restore_defaults() {
            Ok(records) => records,
            Err(err) => {
                self.reload();
                return Err(err.into());
            }
        };
        self.product = product;
        self.theme = theme;
        self.current_benefit_index = 0;
        Ok(true)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use showroom_content::{
        ContentChange, KeyValueStore, MemoryStore, Origin, StorageError, keys,
    };
    use showroom_core::ContactInfo;

    use super::*;

    /// Memory store whose theme writes always fail.
    #[derive(Default)]
    struct ThemeWritesFail(MemoryStore);

    impl KeyValueStore for ThemeWritesFail {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<Option<String>, StorageError> {
            if key == keys::THEME {
                return Err(StorageError::Poisoned);
            }
            self.0.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.remove(key)
        }

        fn keys(&self) -> Result<Vec<String>, StorageError> {
            self.0.keys()
        }
    }

    fn failing_theme_editor() -> AdminEditor {
        AdminEditor::open(ContentRepository::new(
            Origin::new(ThemeWritesFail::default()).open_page(),
        ))
    }

    fn editor() -> AdminEditor {
        AdminEditor::open(ContentRepository::new(
            Origin::new(MemoryStore::new()).open_page(),
        ))
    }

    fn editor_with_images(images: &[&str]) -> AdminEditor {
        let mut editor = editor();
        let next = ProductData {
            images: images.iter().map(ToString::to_string).collect(),
            ..editor.product().clone()
        };
        editor.commit_product(next).unwrap();
        editor
    }

    #[test]
    fn test_opens_with_defaults_without_writing() {
        let editor = editor();
        assert_eq!(editor.product(), &ProductData::default());
        assert_eq!(editor.theme(), &ThemeSettings::default());
        assert_eq!(editor.active_tab(), EditorTab::Images);
        assert!(editor.repository().storage().keys().unwrap().is_empty());
    }

    #[test]
    fn test_tab_switch_has_no_storage_effect() {
        let mut editor = editor();
        editor.select_tab(EditorTab::Theme);
        assert_eq!(editor.active_tab(), EditorTab::Theme);
        assert!(editor.repository().storage().keys().unwrap().is_empty());
    }

    #[test]
    fn test_field_edit_commits_immediately() {
        let mut editor = editor();
        editor
            .set_product_field(ProductField::Title, "Poltrona")
            .unwrap();
        assert_eq!(editor.repository().load_product().title, "Poltrona");
        assert_eq!(editor.product().title, "Poltrona");
    }

    #[test]
    fn test_add_image_appends_trimmed() {
        let mut editor = editor_with_images(&["a", "b"]);
        assert!(editor.add_image("  c  ").unwrap());
        assert_eq!(editor.product().images, ["a", "b", "c"]);
        assert_eq!(editor.repository().load_product().images, ["a", "b", "c"]);
    }

    #[test]
    fn test_add_blank_image_is_ignored() {
        let mut editor = editor_with_images(&["a", "b"]);
        assert!(!editor.add_image("").unwrap());
        assert!(!editor.add_image("   ").unwrap());
        assert_eq!(editor.product().images, ["a", "b"]);
    }

    #[test]
    fn test_remove_image_shifts_left() {
        let mut editor = editor_with_images(&["a", "b", "c"]);
        assert!(editor.remove_image(0).unwrap());
        assert_eq!(editor.product().images, ["b", "c"]);
        assert!(!editor.remove_image(5).unwrap());
        assert_eq!(editor.repository().load_product().images, ["b", "c"]);
    }

    #[test]
    fn test_benefit_edit_is_isolated() {
        let mut editor = editor();
        let before = editor.product().benefits_list.clone().unwrap();

        editor.select_benefit(1).unwrap();
        assert!(editor.set_benefit_title("Frete Expresso").unwrap());

        let after = editor.repository().load_product().benefits_list.unwrap();
        assert_eq!(after[1].title, "Frete Expresso");
        assert_eq!(after[1].description, before[1].description);
        assert_eq!(after[0], before[0]);
        assert_eq!(after[2], before[2]);
        assert_eq!(after[3], before[3]);
    }

    #[test]
    fn test_select_benefit_out_of_range() {
        let mut editor = editor();
        assert!(matches!(
            editor.select_benefit(MAX_BENEFITS),
            Err(EditorError::BenefitOutOfRange { .. })
        ));
        assert_eq!(editor.current_benefit_index(), 0);
    }

    #[test]
    fn test_benefit_edit_without_list_is_noop() {
        let mut editor = editor();
        let next = ProductData {
            benefits_list: None,
            ..editor.product().clone()
        };
        editor.commit_product(next).unwrap();

        assert!(!editor.set_benefit_description("x").unwrap());
        assert_eq!(editor.product().benefits_list, None);
    }

    #[test]
    fn test_contact_edit_materializes_contact_info() {
        let mut editor = editor();
        let next = ProductData {
            contact_info: None,
            ..editor.product().clone()
        };
        editor.commit_product(next).unwrap();

        editor
            .set_contact_field(ContactField::Phone, "(11) 1234-5678")
            .unwrap();
        assert_eq!(
            editor.repository().load_product().contact_info,
            Some(ContactInfo {
                phone: "(11) 1234-5678".to_string(),
                ..ContactInfo::default()
            })
        );
    }

    #[test]
    fn test_apply_complete_theme() {
        let mut editor = editor();
        editor.set_theme_color(ThemeField::Accent, "#f43f5e").unwrap();
        editor
            .set_theme_color(ThemeField::Background, "#fafafa")
            .unwrap();

        editor
            .apply_complete_theme("#7e22ce", "#581c87", "#ffffff")
            .unwrap();

        let theme = editor.repository().load_theme();
        assert_eq!(theme.primary_color, "#7e22ce");
        assert_eq!(theme.secondary_color, "#581c87");
        assert_eq!(theme.text_color, "#ffffff");
        assert_eq!(theme.accent_color, "#f43f5e");
        assert_eq!(theme.background_color, "#fafafa");
    }

    #[test]
    fn test_color_scheme_forces_white_text() {
        let mut editor = editor();
        editor.apply_text_color("black").unwrap();
        editor.apply_color_scheme("green").unwrap();

        assert_eq!(editor.theme().primary_color, "#15803d");
        assert_eq!(editor.theme().secondary_color, "#14532d");
        assert_eq!(editor.theme().text_color, WHITE);
    }

    #[test]
    fn test_accent_and_text_presets_touch_one_field() {
        let mut editor = editor();
        editor.apply_accent("sky").unwrap();
        editor.apply_text_color("darkGray").unwrap();

        let expected = ThemeSettings {
            accent_color: "#0ea5e9".to_string(),
            text_color: "#111827".to_string(),
            ..ThemeSettings::default()
        };
        assert_eq!(editor.theme(), &expected);
    }

    #[test]
    fn test_unknown_preset_changes_nothing() {
        let mut editor = editor();
        assert!(matches!(
            editor.apply_accent("chartreuse"),
            Err(EditorError::UnknownPreset { .. })
        ));
        assert!(editor.repository().storage().get(keys::THEME).unwrap().is_none());
    }

    #[test]
    fn test_theme_edit_notifies_once() {
        let mut editor = editor();
        let mut sub = editor.repository().notifier().subscribe();

        editor.set_theme_color(ThemeField::Primary, "red").unwrap();

        assert!(matches!(
            sub.try_next(),
            Some(Ok(ContentChange::Theme(t))) if t.primary_color == "red"
        ));
        assert!(sub.try_next().is_none());
    }

    #[test]
    fn test_import_updates_editor_copies() {
        let mut editor = editor();
        editor.select_benefit(3).unwrap();
        let product = ProductData {
            benefits_list: None,
            ..ProductData::default().with_field(ProductField::Title, "Cadeira")
        };
        let raw = serde_json::json!({ "productData": &product }).to_string();

        let outcome = editor.import(&raw).unwrap();

        assert_eq!(outcome.keys(), ["productData"]);
        assert_eq!(editor.product(), &product);
        assert_eq!(editor.current_benefit_index(), 0);
        assert_eq!(editor.theme(), &ThemeSettings::default());
    }

    #[test]
    fn test_malformed_import_changes_nothing() {
        let mut editor = editor();
        editor.set_product_field(ProductField::Price, "R$ 1,00").unwrap();

        assert!(editor.import(r#"{"productData": {"title": 3}}"#).is_err());
        assert_eq!(editor.product().price, "R$ 1,00");
        assert_eq!(editor.repository().load_product().price, "R$ 1,00");
    }

    #[test]
    fn test_export_round_trips_through_import() {
        let mut source = editor();
        source.apply_color_scheme("teal").unwrap();
        source.set_product_field(ProductField::Title, "Rack").unwrap();
        let exported = source.export().unwrap();

        let mut target = editor();
        target.import(&exported).unwrap();

        assert_eq!(target.product(), source.product());
        assert_eq!(target.theme(), source.theme());
    }

    #[test]
    fn test_restore_defaults_requires_confirmation() {
        let mut editor = editor();
        editor.set_product_field(ProductField::Title, "Rack").unwrap();

        assert!(!editor.restore_defaults(Confirmation::Declined).unwrap());
        assert_eq!(editor.product().title, "Rack");

        assert!(editor.restore_defaults(Confirmation::Confirmed).unwrap());
        assert_eq!(editor.product(), &ProductData::default());
        assert_eq!(editor.repository().load_product(), ProductData::default());
        assert_eq!(editor.repository().load_theme(), ThemeSettings::default());
    }

    #[test]
    fn test_apply_command() {
        let mut editor = editor();
        editor
            .apply(EditCommand::AddImage {
                url: "https://example.com/sofa.jpg".to_string(),
            })
            .unwrap();
        editor.apply(EditCommand::TogglePreview).unwrap();

        assert_eq!(
            editor.product().images.last().map(String::as_str),
            Some("https://example.com/sofa.jpg")
        );
        assert!(editor.preview_mode());
    }

    #[test]
    fn test_import_failing_part_way_matches_store() {
        let mut editor = failing_theme_editor();
        let product = ProductData::default().with_field(ProductField::Title, "Importado");
        let raw = serde_json::json!({
            "productData": &product,
            "themeSettings": ThemeSettings::default().with_color(ThemeField::Primary, "#000000"),
        })
        .to_string();

        let err = editor.import(&raw).unwrap_err();

        assert!(matches!(err, EditorError::Import(ImportError::Content(_))));
        assert_eq!(editor.product(), &product);
        assert_eq!(editor.product(), &editor.repository().load_product());
        assert_eq!(editor.theme(), &ThemeSettings::default());
    }

    #[test]
    fn test_restore_failing_part_way_matches_store() {
        let mut editor = failing_theme_editor();
        editor.set_product_field(ProductField::Title, "Mesa").unwrap();

        assert!(editor.restore_defaults(Confirmation::Confirmed).is_err());

        assert_eq!(editor.product(), &ProductData::default());
        assert_eq!(editor.product(), &editor.repository().load_product());
    }
}
