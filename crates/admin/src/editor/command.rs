//! Serializable edit commands.
//!
//! Each command maps one-to-one onto an [`AdminEditor`] handler so that a
//! remote client drives exactly the same state machine as local code.

use serde::Deserialize;
use showroom_core::{ContactField, ProductField, ThemeField};

use super::{AdminEditor, EditorError, EditorTab};

/// One editor action.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum EditCommand {
    SelectTab { tab: EditorTab },
    TogglePreview,
    SetField { field: ProductField, value: String },
    SetContact { field: ContactField, value: String },
    AddImage { url: String },
    RemoveImage { index: usize },
    SelectBenefit { index: usize },
    SetBenefitTitle { value: String },
    SetBenefitDescription { value: String },
    SetThemeColor { field: ThemeField, value: String },
    ApplyColorScheme { name: String },
    ApplyCompleteTheme {
        primary: String,
        secondary: String,
        text: String,
    },
    ApplyAccent { name: String },
    ApplyTextColor { name: String },
}

impl AdminEditor {
    /// Run a command against this editor.
    ///
    /// # Errors
    ///
    /// Returns whatever error the underlying handler returns.
    pub fn apply(&mut self, command: EditCommand) -> Result<(), EditorError> {
        match command {
            EditCommand::SelectTab { tab } => self.select_tab(tab),
            EditCommand::TogglePreview => {
                self.toggle_preview();
            }
            EditCommand::SetField { field, value } => self.set_product_field(field, value)?,
            EditCommand::SetContact { field, value } => self.set_contact_field(field, value)?,
            EditCommand::AddImage { url } => {
                self.add_image(&url)?;
            }
            EditCommand::RemoveImage { index } => {
                self.remove_image(index)?;
            }
            EditCommand::SelectBenefit { index } => self.select_benefit(index)?,
            EditCommand::SetBenefitTitle { value } => {
                self.set_benefit_title(value)?;
            }
            EditCommand::SetBenefitDescription { value } => {
                self.set_benefit_description(value)?;
            }
            EditCommand::SetThemeColor { field, value } => self.set_theme_color(field, value)?,
            EditCommand::ApplyColorScheme { name } => self.apply_color_scheme(&name)?,
            EditCommand::ApplyCompleteTheme {
                primary,
                secondary,
                text,
            } => self.apply_complete_theme(primary, secondary, text)?,
            EditCommand::ApplyAccent { name } => self.apply_accent(&name)?,
            EditCommand::ApplyTextColor { name } => self.apply_text_color(&name)?,
        }
        Ok(())
    }
}
