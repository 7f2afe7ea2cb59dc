//! Content commands: show, export, import and reset.

use std::io::Write;
use std::path::Path;

use showroom_admin::{AdminEditor, Confirmation, IMPORT_SUCCESS_NOTICE};
use showroom_core::ThemeField;

use super::{CommandError, open_repository};

/// Write a short summary of the stored content.
///
/// # Errors
///
/// Returns an error if the store cannot be opened or `out` cannot be written.
pub fn show(data: &Path, out: &mut impl Write) -> Result<(), CommandError> {
    let repository = open_repository(data)?;
    let product = repository.load_product();
    let theme = repository.load_theme();
    let io = |source| CommandError::Io {
        path: data.to_path_buf(),
        source,
    };

    writeln!(out, "Product: {} ({})", product.title, product.price).map_err(io)?;
    writeln!(out, "Hero:    {}", product.hero_title_or_title()).map_err(io)?;
    writeln!(out, "Images:  {}", product.images.len()).map_err(io)?;
    writeln!(
        out,
        "Benefits: {}",
        product.benefits_list.as_ref().map_or(0, Vec::len)
    )
    .map_err(io)?;
    for field in ThemeField::ALL {
        writeln!(out, "{:<20} {}", field.css_variable(), theme.get(field)).map_err(io)?;
    }
    writeln!(out, "Admin session: {}", repository.load_session()).map_err(io)?;
    Ok(())
}

/// Export both records, to `output` or to `out` when no file is given.
///
/// # Errors
///
/// Returns an error if the store cannot be opened or the document cannot
/// be written.
pub fn export(data: &Path, output: Option<&Path>, out: &mut impl Write) -> Result<(), CommandError> {
    let editor = AdminEditor::open(open_repository(data)?);
    let document = editor.export()?;

    match output {
        Some(path) => {
            std::fs::write(path, document).map_err(|source| CommandError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::info!(path = %path.display(), "Content exported");
        }
        None => writeln!(out, "{document}").map_err(|source| CommandError::Io {
            path: data.to_path_buf(),
            source,
        })?,
    }
    Ok(())
}

/// Import the records present in `input`.
///
/// Returns the success notice.
///
/// # Errors
///
/// Returns an error and changes nothing if the document is rejected.
pub fn import(data: &Path, input: &Path) -> Result<&'static str, CommandError> {
    let raw = std::fs::read_to_string(input).map_err(|source| CommandError::Io {
        path: input.to_path_buf(),
        source,
    })?;
    let mut editor = AdminEditor::open(open_repository(data)?);
    let outcome = editor.import(&raw)?;
    tracing::info!(keys = ?outcome.keys(), "Import applied");
    Ok(IMPORT_SUCCESS_NOTICE)
}

/// Overwrite both records with the defaults.
///
/// # Errors
///
/// Returns [`CommandError::ConfirmationRequired`] unless `confirmed`.
pub fn reset(data: &Path, confirmed: bool) -> Result<(), CommandError> {
    let mut editor = AdminEditor::open(open_repository(data)?);
    if editor.restore_defaults(Confirmation::from(confirmed))? {
        Ok(())
    } else {
        Err(CommandError::ConfirmationRequired)
    }
}
