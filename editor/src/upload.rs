//! Client-side checks on file selections before an upload is submitted.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use crate::error::ValidationError;

/// Extensions accepted by the tabular data collaborator.
pub const DATA_EXTENSIONS: [&str; 3] = ["csv", "xlsx", "xls"];

/// A file picked for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSelection {
    pub name: String,
    /// MIME type as sniffed by the host, if known.
    pub mime: Option<String>,
}

impl FileSelection {
    #[must_use]
    pub fn new(name: impl Into<String>, mime: Option<String>) -> Self {
        Self { name: name.into(), mime }
    }

    /// Lowercased extension without the dot.
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        let (_, ext) = self.name.rsplit_once('.')?;
        Some(ext.to_ascii_lowercase())
    }
}

/// Check a template selection: a file must be present and sniffed as `image/*`.
///
/// # Errors
///
/// [`ValidationError::NoFileSelected`] or [`ValidationError::NotAnImage`].
pub fn check_template(selection: Option<&FileSelection>) -> Result<&FileSelection, ValidationError> {
    let selection = present(selection)?;
    let mime = selection.mime.as_deref().unwrap_or_default();
    if !mime.starts_with("image/") {
        return Err(ValidationError::NotAnImage { mime: mime.to_owned() });
    }
    Ok(selection)
}

/// Check a data selection: a file must be present with a CSV or Excel extension.
///
/// # Errors
///
/// [`ValidationError::NoFileSelected`] or [`ValidationError::UnsupportedExtension`].
pub fn check_data(selection: Option<&FileSelection>) -> Result<&FileSelection, ValidationError> {
    let selection = present(selection)?;
    let supported = selection
        .extension()
        .is_some_and(|ext| DATA_EXTENSIONS.contains(&ext.as_str()));
    if !supported {
        return Err(ValidationError::UnsupportedExtension { name: selection.name.clone() });
    }
    Ok(selection)
}

fn present(selection: Option<&FileSelection>) -> Result<&FileSelection, ValidationError> {
    match selection {
        Some(s) if !s.name.trim().is_empty() => Ok(s),
        _ => Err(ValidationError::NoFileSelected),
    }
}
