//! Local file loading: bytes, MIME sniffing and template dimensions.

use std::path::Path;

use editor::collab::{DataSet, Row};
use editor::error::LoadError;
use editor::upload::FileSelection;

use crate::CliError;
use crate::service::LocalFile;

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

/// Read a file and guess its MIME type from the extension.
///
/// # Errors
///
/// [`CliError::Io`] if the file cannot be read.
pub async fn read_local(path: &Path) -> Result<LocalFile, CliError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| CliError::Io { path: path.to_path_buf(), source })?;
    let name = path.file_name().map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
    let mime = mime_guess::from_path(path).first().map(|m| m.essence_str().to_owned());
    tracing::debug!(%name, bytes = bytes.len(), mime = ?mime, "read local file");
    Ok(LocalFile { name, mime, bytes })
}

impl LocalFile {
    /// The name/MIME pair upload validation looks at.
    #[must_use]
    pub fn selection(&self) -> FileSelection {
        FileSelection::new(self.name.clone(), self.mime.clone())
    }
}

/// Decode an image just far enough to learn its pixel dimensions.
///
/// # Errors
///
/// [`LoadError::Decode`] if the bytes are not a supported image.
pub fn template_dimensions(bytes: &[u8]) -> Result<(u32, u32), LoadError> {
    let image = image::load_from_memory(bytes).map_err(|e| LoadError::Decode(e.to_string()))?;
    Ok((image.width(), image.height()))
}

/// Parse a JSON array of row objects into a data set.
///
/// # Errors
///
/// [`CliError::InvalidJson`] on malformed JSON, [`CliError::InvalidRows`]
/// if any element is not an object.
pub fn rows_from_json(path: &Path, bytes: &[u8]) -> Result<DataSet, CliError> {
    let values: Vec<serde_json::Value> =
        serde_json::from_slice(bytes).map_err(|source| CliError::InvalidJson { path: path.to_path_buf(), source })?;
    let rows = values
        .into_iter()
        .map(|value| match value {
            serde_json::Value::Object(row) => Ok(row),
            _ => Err(CliError::InvalidRows),
        })
        .collect::<Result<Vec<Row>, CliError>>()?;
    Ok(DataSet::from_rows(rows))
}
