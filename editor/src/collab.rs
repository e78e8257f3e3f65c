//! Wire contracts with the external collaborators.
//!
//! The editor never performs I/O itself. A host uploads files, calls the
//! rendering service and downloads archives, then feeds results back through
//! `EditorCore`. These types pin down the JSON shapes exchanged on those
//! calls, and `decode_response` maps a raw status/body pair onto them.

#[cfg(test)]
#[path = "collab_test.rs"]
mod collab_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CollaboratorError;
use crate::export::BoxConfig;

/// One data row: column name to opaque scalar value.
pub type Row = serde_json::Map<String, Value>;

/// Response of the template ingestion endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateUpload {
    /// Identifier the rendering service uses to find the template again.
    pub filename: String,
    /// Displayable URL of the stored template.
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Everything `EditorCore::load_template` needs to establish a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSource {
    /// Template identifier sent back to the rendering service at export.
    pub reference: String,
    pub image_url: String,
    /// Decoded pixel width of the original image.
    pub width: u32,
    /// Decoded pixel height of the original image.
    pub height: u32,
}

impl TemplateSource {
    /// Pair an upload response with the dimensions decoded from the image.
    #[must_use]
    pub fn from_upload(upload: TemplateUpload, width: u32, height: u32) -> Self {
        Self { reference: upload.filename, image_url: upload.image_url, width, height }
    }
}

/// Response of the tabular data ingestion endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSet {
    pub columns: Vec<String>,
    /// Leading rows, used for live box previews.
    #[serde(default)]
    pub preview: Vec<Row>,
    /// Every row, sent to the rendering service at export.
    #[serde(default)]
    pub all_data: Vec<Row>,
    #[serde(default)]
    pub total_rows: usize,
}

impl DataSet {
    /// Build a data set from already-parsed rows.
    ///
    /// Columns are collected in first-seen order across all rows.
    #[must_use]
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for row in &rows {
            for key in row.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }
        let preview = rows.iter().take(crate::consts::PREVIEW_ROW_LIMIT).cloned().collect();
        Self { columns, preview, total_rows: rows.len(), all_data: rows }
    }

    /// Whether any row is available for previews.
    #[must_use]
    pub fn has_rows(&self) -> bool {
        !self.preview.is_empty() || !self.all_data.is_empty()
    }

    /// First-row value for `column`, as preview text.
    #[must_use]
    pub fn example_value(&self, column: &str) -> Option<String> {
        let first = self.preview.first().or_else(|| self.all_data.first())?;
        first.get(column).and_then(value_text)
    }

    /// The rows handed to the rendering service: every row when known,
    /// otherwise the preview rows.
    #[must_use]
    pub fn export_rows(&self) -> &[Row] {
        if self.all_data.is_empty() { &self.preview } else { &self.all_data }
    }
}

/// Render a scalar cell value as text. Null and empty strings yield none.
#[must_use]
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Request body for preview generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewRequest {
    /// Template identifier from `TemplateUpload::filename`.
    pub template: String,
    pub csv_data: Vec<Row>,
    pub text_boxes: Vec<BoxConfig>,
}

/// Response of preview generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewResponse {
    pub preview_urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Request body for bundling previews into an archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadRequest {
    pub preview_urls: Vec<String>,
}

/// Error envelope used by every collaborator endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Best-effort human message from an error response body.
#[must_use]
pub fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) if body.trim().is_empty() => "request failed".to_owned(),
        Err(_) => body.trim().to_owned(),
    }
}

/// Map a raw collaborator response onto `T`.
///
/// # Errors
///
/// Non-2xx statuses become [`CollaboratorError::Status`] carrying the
/// service's error message; undecodable bodies become
/// [`CollaboratorError::Malformed`].
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, CollaboratorError> {
    if !(200..300).contains(&status) {
        return Err(CollaboratorError::Status { status, message: error_message(body) });
    }
    serde_json::from_str(body).map_err(|e| CollaboratorError::Malformed(e.to_string()))
}
