//! Error taxonomy for editor operations.
//!
//! Out-of-bounds geometry is deliberately absent: `doc::BoxStore` resolves it
//! by clamping, so no caller can ever observe it.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::controls::Control;

/// The template image could not be used to establish a display frame.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoadError {
    /// The image bytes could not be decoded.
    #[error("failed to decode template image: {0}")]
    Decode(String),

    /// The decoded image has a zero or non-finite dimension.
    #[error("template image has unusable dimensions {width}x{height}")]
    EmptyImage { width: u32, height: u32 },
}

/// A user action was rejected before it touched any state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Box creation was attempted before any data rows were loaded.
    #[error("please upload data before adding boxes")]
    NoData,

    /// An upload was submitted without a file.
    #[error("please select a file to upload")]
    NoFileSelected,

    /// A template upload was submitted with a non-image file.
    #[error("please select a valid image file (JPEG, PNG, etc.), got {mime}")]
    NotAnImage { mime: String },

    /// A data upload was submitted with an unsupported file extension.
    #[error("unsupported file `{name}`; please upload a CSV or Excel file")]
    UnsupportedExtension { name: String },

    /// Preview was requested before template, data and boxes were all present.
    #[error("please complete all steps before previewing images")]
    Incomplete,

    /// Export was requested without a loaded template.
    #[error("no template loaded")]
    NoTemplate,

    /// Download was requested before any previews were generated.
    #[error("no preview images available to download")]
    NoPreviews,

    /// The triggering control is disabled while its request is in flight.
    #[error("{0:?} is already in progress")]
    Busy(Control),
}

/// An external collaborator call failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollaboratorError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),

    /// The collaborator answered with a non-success status.
    #[error("service returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body did not match the expected contract.
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Umbrella error returned by fallible `EditorCore` entry points.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EditorError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),
}
