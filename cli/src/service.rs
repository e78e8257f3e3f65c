//! The remote rendering collaborator, abstracted for testing.

use editor::collab::{DataSet, DownloadRequest, PreviewRequest, TemplateUpload};
use editor::error::CollaboratorError;

/// A file read from disk, ready to upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    pub name: String,
    /// Guessed from the file extension; `None` when unknown.
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

/// Upload, preview and download endpoints of the rendering service.
#[async_trait::async_trait]
pub trait RenderService: Send + Sync {
    /// Store a template image; the response names it for later requests.
    async fn upload_template(&self, file: &LocalFile) -> Result<TemplateUpload, CollaboratorError>;

    /// Parse a CSV/Excel file into rows.
    async fn upload_data(&self, file: &LocalFile) -> Result<DataSet, CollaboratorError>;

    /// Render one image per row; returns the preview references.
    async fn preview(&self, request: &PreviewRequest) -> Result<Vec<String>, CollaboratorError>;

    /// Bundle previews into a zip archive.
    async fn download(&self, request: &DownloadRequest) -> Result<Vec<u8>, CollaboratorError>;
}
