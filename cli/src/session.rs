//! End-to-end editing sessions driven from the command line.
//!
//! Each session owns one `EditorCore` and feeds it exactly the calls a
//! browser host would make: validate a selection, await the collaborator,
//! report the result back.

use std::path::Path;

use editor::collab::{DataSet, TemplateSource};
use editor::engine::EditorCore;
use editor::error::EditorError;
use editor::export::BoxConfig;

use crate::CliError;
use crate::files::template_dimensions;
use crate::layout::{self, LayoutFile};
use crate::service::{LocalFile, RenderService};

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Lay out boxes over a local template and return their export configs,
/// without contacting the rendering service.
///
/// # Errors
///
/// Template decode failures, invalid layouts, or editor rejections.
pub fn export(template: &LocalFile, data: DataSet, layout: &LayoutFile) -> Result<Vec<BoxConfig>, CliError> {
    let (width, height) = template_dimensions(&template.bytes).map_err(EditorError::from)?;
    let source = TemplateSource {
        reference: template.name.clone(),
        image_url: template.name.clone(),
        width,
        height,
    };

    let mut core = EditorCore::new();
    core.load_template(&source)?;
    core.load_data(data);
    layout::place(&mut core, layout)?;
    Ok(core.export_configs()?)
}

/// Upload inputs, lay out boxes, render previews and fetch the archive.
///
/// # Errors
///
/// Validation, decode or collaborator failures at any step.
pub async fn render(
    service: &dyn RenderService,
    template: &LocalFile,
    data: &LocalFile,
    layout: &LayoutFile,
) -> Result<Vec<u8>, CliError> {
    let mut core = EditorCore::new();

    core.begin_template_upload(Some(&template.selection()))?;
    let uploaded = match template_dimensions(&template.bytes) {
        Ok((width, height)) => service
            .upload_template(template)
            .await
            .map(|upload| TemplateSource::from_upload(upload, width, height))
            .map_err(EditorError::from),
        Err(e) => Err(e.into()),
    };
    core.finish_template_upload(uploaded)?;

    core.begin_data_upload(Some(&data.selection()))?;
    let rows = service.upload_data(data).await;
    core.finish_data_upload(rows)?;

    let placed = layout::place(&mut core, layout)?;
    tracing::info!(boxes = placed.len(), "layout placed");

    let request = core.begin_preview()?;
    let rendered = service.preview(&request).await;
    core.finish_preview(rendered)?;
    tracing::info!(previews = core.previews().len(), "previews rendered");

    let request = core.begin_download()?;
    let archive = service.download(&request).await;
    Ok(core.finish_download(archive)?)
}

/// Write the archive, creating parent directories as needed.
///
/// # Errors
///
/// [`CliError::Io`] naming `path`.
pub async fn write_archive(path: &Path, archive: &[u8]) -> Result<(), CliError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(|source| CliError::Io { path: parent.to_path_buf(), source })?;
    }
    tokio::fs::write(path, archive).await.map_err(|source| CliError::Io { path: path.to_path_buf(), source })?;
    tracing::info!(path = %path.display(), bytes = archive.len(), "archive written");
    Ok(())
}
