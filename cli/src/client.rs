//! HTTP client for the rendering service.
//!
//! Thin `reqwest` wrapper over the four service endpoints. Status and body
//! mapping lives in pure `parse_*` functions for testability.

use editor::collab::{
    DataSet, DownloadRequest, PreviewRequest, PreviewResponse, TemplateUpload, decode_response, error_message,
};
use editor::error::CollaboratorError;
use reqwest::multipart::{Form, Part};

use crate::CliError;
use crate::config::ServiceConfig;
use crate::service::{LocalFile, RenderService};

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

const UPLOAD_TEMPLATE_PATH: &str = "/upload_template";
const UPLOAD_DATA_PATH: &str = "/upload_csv";
const PREVIEW_PATH: &str = "/preview_combined_images";
const DOWNLOAD_PATH: &str = "/download_previews";

const TEMPLATE_FIELD: &str = "template";
const DATA_FIELD: &str = "csv";

// =============================================================================
// CLIENT
// =============================================================================

pub struct HttpRenderService {
    http: reqwest::Client,
    config: ServiceConfig,
}

impl HttpRenderService {
    /// Build a client with the configured timeouts.
    ///
    /// # Errors
    ///
    /// [`CliError::HttpClientBuild`] if the TLS backend cannot initialize.
    pub fn new(config: ServiceConfig) -> Result<Self, CliError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeouts.request())
            .connect_timeout(config.timeouts.connect())
            .build()
            .map_err(|e| CliError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config })
    }

    async fn upload(&self, path: &str, field: &'static str, file: &LocalFile) -> Result<(u16, String), CollaboratorError> {
        let mut part = Part::bytes(file.bytes.clone()).file_name(file.name.clone());
        if let Some(mime) = &file.mime {
            part = part.mime_str(mime).map_err(network)?;
        }
        let response = self
            .http
            .post(self.config.url(path))
            .multipart(Form::new().part(field, part))
            .send()
            .await
            .map_err(network)?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(network)?;
        Ok((status, text))
    }
}

#[async_trait::async_trait]
impl RenderService for HttpRenderService {
    async fn upload_template(&self, file: &LocalFile) -> Result<TemplateUpload, CollaboratorError> {
        let (status, body) = self.upload(UPLOAD_TEMPLATE_PATH, TEMPLATE_FIELD, file).await?;
        parse_template_upload(status, &body)
    }

    async fn upload_data(&self, file: &LocalFile) -> Result<DataSet, CollaboratorError> {
        let (status, body) = self.upload(UPLOAD_DATA_PATH, DATA_FIELD, file).await?;
        parse_data_upload(status, &body)
    }

    async fn preview(&self, request: &PreviewRequest) -> Result<Vec<String>, CollaboratorError> {
        let response = self
            .http
            .post(self.config.url(PREVIEW_PATH))
            .json(request)
            .send()
            .await
            .map_err(network)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(network)?;
        parse_preview(status, &body)
    }

    async fn download(&self, request: &DownloadRequest) -> Result<Vec<u8>, CollaboratorError> {
        let response = self
            .http
            .post(self.config.url(DOWNLOAD_PATH))
            .json(request)
            .send()
            .await
            .map_err(network)?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(network)?;
        parse_download(status, &bytes)
    }
}

fn network(e: reqwest::Error) -> CollaboratorError {
    CollaboratorError::Network(e.to_string())
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_template_upload(status: u16, body: &str) -> Result<TemplateUpload, CollaboratorError> {
    decode_response(status, body)
}

fn parse_data_upload(status: u16, body: &str) -> Result<DataSet, CollaboratorError> {
    let data: DataSet = decode_response(status, body)?;
    if data.columns.is_empty() {
        return Err(CollaboratorError::Malformed("data set has no columns".to_owned()));
    }
    Ok(data)
}

fn parse_preview(status: u16, body: &str) -> Result<Vec<String>, CollaboratorError> {
    let response: PreviewResponse = decode_response(status, body)?;
    Ok(response.preview_urls)
}

fn parse_download(status: u16, body: &[u8]) -> Result<Vec<u8>, CollaboratorError> {
    if !(200..300).contains(&status) {
        let text = String::from_utf8_lossy(body);
        return Err(CollaboratorError::Status { status, message: error_message(&text) });
    }
    if body.is_empty() {
        return Err(CollaboratorError::Malformed("empty archive".to_owned()));
    }
    Ok(body.to_vec())
}
