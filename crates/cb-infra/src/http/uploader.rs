//! HTTP uploader adapter.
//!
//! Default [`UploaderPort`] implementation: text goes up as JSON, images as
//! multipart form-data with the generated filename. Performs exactly one
//! transport call per request; retry policy lives with the caller.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use log::{debug, error};
use reqwest::multipart;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use cb_core::ports::UploaderPort;
use cb_core::{ErrorKind, MimeType, UploadOutcome, UploadRequest};

type UploadResult<T> = std::result::Result<T, UploadError>;

#[derive(Debug, Clone)]
pub struct HttpUploaderConfig {
    /// Base URL of the content service.
    pub endpoint: String,
    /// Token attached as a bearer Authorization header, if any. Obtaining
    /// and refreshing it is the host's concern.
    pub bearer_token: Option<String>,
    pub timeout: Duration,
}

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("request timed out")]
    Timeout,
    #[error("authentication failed: {0}")]
    Authentication(String),
    #[error("permission denied: {0}")]
    Permission(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected status: {0}")]
    UnexpectedStatus(StatusCode),
}

impl From<reqwest::Error> for UploadError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            UploadError::Timeout
        } else if let Some(status) = error.status() {
            map_status_code(status)
        } else {
            UploadError::Network(error.to_string())
        }
    }
}

fn map_status_code(code: StatusCode) -> UploadError {
    match code {
        StatusCode::UNAUTHORIZED => UploadError::Authentication("unauthorized".to_string()),
        StatusCode::FORBIDDEN => UploadError::Permission("forbidden".to_string()),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => UploadError::Timeout,
        _ if code.is_server_error() => UploadError::Network(format!("server error: {}", code)),
        _ => UploadError::UnexpectedStatus(code),
    }
}

/// Acknowledgement body returned by the content service.
#[derive(Debug, Deserialize)]
struct AckResponse {
    result: Option<bool>,
}

pub struct HttpUploader {
    client: reqwest::Client,
    endpoint: String,
    bearer_token: Option<String>,
}

impl HttpUploader {
    pub fn new(config: HttpUploaderConfig) -> UploadResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| UploadError::Network(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            bearer_token: config.bearer_token,
        })
    }

    async fn send_text(&self, content: String) -> UploadResult<bool> {
        let url = format!("{}/contents/text", self.endpoint);
        debug!("uploading text to {}", url);
        let mut request = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "content": content }));
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        read_ack(response).await
    }

    async fn send_image(
        &self,
        bytes: Bytes,
        mime_type: MimeType,
        filename: String,
    ) -> UploadResult<bool> {
        let url = format!("{}/contents/image", self.endpoint);
        debug!("uploading image to {} as {}", url, filename);
        let part = multipart::Part::bytes(bytes.to_vec())
            .file_name(filename)
            .mime_str(&mime_type.0)
            .map_err(|e| UploadError::Network(format!("invalid MIME type: {}", e)))?;
        let form = multipart::Form::new().part("image", part);
        let mut request = self.client.post(&url).multipart(form);
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        read_ack(response).await
    }
}

/// Maps the response to the server acknowledgement. A 2xx with a missing or
/// malformed body counts as unacknowledged, not as an error.
async fn read_ack(response: reqwest::Response) -> UploadResult<bool> {
    let status = response.status();
    if !status.is_success() {
        return Err(map_status_code(status));
    }
    let ack = response
        .json::<AckResponse>()
        .await
        .map(|body| body.result.unwrap_or(false))
        .unwrap_or(false);
    Ok(ack)
}

#[async_trait]
impl UploaderPort for HttpUploader {
    async fn send(&self, request: UploadRequest) -> UploadOutcome {
        let result = match request {
            UploadRequest::Text { content } => self.send_text(content).await,
            UploadRequest::Image {
                bytes,
                mime_type,
                filename,
            } => self.send_image(bytes, mime_type, filename).await,
        };
        match result {
            Ok(server_ack) => UploadOutcome::success(server_ack),
            Err(err) => {
                error!("upload failed: {}", err);
                UploadOutcome::failure(ErrorKind::Transport, err.to_string())
            }
        }
    }
}
