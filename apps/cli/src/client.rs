//! HTTP client for the analysis endpoint.

use std::path::{Path, PathBuf};

use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use thiserror::Error;

use crate::report::FeedbackReport;

/// Multipart field name the endpoint expects the file under.
const RESUME_FIELD: &str = "resume";

/// Fallback when the server replies with an error status but no usable body.
const GENERIC_SERVER_ERROR: &str = "Something went wrong.";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Please select a PDF file.")]
    NoFileSelected,

    #[error("Could not read {}: {source}", path.display())]
    File {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Network error or server not reachable.")]
    Transport(#[source] reqwest::Error),

    /// Error message reported by the server, or the generic fallback.
    #[error("{0}")]
    Server(String),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Validates the file selection before any network activity.
/// `None` fails locally — no request is ever issued for it.
pub fn select_file(file: Option<PathBuf>) -> Result<PathBuf, ClientError> {
    file.ok_or(ClientError::NoFileSelected)
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Submits the file to the analyze endpoint. Exactly one HTTP call per
    /// invocation; no retries.
    pub async fn analyze(&self, file: &Path) -> Result<FeedbackReport, ClientError> {
        let bytes = tokio::fs::read(file).await.map_err(|source| ClientError::File {
            path: file.to_path_buf(),
            source,
        })?;

        let filename = file
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("resume.pdf")
            .to_string();

        let part = Part::bytes(bytes)
            .file_name(filename)
            .mime_str("application/pdf")
            .map_err(ClientError::Transport)?;
        let form = Form::new().part(RESUME_FIELD, part);

        let response = self
            .http
            .post(format!("{}/analyze", self.base_url))
            .multipart(form)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        if response.status().is_success() {
            response
                .json::<FeedbackReport>()
                .await
                .map_err(ClientError::Transport)
        } else {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| GENERIC_SERVER_ERROR.to_string());
            Err(ClientError::Server(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_file_requires_a_file() {
        let err = select_file(None).unwrap_err();
        assert!(matches!(err, ClientError::NoFileSelected));
        assert_eq!(err.to_string(), "Please select a PDF file.");
    }

    #[test]
    fn test_select_file_passes_selection_through() {
        let path = select_file(Some(PathBuf::from("resume.pdf"))).unwrap();
        assert_eq!(path, PathBuf::from("resume.pdf"));
    }
}
