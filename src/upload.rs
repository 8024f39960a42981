use std::path::PathBuf;

use futures::future::BoxFuture;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use url::Url;

use crate::config::Config;
use crate::event::DocumentFile;

/// Why an upload did not produce a download url.
///
/// The UI collapses all of these into one generic failure; the variants
/// exist for logs.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid upload endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded with status {status}")]
    Status { status: u16, body: String },
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Sends a document somewhere and resolves to its download url.
pub trait Uploader: Send + Sync {
    fn upload(&self, file: DocumentFile) -> BoxFuture<'static, Result<String, UploadError>>;
}

/// HTTP client for the grammar-check service's upload endpoint.
#[derive(Debug, Clone)]
pub struct UploadClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl UploadClient {
    pub fn new(config: &Config) -> Result<Self, UploadError> {
        let endpoint = config.upload_endpoint()?;
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            endpoint,
        })
    }

    /// POST the document as `multipart/form-data` with a single `file` part.
    pub async fn send(&self, file: &DocumentFile) -> Result<String, UploadError> {
        let bytes = tokio::fs::read(file.path())
            .await
            .map_err(|source| UploadError::Read {
                path: file.path().to_path_buf(),
                source,
            })?;
        let part = Part::bytes(bytes)
            .file_name(file.file_name())
            .mime_str(file.mime_type())?;
        let form = Form::new().part("file", part);

        let response = self
            .http
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(UploadError::Status {
                status: status.as_u16(),
                body,
            });
        }
        parse_response(&body)
    }
}

impl Uploader for UploadClient {
    fn upload(&self, file: DocumentFile) -> BoxFuture<'static, Result<String, UploadError>> {
        let client = self.clone();
        Box::pin(async move { client.send(&file).await })
    }
}

#[derive(Deserialize)]
struct UploadResponse {
    url: String,
}

/// Extract the download url from a success body (`{"url": "..."}`).
pub fn parse_response(body: &str) -> Result<String, UploadError> {
    let response: UploadResponse = serde_json::from_str(body)
        .map_err(|e| UploadError::MalformedResponse(e.to_string()))?;
    if response.url.trim().is_empty() {
        return Err(UploadError::MalformedResponse("empty url".to_string()));
    }
    Ok(response.url)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parse_url_field() {
        assert_eq!(
            parse_response(r#"{"url":"http://x/y.docx"}"#).unwrap(),
            "http://x/y.docx"
        );
    }

    #[test]
    fn extra_fields_are_ignored() {
        let body = r#"{"url":"http://x/y.docx","errors":3,"took_ms":120}"#;
        assert_eq!(parse_response(body).unwrap(), "http://x/y.docx");
    }

    #[test]
    fn missing_url_is_malformed() {
        let err = parse_response(r#"{"link":"http://x"}"#).unwrap_err();
        assert!(matches!(err, UploadError::MalformedResponse(_)), "{err}");
    }

    #[test]
    fn non_string_url_is_malformed() {
        let err = parse_response(r#"{"url":42}"#).unwrap_err();
        assert!(matches!(err, UploadError::MalformedResponse(_)), "{err}");
    }

    #[test]
    fn empty_url_is_malformed() {
        let err = parse_response(r#"{"url":"  "}"#).unwrap_err();
        assert!(err.to_string().contains("empty url"), "{err}");
    }

    #[test]
    fn html_body_is_malformed() {
        let err = parse_response("<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, UploadError::MalformedResponse(_)), "{err}");
    }

    #[test]
    fn invalid_server_url_is_rejected() {
        let config = Config {
            server_url: "not a url".into(),
            ..Config::default()
        };
        let err = UploadClient::new(&config).unwrap_err();
        assert!(matches!(err, UploadError::Endpoint(_)), "{err}");
    }

    #[tokio::test]
    async fn missing_file_fails_before_request() {
        let dir = tempfile::tempdir().unwrap();
        let client = UploadClient::new(&Config::default()).unwrap();
        let file = DocumentFile::new(dir.path().join("nope.docx"));
        let err = client.send(&file).await.unwrap_err();
        assert!(matches!(err, UploadError::Read { .. }), "{err}");
        assert!(err.to_string().contains("nope.docx"));
    }
}
