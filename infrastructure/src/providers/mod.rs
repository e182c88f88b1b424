//! Backend adapters
//!
//! Each remote backend is an Anti-Corruption Layer around one HTTP API. The
//! [`BackendInvoker`](routing::BackendInvoker) binds agents to adapters and
//! turns every [`BackendError`] into a fallback response.

pub mod gemini;
pub mod huggingface;
pub mod openrouter;
pub mod routing;
pub mod stub;

use async_trait::async_trait;
use maire_domain::Backend;
use std::time::Duration;
use thiserror::Error;

/// Errors raised by a remote backend call
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("missing credential: set {0}")]
    MissingCredential(String),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to parse response: {0}")]
    Parse(String),
}

/// A remote completion API
#[async_trait]
pub trait BackendAdapter: Send + Sync {
    fn backend(&self) -> Backend;

    /// Whether a credential is present.
    fn is_configured(&self) -> bool;

    /// Send `prompt` and return the generated text.
    ///
    /// `model` overrides the adapter's default model.
    async fn complete(&self, model: Option<&str>, prompt: &str) -> Result<String, BackendError>;
}

pub(crate) fn http_client(timeout_seconds: u64) -> Result<reqwest::Client, BackendError> {
    Ok(reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .build()?)
}

/// Pass 2xx responses through, turn anything else into [`BackendError::Status`].
pub(crate) async fn ensure_success(
    response: reqwest::Response,
) -> Result<reqwest::Response, BackendError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(BackendError::Status {
        status: status.as_u16(),
        body,
    })
}
