//! Hugging Face inference API adapter

use super::{BackendAdapter, BackendError, ensure_success, http_client};
use crate::config::FileBackendConfig;
use async_trait::async_trait;
use maire_domain::Backend;
use serde::{Deserialize, Serialize};

const MAX_NEW_TOKENS: u32 = 512;

pub struct HuggingFaceAdapter {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    api_key_env: String,
    model: String,
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters,
}

#[derive(Serialize)]
struct InferenceParameters {
    max_new_tokens: u32,
    return_full_text: bool,
}

#[derive(Deserialize)]
struct Generated {
    generated_text: String,
}

impl HuggingFaceAdapter {
    pub fn from_config(config: &FileBackendConfig) -> Result<Self, BackendError> {
        Ok(Self {
            client: http_client(config.timeout_seconds)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.resolve_api_key(),
            api_key_env: config.api_key_env.clone(),
            model: config.model.clone(),
        })
    }
}

/// Extract the generated text from a 2xx body.
///
/// Bodies that are not a non-empty `[{"generated_text": ...}]` array are
/// returned verbatim.
fn parse_generated(body: String) -> String {
    match serde_json::from_str::<Vec<Generated>>(&body) {
        Ok(items) if !items.is_empty() => items
            .into_iter()
            .next()
            .map(|g| g.generated_text)
            .unwrap_or_default(),
        _ => body,
    }
}

#[async_trait]
impl BackendAdapter for HuggingFaceAdapter {
    fn backend(&self) -> Backend {
        Backend::HuggingFace
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn complete(&self, model: Option<&str>, prompt: &str) -> Result<String, BackendError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| BackendError::MissingCredential(self.api_key_env.clone()))?;

        let request = InferenceRequest {
            inputs: prompt,
            parameters: InferenceParameters {
                max_new_tokens: MAX_NEW_TOKENS,
                return_full_text: false,
            },
        };

        let url = format!("{}/{}", self.base_url, model.unwrap_or(&self.model));
        let response = self
            .client
            .post(url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;
        // 503 while the model is loading lands here too
        let response = ensure_success(response).await?;

        Ok(parse_generated(response.text().await?))
    }
}
