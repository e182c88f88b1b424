//! Google Gemini `generateContent` adapter

use super::{BackendAdapter, BackendError, ensure_success, http_client};
use crate::config::FileBackendConfig;
use async_trait::async_trait;
use maire_domain::Backend;
use serde::{Deserialize, Serialize};

pub struct GeminiAdapter {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    api_key_env: String,
    model: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: String,
}

impl GeminiAdapter {
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

#[async_trait]
impl BackendAdapter for GeminiAdapter {
    fn backend(&self) -> Backend {
        Backend::Gemini
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn complete(&self, model: Option<&str>, prompt: &str) -> Result<String, BackendError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| BackendError::MissingCredential(self.api_key_env.clone()))?;

        let request = GenerateRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
        };

        let url = format!(
            "{}/{}:generateContent",
            self.base_url,
            model.unwrap_or(&self.model)
        );
        let response = self
            .client
            .post(url)
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await?;
        let response = ensure_success(response).await?;

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| BackendError::Parse(e.to_string()))?;
        body.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| BackendError::Parse("no candidate text in response".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter(base_url: &str) -> GeminiAdapter {
        let mut config = FileBackendConfig::defaults_for(Backend::Gemini);
        config.base_url = base_url.to_string();
        config.api_key = Some("g-key".to_string());
        GeminiAdapter::from_config(&config).unwrap()
    }

    #[tokio::test]
    async fn test_complete_reads_first_part() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/gemini-1.5-flash:generateContent")
            .match_query(mockito::Matcher::UrlEncoded("key".into(), "g-key".into()))
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "contents": [{"parts": [{"text": "hi"}]}]
            })))
            .with_body(r#"{"candidates":[{"content":{"parts":[{"text":"there"}]}}]}"#)
            .create_async()
            .await;

        let text = adapter(&server.url()).complete(None, "hi").await.unwrap();
        assert_eq!(text, "there");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_no_candidates_is_parse_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/gemini-1.5-flash:generateContent")
            .match_query(mockito::Matcher::Any)
            .with_body(r#"{"candidates":[]}"#)
            .create_async()
            .await;

        let err = adapter(&server.url()).complete(None, "hi").await.unwrap_err();
        assert!(matches!(err, BackendError::Parse(_)));
    }

    #[tokio::test]
    async fn test_error_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/gemini-1.5-flash:generateContent")
            .match_query(mockito::Matcher::Any)
            .with_status(400)
            .create_async()
            .await;

        let err = adapter(&server.url()).complete(None, "hi").await.unwrap_err();
        assert!(matches!(err, BackendError::Status { status: 400, .. }));
    }
}
