//! OpenRouter chat completions adapter

use super::{BackendAdapter, BackendError, ensure_success, http_client};
use crate::config::FileBackendConfig;
use async_trait::async_trait;
use maire_domain::Backend;
use serde::{Deserialize, Serialize};

const REFERER: &str = "http://localhost:5173";
const TITLE: &str = "MAIRE";

pub struct OpenRouterAdapter {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    api_key_env: String,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    content: String,
}

impl OpenRouterAdapter {
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
impl BackendAdapter for OpenRouterAdapter {
    fn backend(&self) -> Backend {
        Backend::OpenRouter
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn complete(&self, model: Option<&str>, prompt: &str) -> Result<String, BackendError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| BackendError::MissingCredential(self.api_key_env.clone()))?;

        let request = ChatRequest {
            model: model.unwrap_or(&self.model),
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .header("HTTP-Referer", REFERER)
            .header("X-Title", TITLE)
            .json(&request)
            .send()
            .await?;
        let response = ensure_success(response).await?;

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| BackendError::Parse(e.to_string()))?;
        body.choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| BackendError::Parse("no choices in response".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter(base_url: &str, api_key: Option<&str>) -> OpenRouterAdapter {
        let mut config = FileBackendConfig::defaults_for(Backend::OpenRouter);
        config.base_url = base_url.to_string();
        config.api_key = api_key.map(String::from);
        config.api_key_env = "MAIRE_TEST_UNSET_OPENROUTER".to_string();
        OpenRouterAdapter::from_config(&config).unwrap()
    }

    #[tokio::test]
    async fn test_complete_reads_first_choice() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer key")
            .match_header("x-title", "MAIRE")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "model": "meta-llama/llama-3.1-8b-instruct",
                "messages": [{"role": "user", "content": "hi"}]
            })))
            .with_status(200)
            .with_body(r#"{"choices":[{"message":{"content":"hello"}}]}"#)
            .create_async()
            .await;

        let text = adapter(&server.url(), Some("key"))
            .complete(None, "hi")
            .await
            .unwrap();
        assert_eq!(text, "hello");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_model_override() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_body(mockito::Matcher::PartialJson(
                serde_json::json!({"model": "x-ai/grok-2"}),
            ))
            .with_body(r#"{"choices":[{"message":{"content":"ok"}}]}"#)
            .create_async()
            .await;

        adapter(&server.url(), Some("key"))
            .complete(Some("x-ai/grok-2"), "hi")
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(429)
            .with_body("slow down")
            .create_async()
            .await;

        let err = adapter(&server.url(), Some("key"))
            .complete(None, "hi")
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::Status { status: 429, .. }));
    }

    #[tokio::test]
    async fn test_empty_choices_is_parse_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_body(r#"{"choices":[]}"#)
            .create_async()
            .await;

        let err = adapter(&server.url(), Some("key"))
            .complete(None, "hi")
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::Parse(_)));
    }

    #[tokio::test]
    async fn test_missing_key() {
        let adapter = adapter("http://127.0.0.1:9", None);
        assert!(!adapter.is_configured());
        let err = adapter.complete(None, "hi").await.unwrap_err();
        assert!(matches!(err, BackendError::MissingCredential(_)));
    }
}
