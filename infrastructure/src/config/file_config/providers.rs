//! Backend configuration from TOML (`[backends]` section)

use maire_domain::Backend;
use serde::{Deserialize, Serialize};

/// Settings for one remote backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Direct API key (not recommended — use env var instead).
    pub api_key: Option<String>,
    /// Base URL of the API, without a trailing slash.
    pub base_url: String,
    /// Model used when an agent does not name one.
    pub model: String,
    /// Per-call timeout in seconds.
    pub timeout_seconds: u64,
}

impl FileBackendConfig {
    /// Defaults for `backend`.
    ///
    /// The stub backend has no remote settings; it gets empty values.
    pub fn defaults_for(backend: Backend) -> Self {
        let (api_key_env, base_url, model, timeout_seconds) = match backend {
            Backend::OpenRouter => (
                "OPENROUTER_API_KEY",
                "https://openrouter.ai/api/v1",
                "meta-llama/llama-3.1-8b-instruct",
                45,
            ),
            Backend::HuggingFace => (
                "HF_API_KEY",
                "https://api-inference.huggingface.co/models",
                "mistralai/Mixtral-8x7B-Instruct-v0.1",
                60,
            ),
            Backend::Gemini => (
                "GOOGLE_API_KEY",
                "https://generativelanguage.googleapis.com/v1beta/models",
                "gemini-1.5-flash",
                45,
            ),
            Backend::Stub => ("", "", "", 1),
        };
        Self {
            api_key_env: api_key_env.to_string(),
            api_key: None,
            base_url: base_url.to_string(),
            model: model.to_string(),
            timeout_seconds,
        }
    }

    /// Resolve the API key: the direct key wins, then the environment.
    ///
    /// Empty values count as absent.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|k| !k.trim().is_empty())
    }
}

/// Settings for every remote backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendsConfig {
    pub openrouter: FileBackendConfig,
    pub huggingface: FileBackendConfig,
    pub gemini: FileBackendConfig,
}

impl Default for FileBackendsConfig {
    fn default() -> Self {
        Self {
            openrouter: FileBackendConfig::defaults_for(Backend::OpenRouter),
            huggingface: FileBackendConfig::defaults_for(Backend::HuggingFace),
            gemini: FileBackendConfig::defaults_for(Backend::Gemini),
        }
    }
}

impl FileBackendsConfig {
    /// Remote backend settings, or `None` for the stub.
    pub fn get(&self, backend: Backend) -> Option<&FileBackendConfig> {
        match backend {
            Backend::OpenRouter => Some(&self.openrouter),
            Backend::HuggingFace => Some(&self.huggingface),
            Backend::Gemini => Some(&self.gemini),
            Backend::Stub => None,
        }
    }
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self::defaults_for(Backend::Stub)
    }
}
