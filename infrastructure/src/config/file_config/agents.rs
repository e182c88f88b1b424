//! Agent table from TOML (`[agents.<id>]` sections)

use maire_domain::Backend;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Binding of one agent id to a backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileAgentConfig {
    pub backend: Backend,
    /// Backend model override for this agent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl FileAgentConfig {
    pub fn new(backend: Backend) -> Self {
        Self {
            backend,
            model: None,
        }
    }
}

/// Built-in agent table.
///
/// Agents that are not listed here (or in a config file) answer from the
/// local stub.
pub fn default_agents() -> BTreeMap<String, FileAgentConfig> {
    [
        ("grok", Backend::OpenRouter),
        ("llama", Backend::OpenRouter),
        ("claude", Backend::HuggingFace),
        ("mistral", Backend::HuggingFace),
        ("gpt", Backend::Gemini),
        ("gpt-4", Backend::Gemini),
        ("gemini", Backend::Gemini),
    ]
    .into_iter()
    .map(|(id, backend)| (id.to_string(), FileAgentConfig::new(backend)))
    .collect()
}
