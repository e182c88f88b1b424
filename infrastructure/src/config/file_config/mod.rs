//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod agents;
mod providers;
mod server;

pub use agents::{FileAgentConfig, default_agents};
pub use providers::{FileBackendConfig, FileBackendsConfig};
pub use server::{FileServerConfig, FileStubConfig};

use maire_application::OrchestrationConfig;
use maire_domain::{AgentId, Backend};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::net::SocketAddr;
use thiserror::Error;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Topology strategy knobs
    pub orchestration: OrchestrationConfig,
    /// Local stub settings
    pub stub: FileStubConfig,
    /// Remote backend settings
    pub backends: FileBackendsConfig,
    /// Agent id to backend table
    pub agents: BTreeMap<String, FileAgentConfig>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            server: FileServerConfig::default(),
            orchestration: OrchestrationConfig::default(),
            stub: FileStubConfig::default(),
            backends: FileBackendsConfig::default(),
            agents: default_agents(),
        }
    }
}

/// Configuration that cannot be used to start a run or a server
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("server.bind is not a socket address: {0}")]
    InvalidBind(String),

    #[error("agents: invalid agent id {0:?}")]
    InvalidAgentId(String),

    #[error("backends.{backend}.timeout_seconds must be greater than zero")]
    ZeroTimeout { backend: Backend },

    #[error("backends.{backend}.base_url must not be empty")]
    EmptyBaseUrl { backend: Backend },
}

impl FileConfig {
    /// Validate the entire configuration, stopping at the first problem.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.bind_addr()?;

        for id in self.agents.keys() {
            AgentId::new(id.as_str())
                .map_err(|_| ConfigValidationError::InvalidAgentId(id.clone()))?;
        }

        for backend in Backend::ALL {
            let Some(settings) = self.backends.get(backend) else {
                continue;
            };
            if settings.timeout_seconds == 0 {
                return Err(ConfigValidationError::ZeroTimeout { backend });
            }
            if settings.base_url.trim().is_empty() {
                return Err(ConfigValidationError::EmptyBaseUrl { backend });
            }
        }

        Ok(())
    }

    /// Parsed `server.bind`.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigValidationError> {
        self.server
            .bind
            .parse()
            .map_err(|_| ConfigValidationError::InvalidBind(self.server.bind.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maire_application::{HelixScheduling, StarLedgerScope};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[server]
bind = "0.0.0.0:9000"

[orchestration]
helix_scheduling = "serialized"
star_ledger = "shared"
star_separators = true
anchor = "claude"

[stub]
latency_ms = 0

[backends.gemini]
api_key_env = "MY_GEMINI_KEY"
base_url = "http://localhost:1234"
model = "gemini-pro"
timeout_seconds = 5

[agents.grok]
backend = "openrouter"
model = "x-ai/grok-2"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.bind, "0.0.0.0:9000");
        assert_eq!(
            config.orchestration.helix_scheduling,
            HelixScheduling::Serialized
        );
        assert_eq!(config.orchestration.star_ledger, StarLedgerScope::Shared);
        assert!(config.orchestration.star_separators);
        assert_eq!(config.orchestration.anchor.as_ref().unwrap().as_str(), "claude");
        assert_eq!(config.stub.latency_ms, 0);
        assert_eq!(config.backends.gemini.api_key_env, "MY_GEMINI_KEY");
        assert_eq!(config.backends.gemini.timeout_seconds, 5);
        // A table replaces the built-in agents entirely
        assert_eq!(config.agents.len(), 1);
        assert_eq!(config.agents["grok"].model.as_deref(), Some("x-ai/grok-2"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: FileConfig = toml::from_str("[stub]\nlatency_ms = 5\n").unwrap();
        assert_eq!(config.stub.latency_ms, 5);
        assert_eq!(config.server.bind, "127.0.0.1:8080");
        assert!(config.agents.contains_key("gpt-4"));
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bind_addr().unwrap().port(), 8080);
    }

    #[test]
    fn test_validate_rejects_bad_bind() {
        let mut config = FileConfig::default();
        config.server.bind = "not-an-address".to_string();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidBind(
                "not-an-address".to_string()
            ))
        );
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = FileConfig::default();
        config.backends.huggingface.timeout_seconds = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::ZeroTimeout {
                backend: Backend::HuggingFace
            })
        );
    }

    #[test]
    fn test_validate_rejects_blank_agent_id() {
        let mut config = FileConfig::default();
        config
            .agents
            .insert("  ".to_string(), FileAgentConfig::new(Backend::Stub));
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidAgentId(_))
        ));
    }
}
