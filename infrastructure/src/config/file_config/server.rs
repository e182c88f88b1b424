//! Server and stub settings from TOML (`[server]`, `[stub]` sections)

use serde::{Deserialize, Serialize};

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Socket address to listen on.
    pub bind: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
        }
    }
}

/// Local stub settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStubConfig {
    /// Simulated latency of every stub answer, in milliseconds.
    pub latency_ms: u64,
}

impl Default for FileStubConfig {
    fn default() -> Self {
        Self {
            latency_ms: 180,
        }
    }
}
