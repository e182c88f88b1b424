//! Backend value object

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize};

/// Backends an agent can be bound to (Value Object)
///
/// This is a closed set: an agent is bound to exactly one variant when the
/// configuration is loaded. Deserialization goes through [`FromStr`], so
/// names are matched case-insensitively.
///
/// [`FromStr`]: std::str::FromStr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// OpenRouter chat completions
    OpenRouter,
    /// Hugging Face inference API
    HuggingFace,
    /// Google Gemini generateContent
    Gemini,
    /// Deterministic local echo, no network
    Stub,
}

impl Backend {
    pub const ALL: [Backend; 4] = [
        Backend::OpenRouter,
        Backend::HuggingFace,
        Backend::Gemini,
        Backend::Stub,
    ];

    /// Get the string identifier for this backend
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::OpenRouter => "openrouter",
            Backend::HuggingFace => "huggingface",
            Backend::Gemini => "gemini",
            Backend::Stub => "stub",
        }
    }

    /// Whether calls to this backend go over the network
    pub fn is_remote(&self) -> bool {
        !matches!(self, Backend::Stub)
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Backend {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openrouter" => Ok(Backend::OpenRouter),
            "huggingface" => Ok(Backend::HuggingFace),
            "gemini" => Ok(Backend::Gemini),
            "stub" => Ok(Backend::Stub),
            other => Err(DomainError::UnknownBackend(other.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Backend {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
