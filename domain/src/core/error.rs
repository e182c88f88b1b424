//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("No agents given for orchestration")]
    NoAgents,

    #[error("Invalid agent: {0}")]
    InvalidAgent(String),

    #[error("Unknown backend: {0}")]
    UnknownBackend(String),
}

impl DomainError {
    /// Check if this error was caused by the caller's input
    pub fn is_input_error(&self) -> bool {
        matches!(self, DomainError::NoAgents | DomainError::InvalidAgent(_))
    }
}
