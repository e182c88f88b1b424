//! Agent invocation port
//!
//! Defines how strategies reach agents. Implementations resolve each agent
//! to a backend and absorb every failure into a fallback response.

use async_trait::async_trait;
use maire_domain::{AgentId, Backend, Provenance};
use serde::Serialize;

/// Result of invoking an agent
///
/// `text` is always usable as a response. `provenance` records whether it
/// came from a real backend or from the local fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub provenance: Provenance,
    pub text: String,
}

impl Invocation {
    pub fn succeeded(text: impl Into<String>) -> Self {
        Self {
            provenance: Provenance::Succeeded,
            text: text.into(),
        }
    }

    pub fn fell_back(text: impl Into<String>) -> Self {
        Self {
            provenance: Provenance::FellBack,
            text: text.into(),
        }
    }

    pub fn failed(text: impl Into<String>) -> Self {
        Self {
            provenance: Provenance::Failed,
            text: text.into(),
        }
    }
}

/// Whether an agent can currently reach its backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentAvailability {
    pub id: AgentId,
    pub backend: Backend,
    pub available: bool,
}

/// Capability to invoke agents
///
/// `invoke` is total: it never returns an error and never panics on backend
/// failure. Implementations live in the infrastructure layer.
#[async_trait]
pub trait AgentInvoker: Send + Sync {
    /// Send `prompt` to `agent` and return its response or a fallback.
    async fn invoke(&self, agent: &AgentId, prompt: &str) -> Invocation;

    /// Configured agents and whether each one has the credentials it needs.
    fn available_agents(&self) -> Vec<AgentAvailability>;
}
