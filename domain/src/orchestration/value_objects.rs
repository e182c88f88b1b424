//! Orchestration value objects - the request a run starts from and the
//! result it produces.
//!
//! - [`OrchestrationRequest`] - prompt, topology and ordered agent list
//! - [`Step`] - one user-facing record per invocation (plus display separators)
//! - [`OrchestrationResult`] - summary, steps and the audit trail of the run

use crate::core::agent::AgentId;
use crate::core::error::DomainError;
use crate::ledger::value_objects::LedgerEntry;
use crate::orchestration::topology::Topology;
use serde::{Deserialize, Serialize};

/// Kind of a user-facing step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Output of one agent invocation
    #[default]
    Response,
    /// Display grouping marker; carries no response and is never hashed
    Separator,
    /// The anchor agent's final answer in the Star topology
    Synthesis,
}

/// One user-facing record of a single invocation's output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub label: String,
    pub response_text: String,
    #[serde(default)]
    pub kind: StepKind,
}

impl Step {
    pub fn response(label: impl Into<String>, response_text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            response_text: response_text.into(),
            kind: StepKind::Response,
        }
    }

    pub fn separator(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            response_text: String::new(),
            kind: StepKind::Separator,
        }
    }

    pub fn synthesis(label: impl Into<String>, response_text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            response_text: response_text.into(),
            kind: StepKind::Synthesis,
        }
    }

    pub fn is_separator(&self) -> bool {
        self.kind == StepKind::Separator
    }
}

/// Incoming orchestration request
///
/// Accepts both the snake_case field names and the older
/// `originalPrompt` / `models` spellings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrchestrationRequest {
    #[serde(alias = "originalPrompt")]
    pub original_prompt: String,
    #[serde(default)]
    pub topology: Topology,
    #[serde(alias = "models")]
    pub agents: Vec<AgentId>,
}

impl OrchestrationRequest {
    pub fn new(original_prompt: impl Into<String>, topology: Topology, agents: Vec<AgentId>) -> Self {
        Self {
            original_prompt: original_prompt.into(),
            topology,
            agents,
        }
    }

    /// Reject requests that cannot be run.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.agents.is_empty() {
            return Err(DomainError::NoAgents);
        }
        Ok(())
    }
}

/// Aggregated outcome of one orchestration run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrchestrationResult {
    pub summary: String,
    pub steps: Vec<Step>,
    /// Every ledger entry written during the run. For topologies with several
    /// ledgers the entries are grouped per ledger, in arm order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ledger: Vec<LedgerEntry>,
}

impl OrchestrationResult {
    pub fn new(summary: impl Into<String>, steps: Vec<Step>, ledger: Vec<LedgerEntry>) -> Self {
        Self {
            summary: summary.into(),
            steps,
            ledger,
        }
    }

    /// Steps that carry a response (everything but separators).
    pub fn response_steps(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter().filter(|s| !s.is_separator())
    }

    /// The Star synthesis step, if the run produced one.
    pub fn synthesis(&self) -> Option<&Step> {
        self.steps.iter().find(|s| s.kind == StepKind::Synthesis)
    }
}
