//! Ledger value objects - immutable records of individual invocations.

use crate::core::agent::AgentId;
use serde::{Deserialize, Serialize};

/// Which writer produced a ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Chain steps and the Helix forward pass
    Forward,
    /// Helix reverse pass
    Reverse,
    /// Star arm steps
    Star,
}

impl Direction {
    /// Single-letter marker used in the rendered snapshot
    pub fn marker(&self) -> &'static str {
        match self {
            Direction::Forward => "F",
            Direction::Reverse => "R",
            Direction::Star => "S",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.marker())
    }
}

/// Where the recorded content came from
///
/// Invocations never abort a run, so a fallback text is hashed and chained
/// like any other response. Provenance keeps the two apart for auditing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// A real backend answered
    Succeeded,
    /// No backend was reachable for the agent, the local stub answered
    FellBack,
    /// A backend was called and failed, the local stub answered instead
    Failed,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::Succeeded => "succeeded",
            Provenance::FellBack => "fell_back",
            Provenance::Failed => "failed",
        }
    }
}

impl std::fmt::Display for Provenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One appended record. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub direction: Direction,
    pub step_index: usize,
    pub agent: AgentId,
    /// 12-hex-char SHA-256 prefix of the recorded content
    pub content_hash: String,
    /// RFC 3339 UTC timestamp taken at append time
    pub timestamp: String,
    pub provenance: Provenance,
}

impl LedgerEntry {
    /// Render the entry as one snapshot line (without the trailing newline).
    ///
    /// Provenance is intentionally absent: the line format is part of every
    /// prompt and must stay stable.
    pub fn render_line(&self) -> String {
        format!(
            "{}{} | {} | {} | {}",
            self.direction.marker(),
            self.step_index,
            self.agent,
            self.content_hash,
            self.timestamp
        )
    }
}
