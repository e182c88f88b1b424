//! Orchestration parameters — topology strategy control.
//!
//! [`OrchestrationConfig`] groups the choices that change how a topology
//! schedules its invocations without changing which invocations happen.
//!
//! | Knob | Default | Alternative |
//! |------|---------|-------------|
//! | `helix_scheduling` | `concurrent` | `serialized` (forward pass, then reverse pass) |
//! | `star_ledger` | `per_arm` | `shared` (one audit ledger across all arms) |
//! | `star_arm_mode` | `relay` | `static` (every step sees the original prompt) |
//! | `star_separators` | `false` | `true` (one empty separator step before each arm) |

use maire_domain::AgentId;
use serde::{Deserialize, Serialize};

/// How the two Helix passes are scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HelixScheduling {
    /// Both passes run as concurrent tasks; ledger order follows completion order
    #[default]
    Concurrent,
    /// Forward pass completes before the reverse pass starts
    Serialized,
}

/// Which ledger the Star arms write to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StarLedgerScope {
    /// Each arm owns a private ledger
    #[default]
    PerArm,
    /// All arms append to one ledger under its lock
    Shared,
}

/// What a Star arm step receives as input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StarArmMode {
    /// Each step receives the previous agent's response
    #[default]
    Relay,
    /// Each step receives the original prompt
    Static,
}

/// Topology strategy parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrchestrationConfig {
    pub helix_scheduling: HelixScheduling,
    pub star_ledger: StarLedgerScope,
    pub star_arm_mode: StarArmMode,
    /// Emit an empty separator step before each Star arm
    pub star_separators: bool,
    /// Agent that synthesizes the Star result; defaults to the first requested agent
    pub anchor: Option<AgentId>,
}

impl OrchestrationConfig {
    // ==================== Builder Methods ====================

    pub fn with_helix_scheduling(mut self, scheduling: HelixScheduling) -> Self {
        self.helix_scheduling = scheduling;
        self
    }

    pub fn with_star_ledger(mut self, scope: StarLedgerScope) -> Self {
        self.star_ledger = scope;
        self
    }

    pub fn with_star_arm_mode(mut self, mode: StarArmMode) -> Self {
        self.star_arm_mode = mode;
        self
    }

    pub fn with_star_separators(mut self, enabled: bool) -> Self {
        self.star_separators = enabled;
        self
    }

    pub fn with_anchor(mut self, anchor: AgentId) -> Self {
        self.anchor = Some(anchor);
        self
    }
}
