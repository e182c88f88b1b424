//! Wire shape of an orchestration result (HTTP body and `--output json`)

use maire_domain::{LedgerEntry, OrchestrationResult, Step, StepKind};
use serde::Serialize;

/// One step as reported to clients
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepReport {
    pub label: String,
    pub response_text: String,
    pub kind: StepKind,
}

impl From<Step> for StepReport {
    fn from(step: Step) -> Self {
        Self {
            label: step.label,
            response_text: step.response_text,
            kind: step.kind,
        }
    }
}

/// Summary, steps and (optionally) the ledger entries of a run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub summary: String,
    pub steps: Vec<StepReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ledger: Option<Vec<LedgerEntry>>,
}

impl RunReport {
    pub fn new(result: OrchestrationResult, include_ledger: bool) -> Self {
        Self {
            summary: result.summary,
            steps: result.steps.into_iter().map(StepReport::from).collect(),
            ledger: include_ledger.then_some(result.ledger),
        }
    }
}
