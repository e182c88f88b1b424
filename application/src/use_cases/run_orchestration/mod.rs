//! Run Orchestration use case
//!
//! Validates a request, dispatches it to the selected topology strategy
//! and returns the aggregated steps.
//!
//! Every strategy is built from the same cycle: snapshot the ledger, invoke
//! the agent with a prompt that starts with that snapshot, append the
//! response to the ledger, emit a [`Step`](maire_domain::Step).

mod chain;
mod helix;
mod star;

#[cfg(test)]
mod mock;

use crate::config::OrchestrationConfig;
use crate::ports::agent_invoker::{AgentInvoker, Invocation};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use maire_domain::{
    AgentId, Direction, DomainError, Ledger, LedgerEntry, OrchestrationRequest,
    OrchestrationResult, Provenance, Topology,
};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinError;
use tracing::{debug, info, warn};

/// Errors that can occur during an orchestration run
#[derive(Error, Debug)]
pub enum RunOrchestrationError {
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] DomainError),

    #[error("Strategy task failed: {0}")]
    TaskFailed(String),
}

impl RunOrchestrationError {
    /// Check if the caller's input was at fault
    pub fn is_input_error(&self) -> bool {
        matches!(self, RunOrchestrationError::InvalidRequest(e) if e.is_input_error())
    }
}

impl From<JoinError> for RunOrchestrationError {
    fn from(e: JoinError) -> Self {
        RunOrchestrationError::TaskFailed(e.to_string())
    }
}

/// Use case for running one orchestration request
pub struct RunOrchestrationUseCase<I: AgentInvoker + 'static> {
    invoker: Arc<I>,
    config: OrchestrationConfig,
}

impl<I: AgentInvoker + 'static> RunOrchestrationUseCase<I> {
    pub fn new(invoker: Arc<I>) -> Self {
        Self {
            invoker,
            config: OrchestrationConfig::default(),
        }
    }

    pub fn with_config(mut self, config: OrchestrationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn invoker(&self) -> &Arc<I> {
        &self.invoker
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        request: OrchestrationRequest,
    ) -> Result<OrchestrationResult, RunOrchestrationError> {
        self.execute_with_progress(request, Arc::new(NoProgress))
            .await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        request: OrchestrationRequest,
        progress: Arc<dyn ProgressNotifier>,
    ) -> Result<OrchestrationResult, RunOrchestrationError> {
        request.validate()?;

        let topology = request.topology;
        let n = request.agents.len();
        info!("Starting {} with {} agents", topology.display_name(), n);
        progress.on_topology_start(topology, Self::total_steps(topology, n));

        // Every strategy runs behind one join boundary, so a panicking
        // invoker surfaces as `TaskFailed` for all topologies.
        let invoker = Arc::clone(&self.invoker);
        let config = self.config.clone();
        let strategy_progress = Arc::clone(&progress);
        let OrchestrationRequest {
            original_prompt,
            agents,
            ..
        } = request;

        let strategy = tokio::spawn(async move {
            match topology {
                Topology::Chain => Ok(chain::run(
                    invoker.as_ref(),
                    &original_prompt,
                    &agents,
                    strategy_progress.as_ref(),
                )
                .await),
                Topology::Helix => {
                    helix::run(
                        invoker,
                        &original_prompt,
                        &agents,
                        config.helix_scheduling,
                        strategy_progress,
                    )
                    .await
                }
                Topology::Star => {
                    star::run(invoker, &original_prompt, &agents, &config, strategy_progress).await
                }
            }
        });
        let result = strategy.await??;

        progress.on_topology_complete(topology);
        info!(
            "{} finished: {} steps, {} ledger entries",
            topology.display_name(),
            result.steps.len(),
            result.ledger.len()
        );
        Ok(result)
    }

    /// Number of invocations a topology makes for `n` agents.
    pub fn total_steps(topology: Topology, n: usize) -> usize {
        match topology {
            Topology::Chain => n,
            Topology::Helix => 2 * n,
            Topology::Star => n * n + 1,
        }
    }
}

/// Invoke `agent`, append the response to `ledger` and report progress.
#[allow(clippy::too_many_arguments)]
async fn record_step<I: AgentInvoker + ?Sized>(
    invoker: &I,
    ledger: &Ledger,
    direction: Direction,
    step_index: usize,
    agent: &AgentId,
    prompt: &str,
    label: &str,
    progress: &dyn ProgressNotifier,
) -> Invocation {
    let invocation = invoker.invoke(agent, prompt).await;
    let entry = ledger.append(
        direction,
        step_index,
        agent,
        &invocation.text,
        invocation.provenance,
    );

    debug!(
        agent = %agent,
        direction = %direction,
        index = step_index,
        hash = %entry.content_hash,
        "Recorded step"
    );
    if invocation.provenance != Provenance::Succeeded {
        warn!("Agent {} answered with fallback ({})", agent, invocation.provenance);
    }

    progress.on_step_complete(label, invocation.provenance);
    invocation
}

/// Take the ledger back from its writers once they have all joined.
fn finish_ledger(ledger: Arc<Ledger>) -> Vec<LedgerEntry> {
    match Arc::try_unwrap(ledger) {
        Ok(ledger) => ledger.into_entries(),
        Err(shared) => shared.entries(),
    }
}
