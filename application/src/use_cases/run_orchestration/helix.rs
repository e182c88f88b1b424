//! Helix topology: a forward and a reverse pass over one shared ledger.
//!
//! Under concurrent scheduling the passes append to the ledger as they
//! finish each call, so the global entry order depends on timing. Each
//! pass's own indices stay ordered. Steps are always returned forward
//! pass first, then reverse pass.

use super::{RunOrchestrationError, finish_ledger, record_step};
use crate::config::HelixScheduling;
use crate::ports::agent_invoker::AgentInvoker;
use crate::ports::progress::ProgressNotifier;
use maire_domain::{
    AgentId, Direction, Ledger, OrchestrationResult, PromptTemplate, Step, reverse_indices,
};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::debug;

pub(super) const SUMMARY: &str = "Double Helix complete";

pub(super) async fn run<I: AgentInvoker + 'static>(
    invoker: Arc<I>,
    original_prompt: &str,
    agents: &[AgentId],
    scheduling: HelixScheduling,
    progress: Arc<dyn ProgressNotifier>,
) -> Result<OrchestrationResult, RunOrchestrationError> {
    let ledger = Arc::new(Ledger::new(original_prompt));

    let (forward, reverse) = match scheduling {
        HelixScheduling::Concurrent => {
            let agents: Arc<[AgentId]> = Arc::from(agents);
            let mut join_set = JoinSet::new();

            for direction in [Direction::Forward, Direction::Reverse] {
                let invoker = Arc::clone(&invoker);
                let ledger = Arc::clone(&ledger);
                let agents = Arc::clone(&agents);
                let progress = Arc::clone(&progress);

                join_set.spawn(async move {
                    let steps = pass(
                        invoker.as_ref(),
                        &ledger,
                        &agents,
                        direction,
                        progress.as_ref(),
                    )
                    .await;
                    (direction, steps)
                });
            }

            let mut forward = Vec::new();
            let mut reverse = Vec::new();
            while let Some(joined) = join_set.join_next().await {
                let (direction, steps) = joined?;
                debug!("Helix {} pass joined", direction);
                match direction {
                    Direction::Reverse => reverse = steps,
                    _ => forward = steps,
                }
            }
            (forward, reverse)
        }
        HelixScheduling::Serialized => {
            let forward = pass(
                invoker.as_ref(),
                &ledger,
                agents,
                Direction::Forward,
                progress.as_ref(),
            )
            .await;
            let reverse = pass(
                invoker.as_ref(),
                &ledger,
                agents,
                Direction::Reverse,
                progress.as_ref(),
            )
            .await;
            (forward, reverse)
        }
    };

    let mut steps = forward;
    steps.extend(reverse);
    Ok(OrchestrationResult::new(SUMMARY, steps, finish_ledger(ledger)))
}

/// One directional sweep over the agents.
async fn pass<I: AgentInvoker + ?Sized>(
    invoker: &I,
    ledger: &Ledger,
    agents: &[AgentId],
    direction: Direction,
    progress: &dyn ProgressNotifier,
) -> Vec<Step> {
    let order: Vec<usize> = match direction {
        Direction::Reverse => reverse_indices(agents.len()).collect(),
        _ => (0..agents.len()).collect(),
    };

    let mut steps = Vec::with_capacity(order.len());
    for i in order {
        let agent = &agents[i];
        let snapshot = ledger.snapshot();
        let (prompt, label) = match direction {
            Direction::Reverse => (
                PromptTemplate::helix_reverse(&snapshot, agent),
                format!("{} (reverse)", agent),
            ),
            _ => (
                PromptTemplate::helix_forward(&snapshot, agent),
                format!("{} (forward)", agent),
            ),
        };

        let invocation =
            record_step(invoker, ledger, direction, i, agent, &prompt, &label, progress).await;
        steps.push(Step::response(label, invocation.text));
    }
    steps
}

#[cfg(test)]
mod tests {
    use super::super::mock::RecordingInvoker;
    use super::*;
    use crate::ports::progress::NoProgress;
    use std::time::Duration;

    fn agents(names: &[&str]) -> Vec<AgentId> {
        names.iter().map(|n| AgentId::new(*n).unwrap()).collect()
    }

    fn indices(result: &OrchestrationResult, direction: Direction) -> Vec<usize> {
        result
            .ledger
            .iter()
            .filter(|e| e.direction == direction)
            .map(|e| e.step_index)
            .collect()
    }

    async fn run_helix(
        invoker: Arc<RecordingInvoker>,
        names: &[&str],
        scheduling: HelixScheduling,
    ) -> OrchestrationResult {
        run(invoker, "X", &agents(names), scheduling, Arc::new(NoProgress))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_helix_entry_counts_and_indices() {
        let invoker = Arc::new(RecordingInvoker::new());
        let result = run_helix(invoker, &["a", "b", "c"], HelixScheduling::Concurrent).await;

        assert_eq!(result.summary, SUMMARY);
        assert_eq!(result.ledger.len(), 6);
        assert_eq!(result.steps.len(), 6);
        assert_eq!(indices(&result, Direction::Forward), vec![0, 1, 2]);
        assert_eq!(indices(&result, Direction::Reverse), vec![2, 1, 0]);
    }

    #[tokio::test]
    async fn test_helix_steps_forward_first() {
        let invoker = Arc::new(RecordingInvoker::new());
        let result = run_helix(invoker, &["a", "b"], HelixScheduling::Concurrent).await;

        let labels: Vec<&str> = result.steps.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["a (forward)", "b (forward)", "b (reverse)", "a (reverse)"]
        );
    }

    #[tokio::test]
    async fn test_helix_prompt_framing() {
        let invoker = Arc::new(RecordingInvoker::new());
        run_helix(Arc::clone(&invoker), &["a"], HelixScheduling::Serialized).await;

        let calls = invoker.calls();
        assert!(calls[0].prompt.ends_with("[Forward pass] You are a"));
        assert!(calls[1].prompt.ends_with("[Reverse pass] Critique as a"));
        // The reverse pass sees what the forward pass recorded
        assert!(calls[1].prompt.contains("\nF0 | a | "));
    }

    #[tokio::test]
    async fn test_serialized_ledger_order() {
        let invoker = Arc::new(RecordingInvoker::new());
        let result = run_helix(invoker, &["a", "b"], HelixScheduling::Serialized).await;

        let order: Vec<(Direction, usize)> = result
            .ledger
            .iter()
            .map(|e| (e.direction, e.step_index))
            .collect();
        assert_eq!(
            order,
            vec![
                (Direction::Forward, 0),
                (Direction::Forward, 1),
                (Direction::Reverse, 1),
                (Direction::Reverse, 0),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_passes_overlap() {
        let slow = |invoker: RecordingInvoker| {
            invoker
                .with_delay("a", Duration::from_millis(100))
                .with_delay("b", Duration::from_millis(100))
        };

        let start = tokio::time::Instant::now();
        run_helix(
            Arc::new(slow(RecordingInvoker::new())),
            &["a", "b"],
            HelixScheduling::Concurrent,
        )
        .await;
        let concurrent = start.elapsed();

        let start = tokio::time::Instant::now();
        run_helix(
            Arc::new(slow(RecordingInvoker::new())),
            &["a", "b"],
            HelixScheduling::Serialized,
        )
        .await;
        let serialized = start.elapsed();

        assert!(concurrent < Duration::from_millis(300));
        assert!(serialized >= Duration::from_millis(400));
    }
}
