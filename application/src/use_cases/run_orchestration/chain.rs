//! Chain topology: agents called one after another over a single ledger.

use super::record_step;
use crate::ports::agent_invoker::AgentInvoker;
use crate::ports::progress::ProgressNotifier;
use maire_domain::{AgentId, Direction, Ledger, OrchestrationResult, PromptTemplate, Step};

pub(super) const SUMMARY: &str = "Standard chain complete";

pub(super) async fn run<I: AgentInvoker + ?Sized>(
    invoker: &I,
    original_prompt: &str,
    agents: &[AgentId],
    progress: &dyn ProgressNotifier,
) -> OrchestrationResult {
    let ledger = Ledger::new(original_prompt);
    let mut steps = Vec::with_capacity(agents.len());

    for (i, agent) in agents.iter().enumerate() {
        let prompt = PromptTemplate::chain_step(&ledger.snapshot(), agent);
        let invocation = record_step(
            invoker,
            &ledger,
            Direction::Forward,
            i,
            agent,
            &prompt,
            agent.as_str(),
            progress,
        )
        .await;
        steps.push(Step::response(agent.as_str(), invocation.text));
    }

    OrchestrationResult::new(SUMMARY, steps, ledger.into_entries())
}
