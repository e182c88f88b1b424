//! Star topology: every cyclic rotation of the agents runs as a relay arm,
//! then the anchor agent synthesizes the arms' final answers.
//!
//! All arms run as concurrent tasks and are joined before the synthesis
//! call. Steps are returned in arm order regardless of completion order.

use super::{RunOrchestrationError, finish_ledger, record_step};
use crate::config::{OrchestrationConfig, StarArmMode, StarLedgerScope};
use crate::ports::agent_invoker::AgentInvoker;
use crate::ports::progress::ProgressNotifier;
use maire_domain::{
    AgentId, Direction, Ledger, LedgerEntry, OrchestrationResult, PromptTemplate, Provenance, Step,
    rotations,
};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Output of one finished arm
struct ArmOutcome {
    steps: Vec<Step>,
    /// Response of the arm's last agent
    final_response: String,
    ledger: Arc<Ledger>,
}

pub(super) fn summary(arm_count: usize) -> String {
    format!("Star Topology — {} independent chains", arm_count)
}

pub(super) async fn run<I: AgentInvoker + 'static>(
    invoker: Arc<I>,
    original_prompt: &str,
    agents: &[AgentId],
    config: &OrchestrationConfig,
    progress: Arc<dyn ProgressNotifier>,
) -> Result<OrchestrationResult, RunOrchestrationError> {
    let arms = rotations(agents);
    let arm_count = arms.len();
    let shared_ledger = match config.star_ledger {
        StarLedgerScope::Shared => Some(Arc::new(Ledger::new(original_prompt))),
        StarLedgerScope::PerArm => None,
    };

    let mut join_set = JoinSet::new();
    for (arm_index, arm) in arms.into_iter().enumerate() {
        let invoker = Arc::clone(&invoker);
        let progress = Arc::clone(&progress);
        let ledger = shared_ledger
            .clone()
            .unwrap_or_else(|| Arc::new(Ledger::new(original_prompt)));
        let original_prompt = original_prompt.to_string();
        let mode = config.star_arm_mode;

        join_set.spawn(async move {
            let outcome = run_arm(
                invoker.as_ref(),
                ledger,
                &original_prompt,
                arm_index,
                &arm,
                mode,
                progress.as_ref(),
            )
            .await;
            (arm_index, outcome)
        });
    }

    let mut outcomes: Vec<Option<ArmOutcome>> = (0..arm_count).map(|_| None).collect();
    while let Some(joined) = join_set.join_next().await {
        let (arm_index, outcome) = joined?;
        debug!("Star arm {} joined", arm_index + 1);
        outcomes[arm_index] = Some(outcome);
    }
    let outcomes: Vec<ArmOutcome> = outcomes.into_iter().flatten().collect();

    let mut steps = Vec::with_capacity(arm_count * (arm_count + 1) + 1);
    let mut final_responses = Vec::with_capacity(arm_count);
    let mut arm_ledgers = Vec::with_capacity(arm_count);
    for (arm_index, outcome) in outcomes.into_iter().enumerate() {
        if config.star_separators {
            steps.push(Step::separator(format!("── Arm {} ──", arm_index + 1)));
        }
        steps.extend(outcome.steps);
        final_responses.push(outcome.final_response);
        arm_ledgers.push(outcome.ledger);
    }

    // Arms hold their own clones of the shared ledger; drop them first so
    // the shared one can be unwrapped.
    let ledger: Vec<LedgerEntry> = match shared_ledger {
        Some(shared) => {
            drop(arm_ledgers);
            finish_ledger(shared)
        }
        None => arm_ledgers.into_iter().flat_map(finish_ledger).collect(),
    };

    let anchor = config
        .anchor
        .clone()
        .unwrap_or_else(|| agents[0].clone());
    info!("Star arms joined, synthesizing with anchor {}", anchor);

    let prompt = PromptTemplate::star_synthesis(original_prompt, &anchor, &final_responses);
    let label = format!("{} (synthesis)", anchor);
    let invocation = invoker.invoke(&anchor, &prompt).await;
    debug!(agent = %anchor, provenance = %invocation.provenance, "Synthesis answered");
    if invocation.provenance != Provenance::Succeeded {
        warn!("Anchor {} answered with fallback ({})", anchor, invocation.provenance);
    }
    progress.on_step_complete(&label, invocation.provenance);
    steps.push(Step::synthesis(label, invocation.text));

    Ok(OrchestrationResult::new(summary(arm_count), steps, ledger))
}

/// Run one arm as a sequential relay over its rotation of the agents.
async fn run_arm<I: AgentInvoker + ?Sized>(
    invoker: &I,
    ledger: Arc<Ledger>,
    original_prompt: &str,
    arm_index: usize,
    arm: &[AgentId],
    mode: StarArmMode,
    progress: &dyn ProgressNotifier,
) -> ArmOutcome {
    let mut steps = Vec::with_capacity(arm.len());
    let mut previous: Option<String> = None;

    for (step_index, agent) in arm.iter().enumerate() {
        let input = match (mode, previous.as_deref()) {
            (StarArmMode::Relay, Some(response)) => response,
            _ => original_prompt,
        };
        let prompt =
            PromptTemplate::star_step(&ledger.snapshot(), arm_index, step_index, agent, input);
        let label = format!("{} (arm {} • step {})", agent, arm_index + 1, step_index + 1);

        let invocation = record_step(
            invoker,
            &ledger,
            Direction::Star,
            step_index,
            agent,
            &prompt,
            &label,
            progress,
        )
        .await;
        steps.push(Step::response(label, invocation.text.clone()));
        previous = Some(invocation.text);
    }

    ArmOutcome {
        steps,
        final_response: previous.unwrap_or_default(),
        ledger,
    }
}
