//! Prompt templates for the topology strategies
//!
//! Every step prompt starts with the current ledger snapshot. The wording
//! after it is what distinguishes chain, helix and star steps.

use crate::core::agent::AgentId;

/// Templates for generating prompts at each step
pub struct PromptTemplate;

impl PromptTemplate {
    /// Chain step: continue the work recorded so far
    pub fn chain_step(snapshot: &str, agent: &AgentId) -> String {
        format!("{}\n\n→ {}\nContinue and improve:", snapshot, agent)
    }

    /// Helix forward pass step
    pub fn helix_forward(snapshot: &str, agent: &AgentId) -> String {
        format!("{}\n\n[Forward pass] You are {}", snapshot, agent)
    }

    /// Helix reverse pass step
    pub fn helix_reverse(snapshot: &str, agent: &AgentId) -> String {
        format!("{}\n\n[Reverse pass] Critique as {}", snapshot, agent)
    }

    /// Star arm step
    ///
    /// `input` is the original prompt for the first step of an arm and the
    /// previous agent's response for every later relay step.
    pub fn star_step(snapshot: &str, arm: usize, step: usize, agent: &AgentId, input: &str) -> String {
        format!(
            "{}\n\nStar arm {} — step {} — You are {}\n\n{}",
            snapshot,
            arm + 1,
            step + 1,
            agent,
            input
        )
    }

    /// Anchor synthesis after every star arm has finished
    ///
    /// `arm_outputs` holds the last response of each arm, in arm order.
    pub fn star_synthesis(original_prompt: &str, anchor: &AgentId, arm_outputs: &[String]) -> String {
        let mut prompt = format!(
            r#"You are {}, the anchor of a star of {} relay chains.

Original prompt:
{}

Final answer from each chain:
"#,
            anchor,
            arm_outputs.len(),
            original_prompt
        );

        for (i, output) in arm_outputs.iter().enumerate() {
            prompt.push_str(&format!("\n--- Arm {} ---\n{}\n", i + 1, output));
        }

        prompt.push_str(
            r#"
Compare the chains, resolve their disagreements, and produce one final,
authoritative answer to the original prompt."#,
        );

        prompt
    }
}
