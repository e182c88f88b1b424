//! Console output formatter for orchestration results

use super::report::RunReport;
use colored::Colorize;
use maire_application::AgentAvailability;
use maire_domain::{OrchestrationResult, Provenance, StepKind};

/// Formats orchestration results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete result: every step, then the ledger
    pub fn format(prompt: &str, result: &OrchestrationResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&result.summary));
        output.push('\n');

        output.push_str(&format!("{} {}\n", "Prompt:".cyan().bold(), prompt));

        output.push_str(&Self::section_header("Steps"));
        for step in &result.steps {
            match step.kind {
                StepKind::Separator => {
                    output.push_str(&format!("\n{}\n", step.label.dimmed()));
                }
                StepKind::Response => {
                    output.push_str(&format!(
                        "\n{}\n{}\n",
                        format!("── {} ──", step.label).yellow().bold(),
                        step.response_text
                    ));
                }
                StepKind::Synthesis => {
                    output.push_str(&format!(
                        "\n{}\n{}\n",
                        format!("══ {} ══", step.label).green().bold(),
                        step.response_text
                    ));
                }
            }
        }

        if !result.ledger.is_empty() {
            output.push_str(&Self::section_header("Ledger"));
            for entry in &result.ledger {
                let line = entry.render_line();
                let line = match entry.provenance {
                    Provenance::Succeeded => line.normal(),
                    Provenance::FellBack => line.dimmed(),
                    Provenance::Failed => line.red(),
                };
                output.push_str(&format!("{} ({})\n", line, entry.provenance));
            }
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON, ledger included
    pub fn format_json(result: &OrchestrationResult) -> String {
        serde_json::to_string_pretty(&RunReport::new(result.clone(), true))
            .unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the summary and the last answer only (concise output)
    pub fn format_summary(result: &OrchestrationResult) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n\n", format!("=== {} ===", result.summary).cyan().bold()));

        let last = result.synthesis().or_else(|| result.response_steps().last());
        if let Some(step) = last {
            output.push_str(&format!("{} {}\n\n", "Final:".dimmed(), step.label));
            output.push_str(&step.response_text);
            output.push('\n');
        }

        output
    }

    /// Table of configured agents
    pub fn format_agents(agents: &[AgentAvailability]) -> String {
        let mut output = format!("{}\n", "Configured agents:".cyan().bold());
        for agent in agents {
            let mark = if agent.available {
                "v".green()
            } else {
                "x".red()
            };
            output.push_str(&format!(
                "  {} {:<16} {}\n",
                mark,
                agent.id.as_str(),
                agent.backend.as_str().dimmed()
            ));
        }
        output.push_str(&format!(
            "{}\n",
            "Agents not listed answer from the local stub.".dimmed()
        ));
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
