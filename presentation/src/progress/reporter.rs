//! Progress reporting for orchestration runs

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use maire_application::ProgressNotifier;
use maire_domain::{Provenance, Topology};
use std::sync::{Mutex, PoisonError};

/// Reports progress during a run with a progress bar
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template(
            "{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-")
    }

    fn provenance_mark(provenance: Provenance) -> colored::ColoredString {
        match provenance {
            Provenance::Succeeded => "v".green(),
            Provenance::FellBack => "~".yellow(),
            Provenance::Failed => "x".red(),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_topology_start(&self, topology: Topology, total_steps: usize) {
        let pb = ProgressBar::new(total_steps as u64);
        pb.set_style(Self::bar_style());
        pb.set_prefix(topology.display_name());
        pb.set_message("Starting...");

        *self.bar.lock().unwrap_or_else(PoisonError::into_inner) = Some(pb);
    }

    fn on_step_complete(&self, label: &str, provenance: Provenance) {
        if let Some(pb) = self
            .bar
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            pb.set_message(format!("{} {}", Self::provenance_mark(provenance), label));
            pb.inc(1);
        }
    }

    fn on_topology_complete(&self, topology: Topology) {
        if let Some(pb) = self
            .bar
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            pb.finish_with_message(format!("{} complete!", topology.display_name().green()));
        }
    }
}

/// Simple text-based progress on stderr (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_topology_start(&self, topology: Topology, total_steps: usize) {
        eprintln!(
            "{} {} ({} steps)",
            "->".cyan(),
            topology.display_name().bold(),
            total_steps
        );
    }

    fn on_step_complete(&self, label: &str, provenance: Provenance) {
        match provenance {
            Provenance::Succeeded => eprintln!("  {} {}", "v".green(), label),
            Provenance::FellBack => eprintln!("  {} {} (stub)", "~".yellow(), label),
            Provenance::Failed => eprintln!("  {} {} (failed, stub used)", "x".red(), label),
        }
    }

    fn on_topology_complete(&self, _topology: Topology) {
        eprintln!();
    }
}
