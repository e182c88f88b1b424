//! Progress notification port
//!
//! Defines the interface for reporting progress during an orchestration run.

use maire_domain::{Provenance, Topology};

/// Callback for progress updates during a run
///
/// Called from concurrently running passes and arms, so implementations
/// must be thread-safe. Implementations live in the presentation layer.
pub trait ProgressNotifier: Send + Sync {
    /// Called once before the first invocation
    fn on_topology_start(&self, topology: Topology, total_steps: usize);

    /// Called after each invocation has been recorded
    fn on_step_complete(&self, label: &str, provenance: Provenance);

    /// Called once after every task has joined
    fn on_topology_complete(&self, topology: Topology);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_topology_start(&self, _topology: Topology, _total_steps: usize) {}
    fn on_step_complete(&self, _label: &str, _provenance: Provenance) {}
    fn on_topology_complete(&self, _topology: Topology) {}
}
