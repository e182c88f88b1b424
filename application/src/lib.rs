//! Application layer for maire
//!
//! This crate contains the topology strategies, the orchestration use case,
//! port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{HelixScheduling, OrchestrationConfig, StarArmMode, StarLedgerScope};
pub use ports::{
    agent_invoker::{AgentAvailability, AgentInvoker, Invocation},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::run_orchestration::{RunOrchestrationError, RunOrchestrationUseCase};
