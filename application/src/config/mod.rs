//! Application-level configuration.
//!
//! - [`OrchestrationConfig`] — scheduling and ledger choices for the topology strategies

pub mod orchestration_config;

pub use orchestration_config::{HelixScheduling, OrchestrationConfig, StarArmMode, StarLedgerScope};
