//! Domain layer for maire
//!
//! This crate contains the core value objects, the run ledger, and the
//! pure helpers the topology strategies are built from. It has no
//! dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Ledger
//!
//! Every orchestration run owns an append-only [`Ledger`]. Each agent
//! invocation is recorded as a [`LedgerEntry`] carrying a 12-hex-char
//! SHA-256 prefix of the response, and the rendered [`Ledger::snapshot`]
//! is prefixed to every subsequent prompt.
//!
//! ## Topologies
//!
//! - **Chain**: agents called one after another over a single ledger
//! - **Helix**: a forward and a reverse pass sharing one ledger
//! - **Star**: every cyclic rotation of the agents runs as a relay arm,
//!   followed by one synthesis call to the anchor agent

pub mod core;
pub mod ledger;
pub mod orchestration;
pub mod prompt;

// Re-export commonly used types
pub use core::{agent::AgentId, backend::Backend, error::DomainError, string::truncate};
pub use ledger::{
    digest::{CONTENT_HASH_LEN, content_hash},
    entities::Ledger,
    value_objects::{Direction, LedgerEntry, Provenance},
};
pub use orchestration::{
    arms::{reverse_indices, rotations},
    topology::Topology,
    value_objects::{OrchestrationRequest, OrchestrationResult, Step, StepKind},
};
pub use prompt::PromptTemplate;
