//! Orchestration domain
//!
//! Topology selection, the request/result value objects, and the
//! ordering helpers the strategies are built from.

pub mod arms;
pub mod topology;
pub mod value_objects;
