//! Core domain concepts shared across all subdomains.
//!
//! - [`agent::AgentId`] — an invocable agent identity
//! - [`backend::Backend`] — the closed set of backends an agent can resolve to
//! - [`error::DomainError`] — domain-level errors

pub mod agent;
pub mod backend;
pub mod error;
pub mod string;
