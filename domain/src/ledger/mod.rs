//! Run ledger domain
//!
//! An append-only record of every invocation made during one run,
//! rendered as the context block prefixed to subsequent prompts.

pub mod digest;
pub mod entities;
pub mod value_objects;
