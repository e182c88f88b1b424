//! Prompt domain
//!
//! Templates for the prompt sent at each step of every topology.

mod template;

pub use template::PromptTemplate;
