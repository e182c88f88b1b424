//! Infrastructure layer for maire
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the backend adapters, the agent router and
//! configuration file loading.

pub mod config;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileAgentConfig, FileBackendConfig, FileConfig,
    FileServerConfig, FileStubConfig,
};
pub use providers::{
    BackendAdapter, BackendError,
    routing::{BackendInvoker, Route},
    stub::StubBackend,
};
