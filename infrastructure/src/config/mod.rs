//! Configuration file loading for maire
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `MAIRE_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./maire.toml` or `./.maire.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/maire/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileAgentConfig, FileBackendConfig, FileBackendsConfig, FileConfig,
    FileServerConfig, FileStubConfig, default_agents,
};
pub use loader::ConfigLoader;
