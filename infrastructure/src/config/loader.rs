//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_FILES: [&str; 2] = ["maire.toml", ".maire.toml"];
const ENV_PREFIX: &str = "MAIRE_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `MAIRE_*` environment variables (`__` separates nested keys)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./maire.toml` or `./.maire.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/maire/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::load_from(
            Self::global_config_path().as_deref(),
            Self::project_config_path().as_deref(),
            config_path.map(PathBuf::as_path),
        )
    }

    /// Load from explicit file locations; missing files are skipped.
    pub fn load_from(
        global: Option<&Path>,
        project: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for path in [global, project].into_iter().flatten() {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        // An explicit path must exist
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file_exact(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/maire/config.toml if set,
    /// otherwise falls back to the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("maire").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(explicit: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");
        println!("  [ENV  ] {}<SECTION>__<KEY>", ENV_PREFIX);

        if let Some(path) = explicit {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:5}] Explicit: {}", mark, path.display());
        }

        match Self::project_config_path() {
            Some(path) => println!("  [FOUND] Project: {}", path.display()),
            None => println!("  [     ] Project: ./maire.toml or ./.maire.toml"),
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            println!("  [{}] Global:  {}", mark, path.display());
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maire_application::StarArmMode;
    use maire_domain::Backend;
    use std::fs;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.server.bind, "127.0.0.1:8080");
        assert_eq!(config.stub.latency_ms, 180);
        assert_eq!(config.agents["llama"].backend, Backend::OpenRouter);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().ends_with("maire/config.toml"));
    }

    #[test]
    fn test_missing_files_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigLoader::load_from(
            Some(&dir.path().join("absent.toml")),
            Some(&dir.path().join("also-absent.toml")),
            None,
        )
        .unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_explicit_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let result = ConfigLoader::load_from(None, None, Some(&dir.path().join("absent.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_layers_merge_in_priority_order() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let project = dir.path().join("maire.toml");
        let explicit = dir.path().join("explicit.toml");

        fs::write(
            &global,
            "[stub]\nlatency_ms = 1\n\n[orchestration]\nstar_arm_mode = \"static\"\n",
        )
        .unwrap();
        fs::write(&project, "[stub]\nlatency_ms = 2\n").unwrap();
        fs::write(&explicit, "[server]\nbind = \"127.0.0.1:9999\"\n").unwrap();

        let config =
            ConfigLoader::load_from(Some(&global), Some(&project), Some(&explicit)).unwrap();

        assert_eq!(config.stub.latency_ms, 2);
        assert_eq!(config.orchestration.star_arm_mode, StarArmMode::Static);
        assert_eq!(config.server.bind, "127.0.0.1:9999");
    }

    #[test]
    fn test_partial_backend_section_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("maire.toml");
        fs::write(
            &path,
            "[backends.openrouter]\nmodel = \"x-ai/grok-2\"\n\n[agents.local]\nbackend = \"stub\"\n",
        )
        .unwrap();

        let config = ConfigLoader::load_from(None, Some(&path), None).unwrap();

        assert_eq!(config.backends.openrouter.model, "x-ai/grok-2");
        assert_eq!(
            config.backends.openrouter.base_url,
            "https://openrouter.ai/api/v1"
        );
        // File agents are added to the built-in table
        assert_eq!(config.agents["local"].backend, Backend::Stub);
        assert!(config.agents.contains_key("grok"));
        assert!(config.validate().is_ok());
    }
}
