use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::Context;

/// Default config template created when no config exists
const DEFAULT_CONFIG: &str = r#"
[corpus]
root = "./skills"  # Set via PROMPTPACK_CORPUS env var

[matcher]
top_k = 3

[assembler]
max_documents = 16
max_bytes = 262144

[logging]
level = "info"  # trace, debug, info, warn, error
"#;

#[derive(Debug, Deserialize, Clone)]
pub struct CorpusConfig {
    pub root: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MatcherConfig {
    pub top_k: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AssemblerConfig {
    pub max_documents: usize,
    pub max_bytes: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub corpus: CorpusConfig,
    pub matcher: MatcherConfig,
    pub assembler: AssemblerConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Get the global config path: ~/.promptpack/promptpack.toml
    fn global_config_path() -> anyhow::Result<PathBuf> {
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".promptpack").join("promptpack.toml"))
    }

    /// Ensure global config directory and file exist, creating defaults if needed
    fn ensure_global_config() -> anyhow::Result<PathBuf> {
        let config_path = Self::global_config_path()?;
        let config_dir = config_path
            .parent()
            .context("Global config path has no parent directory")?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
            eprintln!("Created config directory: {}", config_dir.display());
        }

        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG.trim())?;
            eprintln!("Created default config: {}", config_path.display());
        }

        Ok(config_path)
    }

    /// Load configuration with layered approach:
    /// 1. Global config: ~/.promptpack/promptpack.toml (auto-created if missing)
    /// 2. Local override: ./promptpack.toml (workspace, optional)
    /// 3. Environment variables (highest priority)
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file from current directory
        dotenvy::dotenv().ok();

        // Ensure global config exists
        let global_config_path = Self::ensure_global_config()?;

        // Build config with layered sources (later sources override earlier ones)
        let mut config_builder = config::Config::builder()
            // Layer 1: Global config (required - we just created it if missing)
            .add_source(config::File::from(global_config_path))
            // Layer 2: Local workspace config (optional override)
            .add_source(config::File::with_name("promptpack").required(false))
            // Layer 3: Environment variables with PROMPTPACK__ prefix
            .add_source(config::Environment::with_prefix("PROMPTPACK").separator("__"));

        // Layer 4: Convenience env var override (highest priority)
        if let Ok(root) = env::var("PROMPTPACK_CORPUS") {
            config_builder = config_builder.set_override("corpus.root", root)?;
        }

        let config = config_builder.build()?;

        let config: Self = config.try_deserialize()?;
        Ok(config)
    }
}
