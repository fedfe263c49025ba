// Tools configuration

use crate::runner::RunnerConfig;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Default gateway port for deployments
pub const DEFAULT_GATEWAY_PORT: u16 = 18789;

/// Credential variables reported by the health check (presence only)
pub const CREDENTIAL_VARS: [&str; 3] = ["ANTHROPIC_API_KEY", "OPENAI_API_KEY", "GOOGLE_API_KEY"];

/// Tools configuration
#[derive(Debug, Clone)]
pub struct ToolsConfig {
    /// Directory holding the documentation corpus
    pub docs_dir: PathBuf,
    /// Directory holding deployment definitions (docker-compose.yml)
    pub configs_dir: PathBuf,
    /// OpenClaw's own JSON configuration file
    pub openclaw_config_path: PathBuf,
    /// Optional tool description overrides
    pub tools_toml_path: PathBuf,
    /// Process timeouts
    pub runner: RunnerConfig,
    /// Environment variables checked for presence by the health tool
    pub credential_vars: Vec<String>,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            docs_dir: PathBuf::from("docs"),
            configs_dir: PathBuf::from("configs"),
            openclaw_config_path: default_openclaw_config_path(),
            tools_toml_path: PathBuf::from("tools.toml"),
            runner: RunnerConfig::default(),
            credential_vars: CREDENTIAL_VARS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ToolsConfig {
    /// Load from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut config = ToolsConfig::default();

        if let Some(dir) = env_path("CLAWMENTOR_DOCS_DIR") {
            config.docs_dir = dir;
        }
        if let Some(dir) = env_path("CLAWMENTOR_CONFIGS_DIR") {
            config.configs_dir = dir;
        }
        if let Some(path) = env_path("CLAWMENTOR_TOOLS_TOML") {
            config.tools_toml_path = path;
        }
        if let Some(path) = env_path("OPENCLAW_CONFIG_PATH") {
            config.openclaw_config_path = path;
        }

        config.runner.timeout_secs =
            parse_env_var("CLAWMENTOR_TIMEOUT_SECS", config.runner.timeout_secs);
        config.runner.long_timeout_secs = parse_env_var(
            "CLAWMENTOR_COMPOSE_TIMEOUT_SECS",
            config.runner.long_timeout_secs,
        );

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.runner.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue(
                "CLAWMENTOR_TIMEOUT_SECS".into(),
                "timeout must be at least 1 second".into(),
            ));
        }
        if self.runner.long_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue(
                "CLAWMENTOR_COMPOSE_TIMEOUT_SECS".into(),
                "timeout must be at least 1 second".into(),
            ));
        }
        Ok(())
    }

    /// Compose definition used by docker install and deploy
    pub fn compose_file(&self) -> PathBuf {
        self.configs_dir.join("docker-compose.yml")
    }
}

/// `~/.openclaw/openclaw.json`
pub fn default_openclaw_config_path() -> PathBuf {
    dirs::home_dir()
        .map(|p| p.join(".openclaw").join("openclaw.json"))
        .unwrap_or_else(|| PathBuf::from(".openclaw/openclaw.json"))
}

fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Parse an environment variable, logging a warning if the value is present but invalid.
fn parse_env_var<T: std::str::FromStr>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(v) => match v.parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!(var = name, value = %v, "Invalid env var value, using default");
                default
            }
        },
        Err(_) => default,
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}
