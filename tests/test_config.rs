// Integration tests for tools configuration
// This file should be run with cargo test --test test_config

#[path = "../src/docs/mod.rs"]
mod docs;

#[path = "../src/runner/mod.rs"]
mod runner;

#[path = "../src/tools/mod.rs"]
mod tools;

use std::path::PathBuf;
use tools::config::{ConfigError, ToolsConfig, default_openclaw_config_path};

const CONFIG_VARS: [&str; 6] = [
    "CLAWMENTOR_DOCS_DIR",
    "CLAWMENTOR_CONFIGS_DIR",
    "CLAWMENTOR_TOOLS_TOML",
    "OPENCLAW_CONFIG_PATH",
    "CLAWMENTOR_TIMEOUT_SECS",
    "CLAWMENTOR_COMPOSE_TIMEOUT_SECS",
];

fn init_tracing() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .init();
    });
}

// Only `test_from_env` touches these variables, so no other test races with it.
fn set_var(name: &str, value: &str) {
    unsafe { std::env::set_var(name, value) };
}

fn clear_config_vars() {
    for name in CONFIG_VARS {
        unsafe { std::env::remove_var(name) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ToolsConfig::default();

        assert_eq!(config.docs_dir, PathBuf::from("docs"));
        assert_eq!(config.configs_dir, PathBuf::from("configs"));
        assert_eq!(config.tools_toml_path, PathBuf::from("tools.toml"));
        assert_eq!(config.runner.timeout_secs, 60);
        assert_eq!(config.runner.long_timeout_secs, 120);
        assert_eq!(
            config.credential_vars,
            vec!["ANTHROPIC_API_KEY", "OPENAI_API_KEY", "GOOGLE_API_KEY"]
        );
        assert_eq!(config.compose_file(), PathBuf::from("configs/docker-compose.yml"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_openclaw_config_path() {
        let path = default_openclaw_config_path();

        assert!(path.ends_with(".openclaw/openclaw.json"), "got {}", path.display());
        if let Some(home) = dirs::home_dir() {
            assert_eq!(path, home.join(".openclaw").join("openclaw.json"));
        }
    }

    #[test]
    fn test_validate_rejects_zero_timeouts() {
        let mut config = ToolsConfig::default();
        config.runner.timeout_secs = 0;
        match config.validate() {
            Err(ConfigError::InvalidValue(var, _)) => assert_eq!(var, "CLAWMENTOR_TIMEOUT_SECS"),
            other => panic!("expected InvalidValue, got {other:?}"),
        }

        let mut config = ToolsConfig::default();
        config.runner.long_timeout_secs = 0;
        match config.validate() {
            Err(ConfigError::InvalidValue(var, _)) => {
                assert_eq!(var, "CLAWMENTOR_COMPOSE_TIMEOUT_SECS")
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    /// All environment mutation happens in this one test, step by step
    #[test]
    fn test_from_env() {
        init_tracing();
        clear_config_vars();

        // Nothing set: defaults, with the home-relative config path
        let config = ToolsConfig::from_env().unwrap();
        assert_eq!(config.docs_dir, PathBuf::from("docs"));
        assert_eq!(config.runner.timeout_secs, 60);
        assert_eq!(config.openclaw_config_path, default_openclaw_config_path());

        // Directory and path overrides
        set_var("CLAWMENTOR_DOCS_DIR", "/srv/clawmentor/docs");
        set_var("CLAWMENTOR_CONFIGS_DIR", "/srv/clawmentor/configs");
        set_var("CLAWMENTOR_TOOLS_TOML", "/etc/clawmentor/tools.toml");
        set_var("OPENCLAW_CONFIG_PATH", "/tmp/openclaw-test.json");
        let config = ToolsConfig::from_env().unwrap();
        assert_eq!(config.docs_dir, PathBuf::from("/srv/clawmentor/docs"));
        assert_eq!(config.configs_dir, PathBuf::from("/srv/clawmentor/configs"));
        assert_eq!(
            config.compose_file(),
            PathBuf::from("/srv/clawmentor/configs/docker-compose.yml")
        );
        assert_eq!(config.tools_toml_path, PathBuf::from("/etc/clawmentor/tools.toml"));
        assert_eq!(config.openclaw_config_path, PathBuf::from("/tmp/openclaw-test.json"));

        // Empty values fall back to the defaults
        set_var("CLAWMENTOR_DOCS_DIR", "");
        let config = ToolsConfig::from_env().unwrap();
        assert_eq!(config.docs_dir, PathBuf::from("docs"));

        // Valid timeouts are applied
        set_var("CLAWMENTOR_TIMEOUT_SECS", "15");
        set_var("CLAWMENTOR_COMPOSE_TIMEOUT_SECS", "300");
        let config = ToolsConfig::from_env().unwrap();
        assert_eq!(config.runner.timeout_secs, 15);
        assert_eq!(config.runner.long_timeout_secs, 300);

        // Non-numeric values warn and keep the default
        set_var("CLAWMENTOR_TIMEOUT_SECS", "abc");
        set_var("CLAWMENTOR_COMPOSE_TIMEOUT_SECS", "-5");
        let config = ToolsConfig::from_env().unwrap();
        assert_eq!(config.runner.timeout_secs, 60);
        assert_eq!(config.runner.long_timeout_secs, 120);

        // Zero is rejected rather than clamped
        set_var("CLAWMENTOR_TIMEOUT_SECS", "0");
        let err = ToolsConfig::from_env().unwrap_err();
        assert!(matches!(
            &err,
            ConfigError::InvalidValue(var, _) if var == "CLAWMENTOR_TIMEOUT_SECS"
        ));
        assert!(err.to_string().contains("at least 1 second"));

        set_var("CLAWMENTOR_TIMEOUT_SECS", "30");
        set_var("CLAWMENTOR_COMPOSE_TIMEOUT_SECS", "0");
        assert!(matches!(
            ToolsConfig::from_env(),
            Err(ConfigError::InvalidValue(var, _)) if var == "CLAWMENTOR_COMPOSE_TIMEOUT_SECS"
        ));

        clear_config_vars();
    }
}
