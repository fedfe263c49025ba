// openclaw_config tool

use crate::runner::{CommandRunner, CommandSpec};
use crate::tools::config::ToolsConfig;
use crate::tools::error::{Result, ToolError};
use crate::tools::tool::{ToolImpl, parse_input};
use crate::tools::types::{ConfigAction, ConfigReport, ToolBody, ToolDefinition, ToolResult};
use async_trait::async_trait;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct ConfigInput {
    #[serde(default)]
    action: Option<String>,
    #[serde(default)]
    key: Option<String>,
    #[serde(default)]
    value: Option<String>,
}

/// Shows OpenClaw's config file, or gets/sets keys through `openclaw config`
pub struct ConfigTool {
    description: String,
    config_path: PathBuf,
    timeout_secs: u64,
    runner: Arc<dyn CommandRunner>,
}

impl ConfigTool {
    pub const NAME: &'static str = "openclaw_config";

    pub fn new(
        description: impl Into<String>,
        config: &ToolsConfig,
        runner: Arc<dyn CommandRunner>,
    ) -> Self {
        Self {
            description: description.into(),
            config_path: config.openclaw_config_path.clone(),
            timeout_secs: config.runner.timeout_secs,
            runner,
        }
    }

    fn show(&self) -> Result<ToolResult> {
        let content = std::fs::read_to_string(&self.config_path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                ToolError::ConfigFileAbsent(self.config_path.clone())
            } else {
                ToolError::ConfigRead(self.config_path.clone(), e.to_string())
            }
        })?;

        let config: serde_json::Value = serde_json::from_str(&content)
            .map_err(|e| ToolError::ConfigMalformed(self.config_path.clone(), e.to_string()))?;

        debug!(path = %self.config_path.display(), "loaded openclaw config");
        Ok(ToolResult::ok(ToolBody::Config(ConfigReport::Show { config })))
    }

    async fn get(&self, key: String) -> Result<ToolResult> {
        let result = self
            .runner
            .run(
                CommandSpec::new("openclaw", ["config", "get", key.as_str()])
                    .with_timeout(self.timeout_secs),
            )
            .await;
        if let Some(e) = result.error() {
            return Err(e.clone().into());
        }

        Ok(ToolResult::new(
            result.success(),
            ToolBody::Config(ConfigReport::Get {
                value: result.stdout().trim().to_string(),
                key,
            }),
        ))
    }

    async fn set(&self, key: String, value: String) -> Result<ToolResult> {
        let result = self
            .runner
            .run(
                CommandSpec::new("openclaw", ["config", "set", key.as_str(), value.as_str()])
                    .with_timeout(self.timeout_secs),
            )
            .await;
        if let Some(e) = result.error() {
            return Err(e.clone().into());
        }

        let success = result.success();
        let message = if success {
            format!("Set {key} = {value}")
        } else {
            format!("Failed to set {key}: {}", result.stderr().trim())
        };
        Ok(ToolResult::new(
            success,
            ToolBody::Config(ConfigReport::Set { message }),
        ))
    }
}

/// Treat empty strings like absent parameters
fn required(value: Option<String>, name: &'static str) -> Result<String> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(ToolError::MissingParameter(name))
}

#[async_trait]
impl ToolImpl for ConfigTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME.to_string(),
            description: self.description.clone(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "action": {
                        "type": "string",
                        "enum": ["show", "get", "set"],
                        "default": "show",
                        "description": "show the whole file, get one key, or set one key"
                    },
                    "key": {
                        "type": "string",
                        "description": "Config key, e.g. gateway.port (get/set)"
                    },
                    "value": {
                        "type": "string",
                        "description": "New value (set)"
                    }
                }
            }),
        }
    }

    async fn invoke(&self, input: serde_json::Value) -> Result<ToolResult> {
        let ConfigInput { action, key, value } = parse_input(Self::NAME, input)?;
        let action = match action {
            Some(a) => a.parse()?,
            None => ConfigAction::default(),
        };

        match action {
            ConfigAction::Show => self.show(),
            ConfigAction::Get => self.get(required(key, "key")?).await,
            ConfigAction::Set => {
                let key = required(key, "key")?;
                let value = required(value, "value")?;
                self.set(key, value).await
            }
        }
    }
}

/// Default config tool description
pub fn default_description() -> String {
    r#"Manage OpenClaw configuration.
action "show" (default) prints ~/.openclaw/openclaw.json.
action "get" reads one key and "set" writes one key through `openclaw config`."#
        .to_string()
}
