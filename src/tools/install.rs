// openclaw_install tool

use crate::runner::{CommandRunner, CommandSpec, RunnerConfig};
use crate::tools::config::ToolsConfig;
use crate::tools::error::{Result, ToolError};
use crate::tools::tool::{ToolImpl, ensure_success, parse_input};
use crate::tools::types::{InstallMethod, InstallReport, ToolBody, ToolDefinition, ToolResult};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Deserialize)]
struct InstallInput {
    #[serde(default)]
    method: Option<String>,
}

/// Installs OpenClaw via npm or docker compose
pub struct InstallTool {
    description: String,
    compose_file: PathBuf,
    timeouts: RunnerConfig,
    runner: Arc<dyn CommandRunner>,
}

impl InstallTool {
    pub const NAME: &'static str = "openclaw_install";

    pub fn new(
        description: impl Into<String>,
        config: &ToolsConfig,
        runner: Arc<dyn CommandRunner>,
    ) -> Self {
        Self {
            description: description.into(),
            compose_file: config.compose_file(),
            timeouts: config.runner.clone(),
            runner,
        }
    }

    async fn install_npm(&self) -> Result<ToolResult> {
        let install = self
            .runner
            .run(
                CommandSpec::new("npm", ["install", "-g", "openclaw@latest"])
                    .with_timeout(self.timeouts.timeout_secs),
            )
            .await;
        let install = ensure_success("npm install", install)?;

        // Onboarding only runs after a successful install
        let onboard = self
            .runner
            .run(
                CommandSpec::new("openclaw", ["onboard", "--install-daemon"])
                    .with_timeout(self.timeouts.timeout_secs),
            )
            .await;

        info!(onboard_success = onboard.success(), "openclaw installed via npm");

        Ok(ToolResult::ok(ToolBody::Install(InstallReport::Npm {
            message: "OpenClaw installed".to_string(),
            install_output: install.stdout().to_string(),
            onboard_output: onboard.stdout().to_string(),
        })))
    }

    async fn install_docker(&self) -> Result<ToolResult> {
        if !self.compose_file.is_file() {
            return Err(ToolError::MissingPrerequisiteFile(self.compose_file.clone()));
        }

        let result = self
            .runner
            .run(compose_up(&self.compose_file).with_timeout(self.timeouts.long_timeout_secs))
            .await;
        if let Some(e) = result.error() {
            return Err(e.clone().into());
        }

        let success = result.success();
        Ok(ToolResult::new(
            success,
            ToolBody::Install(InstallReport::Docker {
                message: if success {
                    "Docker containers started".to_string()
                } else {
                    "Failed to start Docker containers".to_string()
                },
                output: result.combined_output(),
            }),
        ))
    }
}

/// `docker compose -f <file> up -d`
pub fn compose_up(compose_file: &std::path::Path) -> CommandSpec {
    CommandSpec::new(
        "docker",
        [
            "compose".to_string(),
            "-f".to_string(),
            compose_file.display().to_string(),
            "up".to_string(),
            "-d".to_string(),
        ],
    )
}

#[async_trait]
impl ToolImpl for InstallTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME.to_string(),
            description: self.description.clone(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "method": {
                        "type": "string",
                        "enum": ["npm", "docker"],
                        "default": "npm",
                        "description": "Installation method"
                    }
                }
            }),
        }
    }

    async fn invoke(&self, input: serde_json::Value) -> Result<ToolResult> {
        let InstallInput { method } = parse_input(Self::NAME, input)?;
        let method = match method {
            Some(m) => m.parse()?,
            None => InstallMethod::default(),
        };

        match method {
            InstallMethod::Npm => self.install_npm().await,
            InstallMethod::Docker => self.install_docker().await,
        }
    }
}

/// Default install tool description
pub fn default_description() -> String {
    r#"Install OpenClaw.
method "npm" (default) runs `npm install -g openclaw@latest` then `openclaw onboard --install-daemon`.
method "docker" starts the bundled docker-compose.yml."#
        .to_string()
}
