// openclaw_deploy tool

use crate::runner::{CommandRunner, CommandSpec, RunnerConfig};
use crate::tools::config::{DEFAULT_GATEWAY_PORT, ToolsConfig};
use crate::tools::error::{Result, ToolError};
use crate::tools::install::compose_up;
use crate::tools::tool::{ToolImpl, parse_input};
use crate::tools::types::{DeployMethod, DeployReport, ToolBody, ToolDefinition, ToolResult};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Variable compose reads the published gateway port from
pub const GATEWAY_PORT_VAR: &str = "GATEWAY_PORT";

#[derive(Debug, Deserialize)]
struct DeployInput {
    #[serde(default)]
    method: Option<String>,
    #[serde(default)]
    port: Option<u16>,
}

/// Starts the OpenClaw gateway
pub struct DeployTool {
    description: String,
    compose_file: PathBuf,
    timeouts: RunnerConfig,
    runner: Arc<dyn CommandRunner>,
}

impl DeployTool {
    pub const NAME: &'static str = "openclaw_deploy";

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

    async fn deploy_docker(&self, port: u16) -> Result<ToolResult> {
        if !self.compose_file.is_file() {
            return Err(ToolError::MissingPrerequisiteFile(self.compose_file.clone()));
        }

        let spec = compose_up(&self.compose_file)
            .with_env(GATEWAY_PORT_VAR, port.to_string())
            .with_timeout(self.timeouts.long_timeout_secs);
        let result = self.runner.run(spec).await;
        if let Some(e) = result.error() {
            return Err(e.clone().into());
        }

        let success = result.success();
        Ok(ToolResult::new(
            success,
            ToolBody::Deploy(DeployReport {
                message: if success {
                    format!("Docker deployment complete on port {port}")
                } else {
                    "Docker deployment failed".to_string()
                },
                port,
                output: Some(result.combined_output()),
                note: None,
            }),
        ))
    }

    /// Foreground gateway. Its exit is not observable here, so issuing it counts as success.
    async fn deploy_foreground(&self, port: u16) -> Result<ToolResult> {
        let port_arg = port.to_string();
        let result = self
            .runner
            .run(
                CommandSpec::new("openclaw", ["gateway", "--port", port_arg.as_str()])
                    .with_timeout(self.timeouts.timeout_secs),
            )
            .await;
        info!(port = port, exited_cleanly = result.success(), "foreground gateway returned");

        Ok(ToolResult::ok(ToolBody::Deploy(DeployReport {
            message: format!("Gateway started on port {port}"),
            port,
            output: None,
            note: Some(
                "Runs in the foreground; closing the calling terminal stops the gateway"
                    .to_string(),
            ),
        })))
    }

    async fn deploy_daemon(&self, port: u16) -> Result<ToolResult> {
        let port_arg = port.to_string();
        let result = self
            .runner
            .run(
                CommandSpec::new("openclaw", ["gateway", "--daemon", "--port", port_arg.as_str()])
                    .with_timeout(self.timeouts.timeout_secs),
            )
            .await;
        if let Some(e) = result.error() {
            return Err(e.clone().into());
        }

        let success = result.success();
        Ok(ToolResult::new(
            success,
            ToolBody::Deploy(DeployReport {
                message: if success {
                    format!("Gateway daemon started on port {port}")
                } else {
                    "Failed to start gateway daemon".to_string()
                },
                port,
                output: Some(result.combined_output()),
                note: None,
            }),
        ))
    }
}

#[async_trait]
impl ToolImpl for DeployTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME.to_string(),
            description: self.description.clone(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "method": {
                        "type": "string",
                        "enum": ["docker", "npm", "daemon"],
                        "default": "docker",
                        "description": "Deployment method"
                    },
                    "port": {
                        "type": "integer",
                        "minimum": 1,
                        "maximum": 65535,
                        "default": DEFAULT_GATEWAY_PORT,
                        "description": "Gateway port"
                    }
                }
            }),
        }
    }

    async fn invoke(&self, input: serde_json::Value) -> Result<ToolResult> {
        let DeployInput { method, port } = parse_input(Self::NAME, input)?;
        let method = match method {
            Some(m) => m.parse()?,
            None => DeployMethod::default(),
        };
        let port = port.unwrap_or(DEFAULT_GATEWAY_PORT);
        if port == 0 {
            return Err(ToolError::InvalidInput(
                Self::NAME.to_string(),
                "port must be between 1 and 65535".to_string(),
            ));
        }

        info!(method = ?method, port = port, "deploying gateway");

        match method {
            DeployMethod::Docker => self.deploy_docker(port).await,
            DeployMethod::Npm => self.deploy_foreground(port).await,
            DeployMethod::Daemon => self.deploy_daemon(port).await,
        }
    }
}

/// Default deploy tool description
pub fn default_description() -> String {
    r#"Deploy the OpenClaw gateway.
method "docker" (default) runs docker compose with GATEWAY_PORT set.
method "npm" runs `openclaw gateway` in the foreground.
method "daemon" runs `openclaw gateway --daemon`."#
        .to_string()
}
