// openclaw_health tool

use crate::runner::{CommandRunner, CommandSpec};
use crate::tools::config::ToolsConfig;
use crate::tools::error::Result;
use crate::tools::tool::ToolImpl;
use crate::tools::types::{
    CheckStatus, DoctorCheck, HealthChecks, HealthReport, ToolBody, ToolDefinition, ToolResult,
    VersionCheck,
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Characters of `openclaw doctor` output kept in the report
pub const DOCTOR_OUTPUT_LIMIT: usize = 500;

/// Reports installation and credential status. Always succeeds.
pub struct HealthTool {
    description: String,
    credential_vars: Vec<String>,
    timeout_secs: u64,
    runner: Arc<dyn CommandRunner>,
}

impl HealthTool {
    pub const NAME: &'static str = "openclaw_health";

    pub fn new(
        description: impl Into<String>,
        config: &ToolsConfig,
        runner: Arc<dyn CommandRunner>,
    ) -> Self {
        Self {
            description: description.into(),
            credential_vars: config.credential_vars.clone(),
            timeout_secs: config.runner.timeout_secs,
            runner,
        }
    }

    async fn version_check(&self, program: &str, args: &[&str]) -> VersionCheck {
        let result = self
            .runner
            .run(CommandSpec::new(program, args.iter().copied()).with_timeout(self.timeout_secs))
            .await;

        if result.success() {
            VersionCheck {
                status: CheckStatus::Ok,
                version: Some(result.stdout().trim().to_string()),
            }
        } else {
            VersionCheck {
                status: CheckStatus::Missing,
                version: None,
            }
        }
    }

    async fn doctor_check(&self) -> DoctorCheck {
        let result = self
            .runner
            .run(CommandSpec::new("openclaw", ["doctor"]).with_timeout(self.timeout_secs))
            .await;

        DoctorCheck {
            status: if result.success() {
                CheckStatus::Ok
            } else {
                CheckStatus::Warning
            },
            output: result.stdout().chars().take(DOCTOR_OUTPUT_LIMIT).collect(),
        }
    }

    /// Presence only; values never leave this function
    fn credential_checks(&self) -> BTreeMap<String, bool> {
        self.credential_vars
            .iter()
            .map(|name| {
                let configured = std::env::var_os(name).is_some_and(|v| !v.is_empty());
                (name.clone(), configured)
            })
            .collect()
    }
}

#[async_trait]
impl ToolImpl for HealthTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME.to_string(),
            description: self.description.clone(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {}
            }),
        }
    }

    async fn invoke(&self, _input: serde_json::Value) -> Result<ToolResult> {
        let checks = HealthChecks {
            node: self.version_check("node", &["-v"]).await,
            openclaw: self.version_check("openclaw", &["--version"]).await,
            api_keys: self.credential_checks(),
            doctor: self.doctor_check().await,
        };

        Ok(ToolResult::ok(ToolBody::Health(HealthReport {
            checks,
            summary: "Health check complete".to_string(),
        })))
    }
}

/// Default health tool description
pub fn default_description() -> String {
    r#"Check the OpenClaw installation: node and openclaw versions, `openclaw doctor`,
and whether ANTHROPIC_API_KEY, OPENAI_API_KEY and GOOGLE_API_KEY are set.
Always succeeds; inspect the individual checks."#
        .to_string()
}
