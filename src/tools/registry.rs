// Tool registry
#![allow(dead_code)]

use crate::runner::CommandRunner;
use crate::tools::config::ToolsConfig;
use crate::tools::deploy::DeployTool;
use crate::tools::docs::DocsTool;
use crate::tools::error::ToolError;
use crate::tools::health::HealthTool;
use crate::tools::install::InstallTool;
use crate::tools::settings::ConfigTool;
use crate::tools::tool::{ToolImpl, load_tool_descriptions};
use crate::tools::types::{ToolDefinition, ToolResult};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Name → tool. Built once at startup, read-only afterwards.
#[derive(Default)]
pub struct ToolRegistry {
    tools: BTreeMap<String, Arc<dyn ToolImpl>>,
}

impl ToolRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every OpenClaw tool, sharing one command runner
    pub fn init(config: &ToolsConfig, runner: Arc<dyn CommandRunner>) -> Self {
        debug!(
            docs_dir = %config.docs_dir.display(),
            configs_dir = %config.configs_dir.display(),
            timeout_secs = config.runner.timeout_secs,
            "initializing tool registry"
        );

        let descriptions = load_tool_descriptions(&config.tools_toml_path).unwrap_or_else(|e| {
            warn!(
                path = %config.tools_toml_path.display(),
                error = %e,
                "ignoring unreadable tools.toml"
            );
            Default::default()
        });
        let describe = |name: &str, default: fn() -> String| {
            descriptions.get(name).cloned().unwrap_or_else(default)
        };

        let mut registry = Self::new();
        registry.register(Arc::new(InstallTool::new(
            describe(InstallTool::NAME, crate::tools::install::default_description),
            config,
            runner.clone(),
        )));
        registry.register(Arc::new(HealthTool::new(
            describe(HealthTool::NAME, crate::tools::health::default_description),
            config,
            runner.clone(),
        )));
        registry.register(Arc::new(ConfigTool::new(
            describe(ConfigTool::NAME, crate::tools::settings::default_description),
            config,
            runner.clone(),
        )));
        registry.register(Arc::new(DeployTool::new(
            describe(DeployTool::NAME, crate::tools::deploy::default_description),
            config,
            runner,
        )));
        registry.register(Arc::new(DocsTool::new(
            describe(DocsTool::NAME, crate::tools::docs::default_description),
            config,
        )));

        info!(tool_count = registry.len(), "tool registry initialized");
        registry
    }

    /// Add a tool. A later registration under the same name replaces the earlier one.
    pub fn register(&mut self, tool: Arc<dyn ToolImpl>) {
        let name = tool.name();
        if self.tools.insert(name.clone(), tool).is_some() {
            warn!(tool_name = %name, "tool registered twice, keeping the latest");
        }
    }

    pub fn lookup(&self, name: &str) -> Option<Arc<dyn ToolImpl>> {
        self.tools.get(name).cloned()
    }

    /// Registered names in lexicographic order
    pub fn names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }

    /// All tool definitions, ordered by name
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.values().map(|t| t.definition()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Execute a tool by name with JSON input
    pub async fn execute(&self, tool_name: &str, input: serde_json::Value) -> ToolResult {
        debug!(tool_name = %tool_name, "looking up tool");

        let Some(tool) = self.lookup(tool_name) else {
            warn!(tool_name = %tool_name, "unknown tool requested");
            return ToolResult::from_error(ToolError::UnknownTool(tool_name.to_string()));
        };

        let result = tool.run(input).await;
        info!(tool_name = %tool_name, success = result.success, "tool executed");
        result
    }

    /// Execute a tool with input given as JSON text; unparsable text is an `InvalidInput` result
    pub async fn execute_raw(&self, tool_name: &str, raw_input: &str) -> ToolResult {
        match serde_json::from_str(raw_input) {
            Ok(input) => self.execute(tool_name, input).await,
            Err(e) => {
                warn!(tool_name = %tool_name, error = %e, "tool input is not valid JSON");
                ToolResult::from_error(ToolError::InvalidInput(
                    tool_name.to_string(),
                    e.to_string(),
                ))
            }
        }
    }
}
