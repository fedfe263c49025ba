// Tool trait and shared helpers
#![allow(clippy::collapsible_if)]

use crate::runner::CommandResult;
use crate::tools::error::{Result, ToolError};
use crate::tools::types::{ToolDefinition, ToolResult};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// Internal trait for tool implementations
#[async_trait]
pub trait ToolImpl: Send + Sync {
    /// Get the tool definition (name, description, input_schema)
    fn definition(&self) -> ToolDefinition;

    /// Run the tool with JSON input; may fail
    async fn invoke(&self, input: serde_json::Value) -> Result<ToolResult>;

    /// Run the tool, turning any failure into a `success: false` result
    async fn run(&self, input: serde_json::Value) -> ToolResult {
        match self.invoke(input).await {
            Ok(result) => result,
            Err(e) => {
                warn!(tool = %self.name(), kind = e.kind(), error = %e, "tool call failed");
                ToolResult::from_error(e)
            }
        }
    }

    /// Get tool name
    fn name(&self) -> String {
        self.definition().name
    }
}

/// Deserialize tool input. `null` is treated as an empty object.
pub fn parse_input<T: DeserializeOwned>(tool: &str, input: serde_json::Value) -> Result<T> {
    let input = if input.is_null() {
        serde_json::Value::Object(Default::default())
    } else {
        input
    };
    serde_json::from_value(input)
        .map_err(|e| ToolError::InvalidInput(tool.to_string(), e.to_string()))
}

/// Convert a failed command into an error; pass a successful one through
pub fn ensure_success(command: &str, result: CommandResult) -> Result<CommandResult> {
    match result {
        CommandResult::Failed(e) => Err(e.into()),
        CommandResult::Completed(ref out) if out.exit_code != 0 => Err(ToolError::CommandExited {
            command: command.to_string(),
            exit_code: out.exit_code,
            output: format!("{}{}", out.stdout, out.stderr).trim().to_string(),
        }),
        completed => Ok(completed),
    }
}

/// Load tool descriptions from TOML config file
pub fn load_tool_descriptions(path: &Path) -> std::result::Result<HashMap<String, String>, String> {
    if !path.exists() {
        debug!(path = %path.display(), "tools.toml not found, using default descriptions");
        return Ok(HashMap::new());
    }

    let content = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    let config: toml::Table = toml::from_str(&content).map_err(|e| e.to_string())?;

    let mut descriptions = HashMap::new();

    for (key, value) in &config {
        if let Some(desc) = value.get("description") {
            if let Some(s) = desc.as_str() {
                descriptions.insert(key.clone(), s.to_string());
            }
        }
    }

    debug!(
        path = %path.display(),
        tool_count = descriptions.len(),
        "loaded tool descriptions from config"
    );
    Ok(descriptions)
}
