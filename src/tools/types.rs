// Data types for Tools module
#![allow(dead_code)]

use crate::tools::error::ToolError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Tool metadata advertised to callers
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: serde_json::Value,
}

/// Value returned by every tool. Serializes as one flat object with `success`.
#[derive(Debug, Clone, Serialize)]
pub struct ToolResult {
    pub success: bool,
    #[serde(flatten)]
    pub body: ToolBody,
}

impl ToolResult {
    pub fn new(success: bool, body: ToolBody) -> Self {
        Self { success, body }
    }

    pub fn ok(body: ToolBody) -> Self {
        Self::new(true, body)
    }

    pub fn from_error(err: ToolError) -> Self {
        let kind = err.kind();
        let available = match &err {
            ToolError::DocumentNotFound { available, .. } => Some(available.clone()),
            _ => None,
        };
        Self::new(
            false,
            ToolBody::Error(ErrorReport {
                error: err.to_string(),
                kind,
                available,
            }),
        )
    }

    /// The error report, if this result carries one
    pub fn error(&self) -> Option<&ErrorReport> {
        match &self.body {
            ToolBody::Error(report) => Some(report),
            _ => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_else(|e| {
            serde_json::json!({ "success": false, "error": e.to_string(), "kind": "serialization" })
        })
    }
}

/// Tool-specific payload
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ToolBody {
    Install(InstallReport),
    Health(HealthReport),
    Config(ConfigReport),
    Deploy(DeployReport),
    Docs(DocsReport),
    Error(ErrorReport),
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorReport {
    pub error: String,
    pub kind: &'static str,
    /// Known topics, for document misses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum InstallReport {
    Npm {
        message: String,
        install_output: String,
        onboard_output: String,
    },
    Docker {
        message: String,
        output: String,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub checks: HealthChecks,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthChecks {
    pub node: VersionCheck,
    pub openclaw: VersionCheck,
    /// Variable name → whether it is set to a non-empty value
    pub api_keys: BTreeMap<String, bool>,
    pub doctor: DoctorCheck,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Ok,
    Missing,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionCheck {
    pub status: CheckStatus,
    /// None when the program is not installed
    pub version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoctorCheck {
    pub status: CheckStatus,
    pub output: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ConfigReport {
    Show { config: serde_json::Value },
    Get { key: String, value: String },
    Set { message: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct DeployReport {
    pub message: String,
    pub port: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum DocsReport {
    Listing {
        available_docs: Vec<String>,
        usage: String,
    },
    Document {
        topic: String,
        content: String,
    },
}

/// How OpenClaw gets installed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InstallMethod {
    #[default]
    Npm,
    Docker,
}

impl FromStr for InstallMethod {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "npm" => Ok(Self::Npm),
            "docker" => Ok(Self::Docker),
            other => Err(ToolError::UnsupportedMethod {
                tool: "openclaw_install",
                method: other.to_string(),
            }),
        }
    }
}

/// How the gateway gets started
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeployMethod {
    #[default]
    Docker,
    Npm,
    Daemon,
}

impl FromStr for DeployMethod {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "docker" => Ok(Self::Docker),
            "npm" => Ok(Self::Npm),
            "daemon" => Ok(Self::Daemon),
            other => Err(ToolError::UnsupportedMethod {
                tool: "openclaw_deploy",
                method: other.to_string(),
            }),
        }
    }
}

/// Config tool action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigAction {
    #[default]
    Show,
    Get,
    Set,
}

impl FromStr for ConfigAction {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "show" => Ok(Self::Show),
            "get" => Ok(Self::Get),
            "set" => Ok(Self::Set),
            other => Err(ToolError::UnsupportedAction {
                tool: "openclaw_config",
                action: other.to_string(),
            }),
        }
    }
}
