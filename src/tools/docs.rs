// openclaw_docs tool

use crate::docs::{DocumentLookup, TopicResolver};
use crate::tools::config::ToolsConfig;
use crate::tools::error::Result;
use crate::tools::tool::{ToolImpl, parse_input};
use crate::tools::types::{DocsReport, ToolBody, ToolDefinition, ToolResult};
use async_trait::async_trait;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct DocsInput {
    #[serde(default)]
    topic: Option<String>,
}

pub struct DocsTool {
    description: String,
    resolver: TopicResolver,
}

impl DocsTool {
    pub const NAME: &'static str = "openclaw_docs";

    pub fn new(description: impl Into<String>, config: &ToolsConfig) -> Self {
        Self {
            description: description.into(),
            resolver: TopicResolver::new(config.docs_dir.clone()),
        }
    }
}

#[async_trait]
impl ToolImpl for DocsTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME.to_string(),
            description: self.description.clone(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "topic": {
                        "type": "string",
                        "description": "Topic alias or document name; omit to list documents",
                        "examples": self.resolver.alias_keys()
                    }
                }
            }),
        }
    }

    async fn invoke(&self, input: serde_json::Value) -> Result<ToolResult> {
        let DocsInput { topic } = parse_input(Self::NAME, input)?;

        let report = match self.resolver.resolve(topic.as_deref())? {
            DocumentLookup::Listing {
                available_docs,
                usage,
            } => DocsReport::Listing {
                available_docs,
                usage,
            },
            DocumentLookup::Document { topic, content } => DocsReport::Document { topic, content },
        };

        Ok(ToolResult::ok(ToolBody::Docs(report)))
    }
}

/// Default docs tool description
pub fn default_description() -> String {
    r#"Read the OpenClaw tutorials.
Topics: 快速入門/quick-start, 部署方式/deployment, 安全配置/security,
多模型/multi-model, 技能系統/skills, 記憶系統/memory.
Omit the topic to list available documents."#
        .to_string()
}
