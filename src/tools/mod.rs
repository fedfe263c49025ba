// Tools module - OpenClaw operations exposed to a calling agent
#![allow(unused_imports)]

pub mod config;
pub mod deploy;
pub mod docs;
pub mod error;
pub mod health;
pub mod install;
pub mod registry;
pub mod settings;
pub mod tool;
pub mod types;

pub use config::{ConfigError, ToolsConfig};
pub use error::{Result, ToolError};
pub use registry::ToolRegistry;
pub use tool::ToolImpl;
pub use types::{ToolBody, ToolDefinition, ToolResult};
