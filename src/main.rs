mod docs;
mod runner;
mod tools;

use clap::{Parser, Subcommand};
use runner::ProcessRunner;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tools::{ToolRegistry, ToolsConfig};
use tracing::{Level, debug, error, info};
use tracing_subscriber::fmt;

/// CLI arguments
#[derive(Debug, Parser)]
#[command(name = "clawmentor")]
#[command(about = "OpenClaw install, deploy and documentation tools")]
struct Args {
    /// Documentation directory (overrides CLAWMENTOR_DOCS_DIR)
    #[arg(long)]
    docs_dir: Option<PathBuf>,

    /// Directory containing docker-compose.yml (overrides CLAWMENTOR_CONFIGS_DIR)
    #[arg(long)]
    configs_dir: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// Print the definitions of all tools as JSON
    List,
    /// Invoke one tool and print its result as JSON
    Call {
        /// Tool name, e.g. openclaw_docs
        tool: String,
        /// JSON object with the tool's arguments
        #[arg(default_value = "{}")]
        input: String,
    },
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => std::env::var("CLAWMENTOR_LOG")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(Level::INFO),
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // stdout carries results, logs go to stderr
    fmt()
        .with_max_level(log_level(args.verbose))
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let mut config = ToolsConfig::from_env().unwrap_or_else(|e| {
        error!(error = %e, "invalid configuration");
        process::exit(2);
    });
    if let Some(dir) = args.docs_dir {
        config.docs_dir = dir;
    }
    if let Some(dir) = args.configs_dir {
        config.configs_dir = dir;
    }

    debug!(
        docs_dir = %config.docs_dir.display(),
        configs_dir = %config.configs_dir.display(),
        openclaw_config = %config.openclaw_config_path.display(),
        "Configuration loaded"
    );

    let registry = ToolRegistry::init(&config, Arc::new(ProcessRunner::new()));
    info!(tools = ?registry.names(), "Tools available");

    match args.command {
        Cmd::List => {
            println!("{}", serde_json::to_string_pretty(&registry.definitions())?);
        }
        Cmd::Call { tool, input } => {
            let result = registry.execute_raw(&tool, &input).await;
            println!("{}", serde_json::to_string_pretty(&result.to_json())?);
            if !result.success {
                process::exit(1);
            }
        }
    }

    Ok(())
}
