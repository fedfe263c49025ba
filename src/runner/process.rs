// Process runner implementation

use crate::runner::error::RunnerError;
use crate::runner::types::{CommandOutput, CommandResult, CommandSpec};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::process::Stdio;
use std::time::Instant;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Seam between tool handlers and the OS process layer
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run a command to completion. Never fails outward; failures are in the result.
    async fn run(&self, spec: CommandSpec) -> CommandResult;
}

/// Runs commands as real child processes
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, spec: CommandSpec) -> CommandResult {
        let start = Instant::now();
        let command_line = spec.display();

        debug!(command = %command_line, timeout_secs = spec.timeout_secs(), "spawning command");

        let mut cmd = Command::new(spec.program());
        cmd.args(spec.args())
            .envs(spec.envs().iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let result = match timeout(spec.timeout(), cmd.output()).await {
            Ok(Ok(output)) => CommandResult::Completed(CommandOutput {
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                exit_code: output.status.code().unwrap_or(-1),
            }),
            Ok(Err(e)) if e.kind() == ErrorKind::NotFound => {
                CommandResult::Failed(RunnerError::NotFound(spec.program().to_string()))
            }
            Ok(Err(e)) => CommandResult::Failed(RunnerError::Other(e.to_string())),
            Err(_) => CommandResult::Failed(RunnerError::Timeout(spec.timeout_secs())),
        };

        let duration_ms = start.elapsed().as_millis() as u64;

        match &result {
            CommandResult::Completed(out) => info!(
                command = %command_line.chars().take(100).collect::<String>(),
                duration_ms = duration_ms,
                exit_code = out.exit_code,
                stdout_bytes = out.stdout.len(),
                stderr_bytes = out.stderr.len(),
                "command completed"
            ),
            CommandResult::Failed(e) => warn!(
                command = %command_line.chars().take(100).collect::<String>(),
                duration_ms = duration_ms,
                kind = e.kind(),
                error = %e,
                "command failed"
            ),
        }

        result
    }
}
