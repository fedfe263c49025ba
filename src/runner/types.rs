// Data types for Runner module
#![allow(dead_code)]

use crate::runner::config::DEFAULT_TIMEOUT_SECS;
use crate::runner::error::RunnerError;
use serde::Serialize;
use std::time::Duration;

/// A single command invocation: program, arguments, timeout and env overrides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
    timeout_secs: u64,
    envs: Vec<(String, String)>,
}

impl CommandSpec {
    /// Command with the default 60 second timeout
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            envs: Vec::new(),
        }
    }

    /// Override the timeout. Zero is clamped to one second.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs.max(1);
        self
    }

    /// Set an environment variable on top of the inherited environment
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn envs(&self) -> &[(String, String)] {
        &self.envs
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Program and arguments joined for logging
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Captured output of a process that ran to completion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    /// -1 when the process was terminated by a signal
    pub exit_code: i32,
}

/// Outcome of running a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    Completed(CommandOutput),
    Failed(RunnerError),
}

impl CommandResult {
    /// True only for a completed process with exit code 0
    pub fn success(&self) -> bool {
        matches!(self, CommandResult::Completed(out) if out.exit_code == 0)
    }

    pub fn stdout(&self) -> &str {
        match self {
            CommandResult::Completed(out) => &out.stdout,
            CommandResult::Failed(_) => "",
        }
    }

    pub fn stderr(&self) -> &str {
        match self {
            CommandResult::Completed(out) => &out.stderr,
            CommandResult::Failed(_) => "",
        }
    }

    pub fn exit_code(&self) -> Option<i32> {
        match self {
            CommandResult::Completed(out) => Some(out.exit_code),
            CommandResult::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&RunnerError> {
        match self {
            CommandResult::Completed(_) => None,
            CommandResult::Failed(e) => Some(e),
        }
    }

    /// stdout followed by stderr
    pub fn combined_output(&self) -> String {
        format!("{}{}", self.stdout(), self.stderr())
    }
}
