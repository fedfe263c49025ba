// Integration tests for Runner module
// This file should be run with cargo test --test test_runner
#![cfg(unix)]

#[path = "../src/runner/mod.rs"]
mod runner;

use runner::{CommandResult, CommandRunner, CommandSpec, ProcessRunner, RunnerError};
use std::time::{Duration, Instant};

fn init_tracing() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .init();
    });
}

fn sh(script: &str) -> CommandSpec {
    CommandSpec::new("sh", ["-c", script])
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test stdout capture and exit code 0
    #[tokio::test]
    async fn test_echo_success() {
        init_tracing();

        let result = ProcessRunner::new().run(sh("echo hello")).await;

        assert!(result.success(), "Exit code 0 should be success");
        assert_eq!(result.stdout(), "hello\n");
        assert_eq!(result.exit_code(), Some(0));
        assert!(result.error().is_none());
    }

    /// stderr output does not make a zero exit a failure
    #[tokio::test]
    async fn test_stderr_is_advisory() {
        init_tracing();

        let result = ProcessRunner::new()
            .run(sh("echo out; echo warn >&2"))
            .await;

        assert!(result.success());
        assert_eq!(result.stdout(), "out\n");
        assert_eq!(result.stderr(), "warn\n");
        assert_eq!(result.combined_output(), "out\nwarn\n");
    }

    /// Test non-zero exit code
    #[tokio::test]
    async fn test_non_zero_exit() {
        init_tracing();

        let result = ProcessRunner::new().run(sh("echo bad >&2; exit 3")).await;

        assert!(!result.success(), "Non-zero exit code should not be success");
        assert_eq!(result.exit_code(), Some(3));
        assert_eq!(result.stderr(), "bad\n");
        assert!(result.error().is_none(), "A non-zero exit is a completed run");
    }

    /// Missing program is reported, not raised
    #[tokio::test]
    async fn test_program_not_found() {
        init_tracing();

        let spec = CommandSpec::new("clawmentor-definitely-missing-program", ["--version"]);
        let result = ProcessRunner::new().run(spec).await;

        assert!(!result.success());
        assert_eq!(
            result,
            CommandResult::Failed(RunnerError::NotFound(
                "clawmentor-definitely-missing-program".to_string()
            ))
        );
        assert_eq!(result.stdout(), "");
    }

    /// Timeout fires close to the configured limit
    #[tokio::test]
    async fn test_timeout() {
        init_tracing();

        let start = Instant::now();
        let result = ProcessRunner::new()
            .run(CommandSpec::new("sleep", ["10"]).with_timeout(1))
            .await;
        let elapsed = start.elapsed();

        assert!(!result.success());
        assert_eq!(result.error(), Some(&RunnerError::Timeout(1)));
        assert_eq!(result.error().map(|e| e.kind()), Some("timeout"));
        assert!(
            elapsed < Duration::from_secs(5),
            "Timed out run should return promptly, took {elapsed:?}"
        );
    }

    /// Env overrides reach the child on top of the inherited environment
    #[tokio::test]
    async fn test_env_override() {
        init_tracing();

        let spec =
            sh("echo \"$GATEWAY_PORT:${PATH:+inherited}\"").with_env("GATEWAY_PORT", "18790");
        let result = ProcessRunner::new().run(spec).await;

        assert!(result.success());
        assert_eq!(result.stdout().trim(), "18790:inherited");
    }

    /// Output is returned in full
    #[tokio::test]
    async fn test_large_output_not_truncated() {
        init_tracing();

        let result = ProcessRunner::new()
            .run(sh("i=0; while [ $i -lt 5000 ]; do echo line$i; i=$((i+1)); done"))
            .await;

        assert!(result.success());
        assert_eq!(result.stdout().lines().count(), 5000);
        assert!(result.stdout().ends_with("line4999\n"));
    }

    #[test]
    fn test_spec_defaults() {
        let spec = CommandSpec::new("npm", ["install", "-g", "openclaw@latest"]);

        assert_eq!(spec.program(), "npm");
        assert_eq!(spec.args(), ["install", "-g", "openclaw@latest"]);
        assert_eq!(spec.timeout_secs(), 60);
        assert!(spec.envs().is_empty());
        assert_eq!(spec.display(), "npm install -g openclaw@latest");
        assert_eq!(spec.with_timeout(0).timeout_secs(), 1);
    }
}
