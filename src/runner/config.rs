// Runner configuration

/// Default timeout for a single command
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Timeout for long-running commands such as `docker compose up`
pub const DEFAULT_LONG_TIMEOUT_SECS: u64 = 120;

/// Runner configuration
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Timeout applied to ordinary commands
    pub timeout_secs: u64,
    /// Timeout applied to container orchestration commands
    pub long_timeout_secs: u64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            long_timeout_secs: DEFAULT_LONG_TIMEOUT_SECS,
        }
    }
}
