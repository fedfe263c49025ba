// Runner module - external process invocation with timeout
#![allow(unused_imports)]

pub mod config;
pub mod error;
pub mod process;
pub mod types;

pub use config::RunnerConfig;
pub use error::RunnerError;
pub use process::{CommandRunner, ProcessRunner};
pub use types::{CommandOutput, CommandResult, CommandSpec};
