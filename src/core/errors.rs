/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use crate::core::types::Pid;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Process operation result
///
/// # Must Use
/// A failed operation leaves the registry untouched and must be reported
pub type ProcessResult<T> = Result<T, ProcessError>;

/// Process-related errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ProcessError {
    #[error("Process {0} not found")]
    #[diagnostic(
        code(process::not_found),
        help("The process may have terminated or never existed. Check PID validity.")
    )]
    ProcessNotFound(Pid),

    #[error("Process {0} is not in the ready queue")]
    #[diagnostic(
        code(process::not_in_ready_queue),
        help("Only ready processes can request I/O. It may already be waiting on I/O.")
    )]
    NotInReadyQueue(Pid),

    #[error("Process {0} is not in the I/O queue")]
    #[diagnostic(
        code(process::not_in_io_queue),
        help("Only processes waiting on I/O can complete it. Request I/O first.")
    )]
    NotInIoQueue(Pid),

    #[error("Parent process {0} does not exist")]
    #[diagnostic(
        code(process::invalid_parent),
        help("Use -1 for no parent, or pick a PID shown in the process tree.")
    )]
    InvalidParent(Pid),

    #[error("Process {0} has an empty call stack")]
    #[diagnostic(
        code(process::empty_call_stack),
        help("Call a function on the process before returning from one.")
    )]
    EmptyCallStack(Pid),

    #[error("PID space exhausted")]
    #[diagnostic(
        code(process::pid_space_exhausted),
        help("Every PID has been issued once. Start a new session for a fresh registry.")
    )]
    PidSpaceExhausted,
}

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}")]
    #[diagnostic(
        code(config::invalid_value),
        help("Check the environment variable against the documented values.")
    )]
    InvalidValue { key: &'static str, value: String },
}
