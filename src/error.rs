//! Command error types

use thiserror::Error;

/// Errors surfaced by the prebuild commands.
///
/// I/O failures are wrapped into [`CommandError::ExecutionError`] at the
/// point of failure so the message carries the offending path.
#[derive(Debug, Error)]
pub enum CommandError {
	/// Invalid command-line usage.
	#[error("Invalid arguments: {0}")]
	InvalidArguments(String),

	/// Failure while executing a generation step.
	#[error("Execution error: {0}")]
	ExecutionError(String),
}

/// Result type for command execution
pub type CommandResult<T> = Result<T, CommandError>;
