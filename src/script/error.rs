//! Script parse errors.

use thiserror::Error;

/// Errors that can occur when parsing a command script.
///
/// Line numbers are 1-based.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("unknown command {command:?} on line {line}")]
    UnknownCommand { command: String, line: usize },

    #[error("command {command:?} on line {line} takes no argument")]
    UnexpectedArgument { command: String, line: usize },

    #[error("set on line {line} needs a duration in seconds")]
    MissingDuration { line: usize },

    #[error("invalid number {value:?} on line {line}")]
    InvalidNumber { value: String, line: usize },
}
