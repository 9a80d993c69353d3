// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
///
/// Non-zero exits of riak tools never show up here; they are value-level
/// outcomes. Only failures to run a tool at all are errors.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Executable not found on search path: {0}")]
    ToolNotFound(String),

    #[error("Execution error: {0}")]
    Execution(#[from] crate::port::ExecutionError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
