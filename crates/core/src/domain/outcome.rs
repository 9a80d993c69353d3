// Command Result & Operation Outcome

use super::command::CommentSource;
use serde::{Deserialize, Serialize};

/// Captured result of one finished child process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Exit code; -1 when the process was terminated by a signal
    pub return_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub duration_ms: i64,
}

impl CommandResult {
    pub fn new(return_code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            return_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
            duration_ms: 0,
        }
    }

    pub fn is_success(&self) -> bool {
        self.return_code == 0
    }
}

/// `{comment, success}` record returned by state-changing operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationOutcome {
    pub comment: String,
    pub success: bool,
}

impl OperationOutcome {
    /// Map a finished command into an outcome
    ///
    /// `success` is exit-code only. The comment text depends on `source`:
    /// lifecycle commands report stderr on failure, cluster commands always
    /// report stdout.
    pub fn from_result(result: &CommandResult, source: CommentSource) -> Self {
        let success = result.is_success();
        let comment = match (source, success) {
            (CommentSource::StdoutOrStderr, false) => result.stderr.clone(),
            _ => result.stdout.clone(),
        };

        Self { comment, success }
    }
}
