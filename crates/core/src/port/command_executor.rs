// Command Executor Port
// The single seam between riakctl and the operating system's process table

use crate::domain::CommandResult;
use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

/// Execution errors
///
/// A non-zero exit is NOT an error: it comes back as a [`CommandResult`].
/// These variants cover the cases where no exit code could be observed.
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Spawn failed: {0}")]
    SpawnFailed(String),

    #[error("Process timeout after {0}ms")]
    Timeout(u64),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Command Executor trait
///
/// Implementations:
/// - SubprocessExecutor: spawns the resolved executable (infra-system)
/// - MockCommandExecutor: returns canned results (tests)
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Run `program` with `args` and wait for it to exit
    ///
    /// Arguments are passed as discrete tokens, never through a shell.
    ///
    /// # Errors
    /// - ExecutionError::SpawnFailed if the process cannot be started
    /// - ExecutionError::Timeout if a configured timeout elapses
    /// - ExecutionError::IoError if output collection fails
    async fn execute(&self, program: &Path, args: &[String])
        -> Result<CommandResult, ExecutionError>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::collections::VecDeque;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    /// One recorded invocation
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RecordedCall {
        pub program: PathBuf,
        pub args: Vec<String>,
    }

    /// Mock executor behavior
    #[derive(Debug, Clone)]
    pub enum MockBehavior {
        /// Return this result for every call
        Respond(CommandResult),
        /// Fail to spawn with message
        SpawnFail(String),
        /// Timeout after N ms
        Timeout(u64),
    }

    /// Mock Command Executor for testing
    ///
    /// Queued responses are consumed first; once empty, `fallback` applies.
    pub struct MockCommandExecutor {
        queued: Arc<Mutex<VecDeque<CommandResult>>>,
        fallback: Arc<Mutex<MockBehavior>>,
        calls: Arc<Mutex<Vec<RecordedCall>>>,
    }

    impl MockCommandExecutor {
        pub fn new(behavior: MockBehavior) -> Self {
            Self {
                queued: Arc::new(Mutex::new(VecDeque::new())),
                fallback: Arc::new(Mutex::new(behavior)),
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }
        pub fn with_output(
            return_code: i32,
            stdout: impl Into<String>,
            stderr: impl Into<String>,
        ) -> Self {
            Self::new(MockBehavior::Respond(CommandResult::new(
                return_code,
                stdout,
                stderr,
            )))
        }
        pub fn new_success() -> Self {
            Self::with_output(0, "", "")
        }
        pub fn new_spawn_fail(message: impl Into<String>) -> Self {
            Self::new(MockBehavior::SpawnFail(message.into()))
        }
        pub fn push_response(&self, result: CommandResult) {
            self.queued.lock().unwrap().push_back(result);
        }
        pub fn calls(&self) -> Vec<RecordedCall> {
            self.calls.lock().unwrap().clone()
        }
        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl CommandExecutor for MockCommandExecutor {
        async fn execute(
            &self,
            program: &Path,
            args: &[String],
        ) -> Result<CommandResult, ExecutionError> {
            self.calls.lock().unwrap().push(RecordedCall {
                program: program.to_path_buf(),
                args: args.to_vec(),
            });

            if let Some(result) = self.queued.lock().unwrap().pop_front() {
                return Ok(result);
            }

            let behavior = self.fallback.lock().unwrap().clone();
            match behavior {
                MockBehavior::Respond(result) => Ok(result),
                MockBehavior::SpawnFail(msg) => Err(ExecutionError::SpawnFailed(msg)),
                MockBehavior::Timeout(ms) => Err(ExecutionError::Timeout(ms)),
            }
        }
    }
}
