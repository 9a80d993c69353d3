// Subprocess executor implementation
// reason: async-trait, tokio for async process management
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{info, warn};

use riakctl_core::domain::CommandResult;
use riakctl_core::port::command_executor::{CommandExecutor, ExecutionError};
use riakctl_core::port::TimeProvider;

/// Exit code reported when the child was terminated by a signal
const SIGNALED_RETURN_CODE: i32 = -1;

/// Subprocess executor
/// Spawns the resolved executable with an explicit argument list, inheriting
/// the parent's environment unchanged
pub struct SubprocessExecutor {
    time_provider: Arc<dyn TimeProvider>,
    command_timeout: Option<Duration>,
}

impl SubprocessExecutor {
    /// Create a new subprocess executor
    ///
    /// # Arguments
    /// * `time_provider` - Time provider for duration tracking
    /// * `command_timeout` - Upper bound per command; None waits indefinitely
    ///
    /// # Example
    /// ```ignore
    /// let executor = SubprocessExecutor::new(Arc::new(SystemTimeProvider), None);
    /// ```
    pub fn new(time_provider: Arc<dyn TimeProvider>, command_timeout: Option<Duration>) -> Self {
        Self {
            time_provider,
            command_timeout,
        }
    }

    /// Spawn child process and wait for output
    ///
    /// `kill_on_drop` makes sure a timed-out child is killed and reaped when
    /// the pending `wait_with_output` future is dropped.
    async fn spawn_and_wait(
        &self,
        program: &Path,
        args: &[String],
    ) -> Result<std::process::Output, ExecutionError> {
        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                ExecutionError::SpawnFailed(format!("{}: {}", program.display(), e))
            })?;

        if let Some(limit) = self.command_timeout {
            match timeout(limit, child.wait_with_output()).await {
                Ok(Ok(output)) => Ok(output),
                Ok(Err(e)) => Err(ExecutionError::IoError(e.to_string())),
                Err(_) => {
                    warn!(
                        program = %program.display(),
                        timeout_ms = %limit.as_millis(),
                        "Command timed out, child killed"
                    );
                    Err(ExecutionError::Timeout(limit.as_millis() as u64))
                }
            }
        } else {
            child
                .wait_with_output()
                .await
                .map_err(|e| ExecutionError::IoError(e.to_string()))
        }
    }

    /// Build command result from process output
    fn build_result(&self, output: std::process::Output, duration_ms: i64) -> CommandResult {
        CommandResult {
            return_code: output.status.code().unwrap_or(SIGNALED_RETURN_CODE),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            duration_ms,
        }
    }
}

#[async_trait]
impl CommandExecutor for SubprocessExecutor {
    async fn execute(
        &self,
        program: &Path,
        args: &[String],
    ) -> Result<CommandResult, ExecutionError> {
        let start_time = self.time_provider.now_millis();

        info!(
            program = %program.display(),
            args = ?args,
            timeout_ms = ?self.command_timeout.map(|d| d.as_millis()),
            "Starting subprocess execution"
        );

        let output = self.spawn_and_wait(program, args).await?;

        let duration_ms = self.time_provider.now_millis() - start_time;
        let result = self.build_result(output, duration_ms);

        info!(
            program = %program.display(),
            duration_ms = %duration_ms,
            return_code = %result.return_code,
            "Subprocess execution completed"
        );

        Ok(result)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use riakctl_core::port::time_provider::mocks::SteppingTimeProvider;
    use riakctl_core::port::time_provider::SystemTimeProvider;
    use std::path::PathBuf;

    fn sh() -> PathBuf {
        PathBuf::from("/bin/sh")
    }

    fn script(body: &str) -> Vec<String> {
        vec!["-c".to_string(), body.to_string()]
    }

    #[tokio::test]
    async fn test_execute_success_captures_both_streams() {
        let executor = SubprocessExecutor::new(Arc::new(SystemTimeProvider), None);

        let result = executor
            .execute(&sh(), &script("echo hello; echo oops >&2"))
            .await
            .unwrap();

        assert_eq!(result.return_code, 0);
        assert!(result.is_success());
        assert_eq!(result.stdout, "hello\n");
        assert_eq!(result.stderr, "oops\n");
    }

    #[tokio::test]
    async fn test_non_zero_exit_is_a_result_not_an_error() {
        let executor = SubprocessExecutor::new(Arc::new(SystemTimeProvider), None);

        let result = executor
            .execute(&sh(), &script("echo failing >&2; exit 3"))
            .await
            .unwrap();

        assert_eq!(result.return_code, 3);
        assert_eq!(result.stderr, "failing\n");
    }

    #[tokio::test]
    async fn test_arguments_are_not_shell_interpreted() {
        let executor = SubprocessExecutor::new(Arc::new(SystemTimeProvider), None);
        let args = vec!["riak@host; echo injected".to_string()];

        let result = executor
            .execute(Path::new("/bin/echo"), &args)
            .await
            .unwrap();

        assert_eq!(result.stdout, "riak@host; echo injected\n");
    }

    #[tokio::test]
    async fn test_spawn_failure() {
        let executor = SubprocessExecutor::new(Arc::new(SystemTimeProvider), None);

        let result = executor
            .execute(Path::new("/nonexistent/riak-admin"), &[])
            .await;

        assert!(matches!(result, Err(ExecutionError::SpawnFailed(_))));
    }

    #[tokio::test]
    async fn test_execute_timeout() {
        let executor = SubprocessExecutor::new(
            Arc::new(SystemTimeProvider),
            Some(Duration::from_millis(100)),
        );

        let result = executor.execute(&sh(), &script("sleep 10")).await;

        assert!(matches!(result, Err(ExecutionError::Timeout(100))));
    }

    #[tokio::test]
    async fn test_duration_measured_with_time_provider() {
        let executor = SubprocessExecutor::new(Arc::new(SteppingTimeProvider::new(1_000, 250)), None);

        let result = executor.execute(&sh(), &script("true")).await.unwrap();

        assert_eq!(result.duration_ms, 250);
    }
}
