// Riak administration use cases
// One resolved executable + one child process per call, no retries
use crate::domain::{
    parse_status, CommandResult, MemberStatusReport, NodeTarget, OperationOutcome, RiakCommand,
    StatusReport, RIAK_BIN,
};
use crate::error::{AppError, Result};
use crate::port::{CommandExecutor, ExecutableResolver};
use std::sync::Arc;
use tracing::{debug, warn};

/// Riak admin service
///
/// Resolves `riak` / `riak-admin` on every call, runs one subcommand and maps
/// its output. Non-zero exits are reported through the returned values; only
/// a missing executable or a process that could not be run yields `Err`.
pub struct RiakService {
    executor: Arc<dyn CommandExecutor>,
    resolver: Arc<dyn ExecutableResolver>,
}

impl RiakService {
    /// Create a new service
    ///
    /// # Example
    /// ```ignore
    /// let service = RiakService::new(
    ///     Arc::new(SubprocessExecutor::new(Arc::new(SystemTimeProvider), None)),
    ///     Arc::new(PathResolver::from_env()),
    /// );
    /// ```
    pub fn new(executor: Arc<dyn CommandExecutor>, resolver: Arc<dyn ExecutableResolver>) -> Self {
        Self { executor, resolver }
    }

    /// Availability guard: usable only when `riak` is on the search path
    pub fn is_available(&self) -> bool {
        let available = self.resolver.resolve(RIAK_BIN).is_some();
        debug!(available = %available, "Riak availability probe");
        available
    }

    /// `riak start`
    pub async fn start(&self) -> Result<OperationOutcome> {
        self.run_outcome(RiakCommand::Start).await
    }

    /// `riak stop`
    pub async fn stop(&self) -> Result<OperationOutcome> {
        self.run_outcome(RiakCommand::Stop).await
    }

    /// `riak-admin cluster join <username>@<hostname>`
    pub async fn cluster_join(&self, username: &str, hostname: &str) -> Result<OperationOutcome> {
        self.run_outcome(RiakCommand::ClusterJoin(NodeTarget::new(username, hostname)))
            .await
    }

    /// `riak-admin cluster leave <username>@<hostname>`
    pub async fn cluster_leave(
        &self,
        username: &str,
        hostname: &str,
    ) -> Result<OperationOutcome> {
        self.run_outcome(RiakCommand::ClusterLeave(NodeTarget::new(username, hostname)))
            .await
    }

    /// `riak-admin cluster plan`; true iff exit code 0, plan text is discarded
    pub async fn cluster_plan(&self) -> Result<bool> {
        let result = self.run(&RiakCommand::ClusterPlan).await?;
        Ok(result.is_success())
    }

    /// `riak-admin cluster commit`
    pub async fn cluster_commit(&self) -> Result<OperationOutcome> {
        self.run_outcome(RiakCommand::ClusterCommit).await
    }

    /// `riak-admin member-status`
    ///
    /// stdout is parsed even when the command exits non-zero; there is no
    /// success flag in the report.
    pub async fn member_status(&self) -> Result<MemberStatusReport> {
        let result = self.run(&RiakCommand::MemberStatus).await?;
        Ok(MemberStatusReport::parse(&result.stdout))
    }

    /// `riak-admin status`
    ///
    /// Same as [`member_status`](Self::member_status): exit code is not surfaced.
    pub async fn status(&self) -> Result<StatusReport> {
        let result = self.run(&RiakCommand::Status).await?;
        Ok(parse_status(&result.stdout))
    }

    async fn run_outcome(&self, command: RiakCommand) -> Result<OperationOutcome> {
        let result = self.run(&command).await?;
        Ok(OperationOutcome::from_result(
            &result,
            command.comment_source(),
        ))
    }

    async fn run(&self, command: &RiakCommand) -> Result<CommandResult> {
        let binary = command.binary();
        let program = self.resolver.resolve(binary).ok_or_else(|| {
            warn!(binary = %binary, operation = %command.name(), "Executable not found");
            AppError::ToolNotFound(binary.to_string())
        })?;

        let args = command.args();
        let result = self.executor.execute(&program, &args).await?;

        if !result.is_success() {
            warn!(
                operation = %command.name(),
                return_code = %result.return_code,
                "Riak command exited non-zero"
            );
        } else {
            debug!(
                operation = %command.name(),
                duration_ms = %result.duration_ms,
                "Riak command completed"
            );
        }

        Ok(result)
    }
}
