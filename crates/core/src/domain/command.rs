// Riak Command Domain Model
// Every admin invocation is built here as an explicit argument list (no shell strings)

use std::fmt;

/// `riak` binary (lifecycle control)
pub const RIAK_BIN: &str = "riak";

/// `riak-admin` binary (cluster administration)
pub const RIAK_ADMIN_BIN: &str = "riak-admin";

/// Cluster member target, rendered as `<username>@<hostname>`
///
/// No validation or escaping is applied: the pieces are joined verbatim and
/// handed to the child process as a single argument token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeTarget {
    pub username: String,
    pub hostname: String,
}

impl NodeTarget {
    pub fn new(username: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            hostname: hostname.into(),
        }
    }
}

impl fmt::Display for NodeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.username, self.hostname)
    }
}

/// Where the `comment` of an [`OperationOutcome`](super::OperationOutcome) comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentSource {
    /// stdout on success, stderr on failure (`riak start|stop`)
    StdoutOrStderr,
    /// stdout regardless of exit code (`riak-admin cluster ...`)
    Stdout,
}

/// Fixed set of administrative subcommands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RiakCommand {
    Start,
    Stop,
    ClusterJoin(NodeTarget),
    ClusterLeave(NodeTarget),
    ClusterPlan,
    ClusterCommit,
    MemberStatus,
    Status,
}

impl RiakCommand {
    /// Executable name to resolve on the search path
    pub fn binary(&self) -> &'static str {
        match self {
            RiakCommand::Start | RiakCommand::Stop => RIAK_BIN,
            _ => RIAK_ADMIN_BIN,
        }
    }

    /// Argument tokens passed to the executable, in order
    pub fn args(&self) -> Vec<String> {
        match self {
            RiakCommand::Start => vec!["start".into()],
            RiakCommand::Stop => vec!["stop".into()],
            RiakCommand::ClusterJoin(target) => {
                vec!["cluster".into(), "join".into(), target.to_string()]
            }
            RiakCommand::ClusterLeave(target) => {
                vec!["cluster".into(), "leave".into(), target.to_string()]
            }
            RiakCommand::ClusterPlan => vec!["cluster".into(), "plan".into()],
            RiakCommand::ClusterCommit => vec!["cluster".into(), "commit".into()],
            RiakCommand::MemberStatus => vec!["member-status".into()],
            RiakCommand::Status => vec!["status".into()],
        }
    }

    pub fn comment_source(&self) -> CommentSource {
        match self {
            RiakCommand::Start | RiakCommand::Stop => CommentSource::StdoutOrStderr,
            _ => CommentSource::Stdout,
        }
    }

    /// Short operation name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            RiakCommand::Start => "start",
            RiakCommand::Stop => "stop",
            RiakCommand::ClusterJoin(_) => "cluster_join",
            RiakCommand::ClusterLeave(_) => "cluster_leave",
            RiakCommand::ClusterPlan => "cluster_plan",
            RiakCommand::ClusterCommit => "cluster_commit",
            RiakCommand::MemberStatus => "member_status",
            RiakCommand::Status => "status",
        }
    }
}
