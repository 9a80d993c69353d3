// Domain Layer - Riak admin commands and their parsed results

pub mod command;
pub mod member_status;
pub mod node_status;
pub mod outcome;

// Re-exports
pub use command::{CommentSource, NodeTarget, RiakCommand, RIAK_ADMIN_BIN, RIAK_BIN};
pub use member_status::{MemberInfo, MemberStatusReport, SUMMARY_STATES};
pub use node_status::{parse_status, StatusReport};
pub use outcome::{CommandResult, OperationOutcome};
