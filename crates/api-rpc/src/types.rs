//! RPC Request/Response Types
//!
//! Defines the JSON-RPC method parameters and results.
//! `{comment, success}` results reuse [`riakctl_core::domain::OperationOutcome`]
//! and member-status reuses [`riakctl_core::domain::MemberStatusReport`].

use riakctl_core::domain::StatusReport;
use serde::{Deserialize, Serialize};

/// riak.available.v1 - Availability probe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableResponse {
    pub available: bool,
}

/// riak.cluster_join.v1 / riak.cluster_leave.v1
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterMemberRequest {
    pub username: String,
    pub hostname: String,
}

/// riak.cluster_plan.v1 - plan text is not returned
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterPlanResponse {
    pub success: bool,
}

/// riak.status.v1
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: StatusReport,
}
