//! RPC Method Handlers
//!
//! Thin mapping from JSON-RPC methods onto [`RiakService`] operations.

use crate::error::to_rpc_error;
use crate::types::{AvailableResponse, ClusterMemberRequest, ClusterPlanResponse, StatusResponse};
use jsonrpsee::types::ErrorObjectOwned;
use riakctl_core::application::RiakService;
use riakctl_core::domain::{MemberStatusReport, OperationOutcome};
use std::sync::Arc;
use tracing::info;

/// RPC Handler with injected dependencies
pub struct RpcHandler {
    service: Arc<RiakService>,
}

impl RpcHandler {
    pub fn new(service: Arc<RiakService>) -> Self {
        Self { service }
    }

    /// riak.available.v1
    pub async fn available(&self) -> Result<AvailableResponse, ErrorObjectOwned> {
        Ok(AvailableResponse {
            available: self.service.is_available(),
        })
    }

    /// riak.start.v1
    pub async fn start(&self) -> Result<OperationOutcome, ErrorObjectOwned> {
        self.service.start().await.map_err(to_rpc_error)
    }

    /// riak.stop.v1
    pub async fn stop(&self) -> Result<OperationOutcome, ErrorObjectOwned> {
        self.service.stop().await.map_err(to_rpc_error)
    }

    /// riak.cluster_join.v1
    pub async fn cluster_join(
        &self,
        params: ClusterMemberRequest,
    ) -> Result<OperationOutcome, ErrorObjectOwned> {
        info!(username = %params.username, hostname = %params.hostname, "Cluster join requested");
        self.service
            .cluster_join(&params.username, &params.hostname)
            .await
            .map_err(to_rpc_error)
    }

    /// riak.cluster_leave.v1
    pub async fn cluster_leave(
        &self,
        params: ClusterMemberRequest,
    ) -> Result<OperationOutcome, ErrorObjectOwned> {
        info!(username = %params.username, hostname = %params.hostname, "Cluster leave requested");
        self.service
            .cluster_leave(&params.username, &params.hostname)
            .await
            .map_err(to_rpc_error)
    }

    /// riak.cluster_plan.v1
    pub async fn cluster_plan(&self) -> Result<ClusterPlanResponse, ErrorObjectOwned> {
        let success = self.service.cluster_plan().await.map_err(to_rpc_error)?;
        Ok(ClusterPlanResponse { success })
    }

    /// riak.cluster_commit.v1
    pub async fn cluster_commit(&self) -> Result<OperationOutcome, ErrorObjectOwned> {
        self.service.cluster_commit().await.map_err(to_rpc_error)
    }

    /// riak.member_status.v1
    pub async fn member_status(&self) -> Result<MemberStatusReport, ErrorObjectOwned> {
        self.service.member_status().await.map_err(to_rpc_error)
    }

    /// riak.status.v1
    pub async fn status(&self) -> Result<StatusResponse, ErrorObjectOwned> {
        let status = self.service.status().await.map_err(to_rpc_error)?;
        Ok(StatusResponse { status })
    }
}
