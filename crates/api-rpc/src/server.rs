//! JSON-RPC Server
//!
//! Serves the riak admin methods over HTTP on localhost.

use crate::handler::RpcHandler;
use crate::types::ClusterMemberRequest;
use jsonrpsee::server::{Server, ServerHandle};
use jsonrpsee::RpcModule;
use riakctl_core::application::RiakService;
use riakctl_core::config::{socket_addr, RiakctlConfig, DEFAULT_RPC_HOST, DEFAULT_RPC_PORT};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

/// RPC Server Configuration
pub struct RpcServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for RpcServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_RPC_HOST.to_string(),
            port: DEFAULT_RPC_PORT,
        }
    }
}

impl From<&RiakctlConfig> for RpcServerConfig {
    fn from(config: &RiakctlConfig) -> Self {
        Self {
            host: config.rpc_host.clone(),
            port: config.rpc_port,
        }
    }
}

/// RPC Server
pub struct RpcServer {
    config: RpcServerConfig,
    handler: Arc<RpcHandler>,
}

impl RpcServer {
    pub fn new(config: RpcServerConfig, service: Arc<RiakService>) -> Self {
        Self {
            config,
            handler: Arc::new(RpcHandler::new(service)),
        }
    }

    /// Build the method table
    fn build_module(&self) -> Result<RpcModule<()>, String> {
        let mut module = RpcModule::new(());

        // Parameterless methods ignore whatever params the caller sends
        macro_rules! register_unit {
            ($module:ident, $handler:expr, $name:literal, $method:ident) => {{
                let handler = $handler.clone();
                $module
                    .register_async_method($name, move |_, _, _| {
                        let handler = handler.clone();
                        async move { handler.$method().await }
                    })
                    .map_err(|e| e.to_string())?;
            }};
        }

        register_unit!(module, self.handler, "riak.available.v1", available);
        register_unit!(module, self.handler, "riak.start.v1", start);
        register_unit!(module, self.handler, "riak.stop.v1", stop);
        register_unit!(module, self.handler, "riak.cluster_plan.v1", cluster_plan);
        register_unit!(module, self.handler, "riak.cluster_commit.v1", cluster_commit);
        register_unit!(module, self.handler, "riak.member_status.v1", member_status);
        register_unit!(module, self.handler, "riak.status.v1", status);

        let handler = self.handler.clone();
        module
            .register_async_method("riak.cluster_join.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: ClusterMemberRequest = params.parse()?;
                    handler.cluster_join(req).await
                }
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_async_method("riak.cluster_leave.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: ClusterMemberRequest = params.parse()?;
                    handler.cluster_leave(req).await
                }
            })
            .map_err(|e| e.to_string())?;

        Ok(module)
    }

    /// Start the JSON-RPC server
    ///
    /// Returns the bound address (useful when port 0 was requested) and the
    /// handle used to stop the server.
    pub async fn start(self) -> Result<(SocketAddr, ServerHandle), String> {
        let addr = socket_addr(&self.config.host, self.config.port);

        info!(
            host = %self.config.host,
            port = %self.config.port,
            "Starting JSON-RPC server on TCP"
        );

        let server = Server::builder()
            .build(&addr)
            .await
            .map_err(|e| format!("Failed to build server on {}: {}", addr, e))?;

        let local_addr = server
            .local_addr()
            .map_err(|e| format!("Failed to read bound address: {}", e))?;

        let module = self.build_module()?;

        info!(
            addr = %local_addr,
            methods = module.method_names().count(),
            "JSON-RPC server started successfully"
        );

        let handle = server.start(module);
        Ok((local_addr, handle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use riakctl_core::port::command_executor::mocks::MockCommandExecutor;
    use riakctl_core::port::executable_resolver::mocks::MockExecutableResolver;

    #[test]
    fn test_all_methods_registered() {
        let service = Arc::new(RiakService::new(
            Arc::new(MockCommandExecutor::new_success()),
            Arc::new(MockExecutableResolver::with_riak()),
        ));
        let server = RpcServer::new(RpcServerConfig::default(), service);

        let module = server.build_module().unwrap();
        let mut names: Vec<&str> = module.method_names().collect();
        names.sort_unstable();

        assert_eq!(
            names,
            vec![
                "riak.available.v1",
                "riak.cluster_commit.v1",
                "riak.cluster_join.v1",
                "riak.cluster_leave.v1",
                "riak.cluster_plan.v1",
                "riak.member_status.v1",
                "riak.start.v1",
                "riak.status.v1",
                "riak.stop.v1",
            ]
        );
    }

    #[test]
    fn test_config_from_riakctl_config() {
        let config = RiakctlConfig {
            rpc_port: 0,
            ..Default::default()
        };

        let rpc = RpcServerConfig::from(&config);
        assert_eq!(rpc.host, "127.0.0.1");
        assert_eq!(rpc.port, 0);
    }
}
