//! riakctl agent - Main Entry Point
//! Hosts the riak admin operations behind a localhost JSON-RPC server

use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Import workspace crates
use riakctl_api_rpc::{RpcServer, RpcServerConfig};
use riakctl_core::application::RiakService;
use riakctl_core::config::{LogFormat, RiakctlConfig};
use riakctl_core::port::time_provider::SystemTimeProvider;
use riakctl_infra_system::{PathResolver, SubprocessExecutor};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_LOG_FILTER: &str =
    "riakctl_agent=info,riakctl_core=info,riakctl_infra_system=info,riakctl_api_rpc=info";

fn init_logging(format: LogFormat) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))?;

    match format {
        LogFormat::Json => {
            // Production: JSON structured logging
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .try_init()?;
        }
        LogFormat::Pretty => {
            // Development: Pretty formatting with colors
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .try_init()?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load configuration
    let config = RiakctlConfig::from_env()?;

    // 2. Initialize logging
    init_logging(config.log_format)?;

    info!("riakctl agent v{} starting...", VERSION);
    info!(
        rpc_addr = %config.rpc_addr(),
        search_path = ?config.search_path,
        command_timeout_secs = ?config.command_timeout.map(|d| d.as_secs()),
        "Configuration loaded"
    );

    // 3. Setup dependencies (DI wiring)
    let time_provider = Arc::new(SystemTimeProvider);
    let executor = Arc::new(SubprocessExecutor::new(
        time_provider,
        config.command_timeout,
    ));
    let resolver = Arc::new(PathResolver::from_config(&config));
    let service = Arc::new(RiakService::new(executor, resolver));

    // 4. Availability probe (informational; callers can ask riak.available.v1)
    if service.is_available() {
        info!("riak executable found");
    } else {
        warn!("riak executable not found on search path; operations will report ToolNotFound");
    }

    // 5. Start JSON-RPC server
    let rpc_server = RpcServer::new(RpcServerConfig::from(&config), service);
    let (addr, rpc_handle) = rpc_server
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("RPC server start failed: {}", e))?;

    info!(addr = %addr, "Agent ready. Press Ctrl+C to shutdown");

    // 6. Wait for shutdown signal
    tokio::signal::ctrl_c().await?;

    info!("Shutdown signal received. Exiting gracefully...");

    rpc_handle
        .stop()
        .map_err(|e| anyhow::anyhow!("RPC server stop failed: {}", e))?;
    rpc_handle.stopped().await;

    info!("Shutdown complete.");

    Ok(())
}
