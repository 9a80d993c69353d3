//! riakctl CLI - Command-line interface for the riakctl agent
//! Runs riak admin operations through the agent, or in-process with --local

mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use output::Output;
use riakctl_core::application::RiakService;
use riakctl_core::config::RiakctlConfig;
use riakctl_core::domain::{MemberStatusReport, OperationOutcome, StatusReport};
use riakctl_core::port::time_provider::SystemTimeProvider;
use riakctl_infra_system::{PathResolver, SubprocessExecutor};

const DEFAULT_RPC_URL: &str = "http://127.0.0.1:9528";

#[derive(Parser)]
#[command(name = "riakctl")]
#[command(about = "Riak node administration CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Agent RPC URL
    #[arg(long, env = "RIAKCTL_RPC_URL", default_value = DEFAULT_RPC_URL)]
    rpc_url: String,

    /// Run the operation in this process instead of through the agent
    #[arg(long)]
    local: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum Commands {
    /// Check whether the riak executable is installed
    Available,

    /// Start the riak node
    Start,

    /// Stop the riak node
    Stop,

    /// Stage joining this node to a cluster
    Join {
        /// Riak username of the target node (e.g. riak)
        username: String,

        /// Hostname of the target node
        hostname: String,
    },

    /// Stage removing a node from the cluster
    Leave {
        /// Riak username of the node
        username: String,

        /// Hostname of the node
        hostname: String,
    },

    /// Review staged cluster changes
    Plan,

    /// Commit staged cluster changes
    Commit,

    /// Show cluster membership
    MemberStatus,

    /// Show node statistics
    Status,
}

#[derive(Serialize)]
struct JsonRpcRequest {
    jsonrpc: String,
    method: String,
    params: serde_json::Value,
    id: u64,
}

#[derive(Deserialize)]
struct JsonRpcResponse {
    #[allow(dead_code)]
    jsonrpc: String,
    #[allow(dead_code)]
    id: u64,
    result: Option<serde_json::Value>,
    error: Option<JsonRpcError>,
}

#[derive(Deserialize)]
struct JsonRpcError {
    code: i32,
    message: String,
}

#[derive(Deserialize)]
struct AvailableResult {
    available: bool,
}

#[derive(Deserialize)]
struct PlanResult {
    success: bool,
}

#[derive(Deserialize)]
struct StatusResult {
    status: StatusReport,
}

async fn call_rpc<T: DeserializeOwned>(
    url: &str,
    method: &str,
    params: serde_json::Value,
) -> Result<T> {
    let request = JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        method: method.to_string(),
        params,
        id: 1,
    };

    let client = reqwest::Client::new();
    let response: JsonRpcResponse = client
        .post(url)
        .json(&request)
        .send()
        .await
        .context("Failed to connect to agent")?
        .json()
        .await
        .context("Failed to parse response")?;

    if let Some(error) = response.error {
        anyhow::bail!("RPC error ({}): {}", error.code, error.message);
    }

    let result = response
        .result
        .ok_or_else(|| anyhow::anyhow!("No result in response"))?;

    serde_json::from_value(result).with_context(|| format!("Unexpected result for {}", method))
}

/// JSON-RPC method name and params for a subcommand
fn rpc_request(command: &Commands) -> (&'static str, serde_json::Value) {
    match command {
        Commands::Available => ("riak.available.v1", json!({})),
        Commands::Start => ("riak.start.v1", json!({})),
        Commands::Stop => ("riak.stop.v1", json!({})),
        Commands::Join { username, hostname } => (
            "riak.cluster_join.v1",
            json!({ "username": username, "hostname": hostname }),
        ),
        Commands::Leave { username, hostname } => (
            "riak.cluster_leave.v1",
            json!({ "username": username, "hostname": hostname }),
        ),
        Commands::Plan => ("riak.cluster_plan.v1", json!({})),
        Commands::Commit => ("riak.cluster_commit.v1", json!({})),
        Commands::MemberStatus => ("riak.member_status.v1", json!({})),
        Commands::Status => ("riak.status.v1", json!({})),
    }
}

async fn run_remote(url: &str, command: &Commands) -> Result<Output> {
    let (method, params) = rpc_request(command);

    let output = match command {
        Commands::Available => {
            let result: AvailableResult = call_rpc(url, method, params).await?;
            Output::Available(result.available)
        }
        Commands::Plan => {
            let result: PlanResult = call_rpc(url, method, params).await?;
            Output::Plan(result.success)
        }
        Commands::MemberStatus => {
            let report: MemberStatusReport = call_rpc(url, method, params).await?;
            Output::MemberStatus(report)
        }
        Commands::Status => {
            let result: StatusResult = call_rpc(url, method, params).await?;
            Output::Status(result.status)
        }
        Commands::Start
        | Commands::Stop
        | Commands::Join { .. }
        | Commands::Leave { .. }
        | Commands::Commit => {
            let outcome: OperationOutcome = call_rpc(url, method, params).await?;
            Output::Outcome(outcome)
        }
    };

    Ok(output)
}

async fn run_local(command: &Commands) -> Result<Output> {
    let config = RiakctlConfig::from_env()?;
    let service = RiakService::new(
        Arc::new(SubprocessExecutor::new(
            Arc::new(SystemTimeProvider),
            config.command_timeout,
        )),
        Arc::new(PathResolver::from_config(&config)),
    );

    let output = match command {
        Commands::Available => Output::Available(service.is_available()),
        Commands::Start => Output::Outcome(service.start().await?),
        Commands::Stop => Output::Outcome(service.stop().await?),
        Commands::Join { username, hostname } => {
            Output::Outcome(service.cluster_join(username, hostname).await?)
        }
        Commands::Leave { username, hostname } => {
            Output::Outcome(service.cluster_leave(username, hostname).await?)
        }
        Commands::Plan => Output::Plan(service.cluster_plan().await?),
        Commands::Commit => Output::Outcome(service.cluster_commit().await?),
        Commands::MemberStatus => Output::MemberStatus(service.member_status().await?),
        Commands::Status => Output::Status(service.status().await?),
    };

    Ok(output)
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let output = if cli.local {
        run_local(&cli.command).await?
    } else {
        run_remote(&cli.rpc_url, &cli.command).await?
    };

    println!("{}", output.render());

    Ok(if output.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_join() {
        let cli = Cli::try_parse_from(["riakctl", "join", "riak", "db2.example.com"]).unwrap();

        assert_eq!(
            cli.command,
            Commands::Join {
                username: "riak".to_string(),
                hostname: "db2.example.com".to_string(),
            }
        );
        assert!(!cli.local);
    }

    #[test]
    fn test_parse_local_member_status() {
        let cli = Cli::try_parse_from(["riakctl", "--local", "member-status"]).unwrap();

        assert!(cli.local);
        assert_eq!(cli.command, Commands::MemberStatus);
    }

    #[test]
    fn test_leave_requires_hostname() {
        assert!(Cli::try_parse_from(["riakctl", "leave", "riak"]).is_err());
    }

    #[test]
    fn test_rpc_request_params() {
        let (method, params) = rpc_request(&Commands::Leave {
            username: "riak".to_string(),
            hostname: "db3".to_string(),
        });

        assert_eq!(method, "riak.cluster_leave.v1");
        assert_eq!(params, json!({ "username": "riak", "hostname": "db3" }));

        let (method, params) = rpc_request(&Commands::Plan);
        assert_eq!(method, "riak.cluster_plan.v1");
        assert_eq!(params, json!({}));
    }
}
