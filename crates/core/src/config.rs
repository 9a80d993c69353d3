// Runtime configuration (environment driven)

use crate::error::{AppError, Result};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

pub const DEFAULT_RPC_HOST: &str = "127.0.0.1";
pub const DEFAULT_RPC_PORT: u16 = 9528;

pub const ENV_RPC_HOST: &str = "RIAKCTL_RPC_HOST";
pub const ENV_RPC_PORT: &str = "RIAKCTL_RPC_PORT";
pub const ENV_LOG_FORMAT: &str = "RIAKCTL_LOG_FORMAT";
pub const ENV_SEARCH_PATH: &str = "RIAKCTL_SEARCH_PATH";
pub const ENV_COMMAND_TIMEOUT_SECS: &str = "RIAKCTL_COMMAND_TIMEOUT_SECS";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Development: pretty, colored
    #[default]
    Pretty,
    /// Production: JSON structured logging
    Json,
}

/// Settings shared by the agent daemon and the CLI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiakctlConfig {
    pub rpc_host: String,
    pub rpc_port: u16,
    pub log_format: LogFormat,
    /// Colon-separated directory list used instead of `PATH` (unexpanded)
    pub search_path: Option<String>,
    /// None = wait for the child process indefinitely
    pub command_timeout: Option<Duration>,
}

impl Default for RiakctlConfig {
    fn default() -> Self {
        Self {
            rpc_host: DEFAULT_RPC_HOST.to_string(),
            rpc_port: DEFAULT_RPC_PORT,
            log_format: LogFormat::default(),
            search_path: None,
            command_timeout: None,
        }
    }
}

impl RiakctlConfig {
    /// Load from process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup (tests inject a map)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        // The agent has no authentication, so it only ever listens on loopback
        if let Some(host) = lookup(ENV_RPC_HOST).filter(|s| !s.is_empty()) {
            let is_loopback = host.parse::<IpAddr>().is_ok_and(|ip| ip.is_loopback());
            if !is_loopback {
                return Err(AppError::Config(format!(
                    "{} must be a loopback IP address, got '{}'",
                    ENV_RPC_HOST, host
                )));
            }
            config.rpc_host = host;
        }

        if let Some(port) = lookup(ENV_RPC_PORT) {
            config.rpc_port = port.parse().map_err(|_| {
                AppError::Config(format!(
                    "{} must be a port number, got '{}'",
                    ENV_RPC_PORT, port
                ))
            })?;
        }

        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            config.log_format = match format.as_str() {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            };
        }

        config.search_path = lookup(ENV_SEARCH_PATH).filter(|s| !s.trim().is_empty());

        if let Some(secs) = lookup(ENV_COMMAND_TIMEOUT_SECS) {
            let secs: u64 = secs.parse().map_err(|_| {
                AppError::Config(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    ENV_COMMAND_TIMEOUT_SECS, secs
                ))
            })?;
            // 0 disables the timeout
            config.command_timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }

        Ok(config)
    }

    pub fn rpc_addr(&self) -> String {
        socket_addr(&self.rpc_host, self.rpc_port)
    }
}

/// `host:port`, with IPv6 hosts bracketed
pub fn socket_addr(host: &str, port: u16) -> String {
    match host.parse::<IpAddr>() {
        Ok(ip) => SocketAddr::new(ip, port).to_string(),
        Err(_) => format!("{}:{}", host, port),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<RiakctlConfig> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        RiakctlConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();

        assert_eq!(config, RiakctlConfig::default());
        assert_eq!(config.rpc_addr(), "127.0.0.1:9528");
        assert!(config.command_timeout.is_none());
        assert!(config.search_path.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            (ENV_RPC_HOST, "127.0.0.2"),
            (ENV_RPC_PORT, "19000"),
            (ENV_LOG_FORMAT, "json"),
            (ENV_SEARCH_PATH, "~/riak/bin:/opt/riak/bin"),
            (ENV_COMMAND_TIMEOUT_SECS, "30"),
        ])
        .unwrap();

        assert_eq!(config.rpc_addr(), "127.0.0.2:19000");
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.search_path.as_deref(), Some("~/riak/bin:/opt/riak/bin"));
        assert_eq!(config.command_timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_rpc_host_must_be_loopback() {
        for host in ["0.0.0.0", "192.168.1.10", "::", "riak.example.com"] {
            let result = load(&[(ENV_RPC_HOST, host)]);
            assert!(
                matches!(result, Err(AppError::Config(ref msg)) if msg.contains(ENV_RPC_HOST)),
                "{host} should be rejected"
            );
        }

        let config = load(&[(ENV_RPC_HOST, "::1")]).unwrap();
        assert_eq!(config.rpc_addr(), "[::1]:9528");
    }

    #[test]
    fn test_zero_timeout_disables() {
        let config = load(&[(ENV_COMMAND_TIMEOUT_SECS, "0")]).unwrap();
        assert!(config.command_timeout.is_none());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let result = load(&[(ENV_RPC_PORT, "not-a-port")]);
        assert!(result.unwrap_err().to_string().contains(ENV_RPC_PORT));

        let result = load(&[(ENV_COMMAND_TIMEOUT_SECS, "-5")]);
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
