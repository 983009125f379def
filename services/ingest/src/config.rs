//! Ingestion service configuration (env-driven).

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use anyhow::{Context, Result};

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address both listeners bind to.
    pub bind_host: IpAddr,

    /// Port for the ingestion API.
    pub port: u16,

    /// Port for the Prometheus exporter.
    pub metrics_port: u16,

    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Per-request timeout on the API server.
    pub request_timeout: Duration,

    /// How long to wait for servers to drain on shutdown.
    pub shutdown_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            metrics_port: 9090,
            log_level: "info".to_string(),
            request_timeout: Duration::from_secs(15),
            shutdown_timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let bind_host = std::env::var("FLEET_BIND_HOST")
            .ok()
            .filter(|v| !v.is_empty())
            .map(|v| v.parse())
            .transpose()
            .context("FLEET_BIND_HOST must be an IP address.")?
            .unwrap_or(defaults.bind_host);

        let port: u16 = std::env::var("PORT")
            .ok()
            .filter(|v| !v.is_empty())
            .map(|v| v.parse())
            .transpose()
            .context("PORT must be a port number.")?
            .unwrap_or(defaults.port);

        let metrics_port: u16 = std::env::var("METRICS_PORT")
            .ok()
            .filter(|v| !v.is_empty())
            .map(|v| v.parse())
            .transpose()
            .context("METRICS_PORT must be a port number.")?
            .unwrap_or(defaults.metrics_port);

        let log_level = std::env::var("FLEET_LOG_LEVEL").unwrap_or(defaults.log_level);

        let request_timeout = std::env::var("FLEET_REQUEST_TIMEOUT_SECS")
            .ok()
            .map(|v| v.parse())
            .transpose()
            .context("FLEET_REQUEST_TIMEOUT_SECS must be an integer (seconds).")?
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout);

        let shutdown_timeout = std::env::var("FLEET_SHUTDOWN_TIMEOUT_SECS")
            .ok()
            .map(|v| v.parse())
            .transpose()
            .context("FLEET_SHUTDOWN_TIMEOUT_SECS must be an integer (seconds).")?
            .map(Duration::from_secs)
            .unwrap_or(defaults.shutdown_timeout);

        Ok(Self {
            bind_host,
            port,
            metrics_port,
            log_level,
            request_timeout,
            shutdown_timeout,
        })
    }

    /// Socket address of the ingestion API.
    pub fn api_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_host, self.port)
    }

    /// Socket address of the metrics exporter.
    pub fn metrics_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_host, self.metrics_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_addresses() {
        let config = Config::default();
        assert_eq!(config.api_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.metrics_addr().to_string(), "0.0.0.0:9090");
        assert_eq!(config.request_timeout, Duration::from_secs(15));
        assert_eq!(config.shutdown_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_custom_host() {
        let config = Config {
            bind_host: "127.0.0.1".parse().unwrap(),
            port: 18080,
            ..Default::default()
        };
        assert_eq!(config.api_addr().to_string(), "127.0.0.1:18080");
    }
}
