//! Configuration loaded from environment variables.

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// SQLite database URL.
    pub database_url: String,
    /// Maximum pooled database connections.
    pub pool_size: u32,
    /// Attempts made to reach the database at startup.
    pub connect_retries: u32,
    /// Deadline for each brain call.
    pub brain_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `DATABASE_URL` | SQLite database URL | `sqlite:roomie.db?mode=rwc` |
    /// | `HOST` | IPv4 or IPv6 literal to bind | `0.0.0.0` |
    /// | `PORT` | Port to listen on | `3000` |
    /// | `DB_POOL_SIZE` | Pooled connections | `20` |
    /// | `DB_CONNECT_RETRIES` | Startup connection attempts | `5` |
    /// | `BRAIN_TIMEOUT_SECS` | Deadline per brain call | `30` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port: u16 = parse_or(&lookup, "PORT", 3000)?;
        let ip: IpAddr = host
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidAddr(host.clone()))?;
        let addr = SocketAddr::new(ip, port);

        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| "sqlite:roomie.db?mode=rwc".to_string());

        let pool_size = parse_or(&lookup, "DB_POOL_SIZE", database::Database::DEFAULT_POOL_SIZE)?;
        let connect_retries = parse_or(&lookup, "DB_CONNECT_RETRIES", 5)?;
        let brain_timeout = Duration::from_secs(parse_or(&lookup, "BRAIN_TIMEOUT_SECS", 30)?);

        Ok(Self {
            addr,
            database_url,
            pool_size,
            connect_retries,
            brain_timeout,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { key, value: raw }),
        None => Ok(default),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid listen address: {0}")]
    InvalidAddr(String),

    #[error("{key} must be a non-negative integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.addr, "0.0.0.0:3000".parse().unwrap());
        assert_eq!(config.database_url, "sqlite:roomie.db?mode=rwc");
        assert_eq!(config.pool_size, 20);
        assert_eq!(config.connect_retries, 5);
        assert_eq!(config.brain_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("BRAIN_TIMEOUT_SECS", "2"),
        ])
        .unwrap();
        assert_eq!(config.addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.brain_timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_invalid_port() {
        let result = config(&[("PORT", "eighty")]);
        assert!(matches!(result, Err(ConfigError::InvalidNumber { key: "PORT", .. })));
    }

    #[test]
    fn test_ipv6_host() {
        let any = config(&[("HOST", "::"), ("PORT", "8080")]).unwrap();
        assert_eq!(any.addr, "[::]:8080".parse().unwrap());

        let loopback = config(&[("HOST", "::1")]).unwrap();
        assert_eq!(loopback.addr, "[::1]:3000".parse().unwrap());
    }

    #[test]
    fn test_hostname_rejected() {
        let result = config(&[("HOST", "localhost")]);
        assert!(matches!(result, Err(ConfigError::InvalidAddr(host)) if host == "localhost"));
    }

    #[test]
    fn test_invalid_host() {
        let result = config(&[("HOST", "not a host")]);
        assert!(matches!(result, Err(ConfigError::InvalidAddr(_))));
    }
}
