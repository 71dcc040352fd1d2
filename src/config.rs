use anyhow::{Context, Result};
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 8080));

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub log_rewards: bool, // per-request breakdown at info level
}

impl ServerConfig {
    /// Reads `BIND_ADDR` and `LOG_REWARDS`.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            std::env::var("BIND_ADDR").ok(),
            std::env::var("LOG_REWARDS").ok(),
        )
    }

    pub fn from_vars(bind_addr: Option<String>, log_rewards: Option<String>) -> Result<Self> {
        let bind_addr = match bind_addr {
            Some(raw) => raw
                .parse::<SocketAddr>()
                .with_context(|| format!("invalid BIND_ADDR {:?}", raw))?,
            None => DEFAULT_BIND_ADDR,
        };

        Ok(Self {
            bind_addr,
            log_rewards: log_rewards.as_deref() == Some("1"),
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            log_rewards: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = ServerConfig::from_vars(None, None).unwrap();
        assert_eq!(cfg.bind_addr, ServerConfig::default().bind_addr);
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:8080");
        assert!(!cfg.log_rewards);
    }

    #[test]
    fn test_overrides() {
        let cfg =
            ServerConfig::from_vars(Some("127.0.0.1:9000".into()), Some("1".into())).unwrap();
        assert_eq!(cfg.bind_addr.port(), 9000);
        assert!(cfg.log_rewards);
    }

    #[test]
    fn test_only_one_enables_logging() {
        let cfg = ServerConfig::from_vars(None, Some("true".into())).unwrap();
        assert!(!cfg.log_rewards);
    }

    #[test]
    fn test_bad_addr() {
        let err = ServerConfig::from_vars(Some("not-an-addr".into()), None).unwrap_err();
        assert!(err.to_string().contains("BIND_ADDR"));
    }
}
