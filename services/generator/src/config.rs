//! Service configuration.
//!
//! Everything is read from the environment once at startup and handed to the
//! router state; the generation core never looks at the environment itself.

use std::net::SocketAddr;

use anyhow::{Context, Result};

/// Environment variable holding the family tag to generate (`MALO`, `NELO`, ...).
pub const ID_TYPE_VAR: &str = "ID_TYPE_TO_GENERATE";

/// Port override set by the Azure Functions custom handler host.
pub const PORT_VAR: &str = "FUNCTIONS_CUSTOMHANDLER_PORT";

pub const LISTEN_ADDR_VAR: &str = "MALO_LISTEN_ADDR";
pub const LOG_LEVEL_VAR: &str = "MALO_LOG_LEVEL";

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub log_level: String,
    /// Raw family tag; validated per request so a bad value surfaces as 501.
    pub id_type: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let listen_addr = match lookup(PORT_VAR) {
            Some(port) => {
                let port: u16 = port
                    .trim()
                    .parse()
                    .with_context(|| format!("{PORT_VAR} must be a port number, got '{port}'"))?;
                SocketAddr::from(([0, 0, 0, 0], port))
            }
            None => {
                let addr =
                    lookup(LISTEN_ADDR_VAR).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
                addr.parse::<SocketAddr>().with_context(|| {
                    format!("{LISTEN_ADDR_VAR} must be a socket address, got '{addr}'")
                })?
            }
        };

        let log_level = lookup(LOG_LEVEL_VAR).unwrap_or_else(|| "info".to_string());

        let id_type = lookup(ID_TYPE_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        Ok(Self {
            listen_addr,
            log_level,
            id_type,
        })
    }

    /// Configuration for the given family tag with default listen address and log level.
    pub fn with_id_type(id_type: Option<&str>) -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            log_level: "info".to_string(),
            id_type: id_type.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.listen_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(config.log_level, "info");
        assert!(config.id_type.is_none());
    }

    #[test]
    fn test_port_override_wins() {
        let config = Config::from_lookup(lookup(&[
            (PORT_VAR, "7071"),
            (LISTEN_ADDR_VAR, "127.0.0.1:9000"),
        ]))
        .unwrap();
        assert_eq!(config.listen_addr.port(), 7071);
    }

    #[test]
    fn test_listen_addr() {
        let config = Config::from_lookup(lookup(&[(LISTEN_ADDR_VAR, "127.0.0.1:9000")])).unwrap();
        assert_eq!(config.listen_addr.to_string(), "127.0.0.1:9000");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = Config::from_lookup(lookup(&[(PORT_VAR, "http")])).unwrap_err();
        assert!(err.to_string().contains(PORT_VAR));
    }

    #[test]
    fn test_blank_id_type_counts_as_missing() {
        let config = Config::from_lookup(lookup(&[(ID_TYPE_VAR, "  ")])).unwrap();
        assert!(config.id_type.is_none());

        let config = Config::from_lookup(lookup(&[(ID_TYPE_VAR, " nelo ")])).unwrap();
        assert_eq!(config.id_type.as_deref(), Some("nelo"));
    }
}
