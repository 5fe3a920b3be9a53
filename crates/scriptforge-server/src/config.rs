//! Server configuration from the environment
//!
//! Two variables gate everything: `PORT` picks the listen address and
//! `OPENAI_API_KEY` enables the chat endpoint. There is no configuration
//! file and no other persisted state.

use std::net::SocketAddr;
use std::path::PathBuf;

use scriptforge_core::prelude::*;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PUBLIC_DIR: &str = "public";

/// Resolved server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on
    pub port: u16,

    /// Directory of static assets served at the site root
    pub public_dir: PathBuf,

    /// Completion-service credential; `None` disables the chat endpoint
    pub api_key: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            api_key: None,
        }
    }
}

impl ServerConfig {
    /// Read `PORT` and `OPENAI_API_KEY` from the environment.
    ///
    /// An unparsable `PORT` falls back to the default with a warning rather
    /// than failing startup. An empty credential counts as unset.
    pub fn from_env() -> Self {
        let port = match std::env::var("PORT") {
            Ok(raw) => match raw.parse() {
                Ok(port) => port,
                Err(_) => {
                    warn!("ignoring unparsable PORT value {raw:?}, using {DEFAULT_PORT}");
                    DEFAULT_PORT
                }
            },
            Err(_) => DEFAULT_PORT,
        };

        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());

        Self {
            port,
            api_key,
            ..Self::default()
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var("PORT");
        std::env::remove_var("OPENAI_API_KEY");
    }

    #[test]
    #[serial]
    fn test_defaults_when_env_is_empty() {
        clear_env();
        let config = ServerConfig::from_env();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.public_dir, PathBuf::from(DEFAULT_PUBLIC_DIR));
        assert!(config.api_key.is_none());
    }

    #[test]
    #[serial]
    fn test_port_and_key_from_env() {
        clear_env();
        std::env::set_var("PORT", "8123");
        std::env::set_var("OPENAI_API_KEY", "sk-test");
        let config = ServerConfig::from_env();
        assert_eq!(config.port, 8123);
        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_unparsable_port_falls_back() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");
        let config = ServerConfig::from_env();
        assert_eq!(config.port, DEFAULT_PORT);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_empty_api_key_counts_as_unset() {
        clear_env();
        std::env::set_var("OPENAI_API_KEY", "");
        let config = ServerConfig::from_env();
        assert!(config.api_key.is_none());
        clear_env();
    }

    #[test]
    fn test_addr_uses_configured_port() {
        let config = ServerConfig {
            port: 4242,
            ..ServerConfig::default()
        };
        assert_eq!(config.addr().port(), 4242);
    }
}
