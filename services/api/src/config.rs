//! Server configuration

use anyhow::{Context, Result};
use std::env;

/// HTTP listener configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Create a new ServerConfig from environment variables
    ///
    /// # Environment Variables
    /// - `API_HOST`: bind address (default: "0.0.0.0")
    /// - `API_PORT`: bind port (default: 3001)
    pub fn from_env() -> Result<Self> {
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("API_PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("API_PORT must be a port number, got {:?}", raw))?,
            Err(_) => 3001,
        };

        Ok(Self { host, port })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
