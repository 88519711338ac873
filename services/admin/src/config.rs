//! Service configuration

use std::env;

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    pub bind_addr: String,
}

impl ServerConfig {
    /// Create a new ServerConfig from environment variables
    pub fn from_env() -> Self {
        let bind_addr = env::var("ADMIN_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3001".to_string());

        Self { bind_addr }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_from_env() {
        let config = ServerConfig::from_env();
        assert_eq!(config.bind_addr, "0.0.0.0:3001");
    }
}
