use crate::{ConfigError, ConfigErrorResult, ConfigSection, DEFAULT_HOST, DEFAULT_PORT, MIN_PORT};

use serde::Deserialize;

/// Listener for the nurse HTTP API
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface or hostname to bind
    pub host: String,
    /// 0 asks the OS for a free port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let host = self.host.trim();
        if host.is_empty() {
            return Err(Self::invalid("server.host must not be empty"));
        }
        if host.contains(char::is_whitespace) || host.contains('/') {
            return Err(Self::invalid(format!(
                "server.host must be an address or hostname, got '{}'",
                self.host
            )));
        }

        let privileged = (1..MIN_PORT).contains(&self.port);
        if privileged {
            return Err(Self::invalid(format!(
                "server.port must be 0 (auto) or >= {}, got {}",
                MIN_PORT, self.port
            )));
        }

        Ok(())
    }

    /// `host:port` as handed to the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host.trim(), self.port)
    }

    #[track_caller]
    fn invalid<S: Into<String>>(message: S) -> ConfigError {
        ConfigError::invalid(ConfigSection::Server, message)
    }
}
