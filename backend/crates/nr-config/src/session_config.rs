use crate::{ConfigError, ConfigErrorResult, ConfigSection, DEFAULT_SESSION_COOKIE_NAME};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Name of the cookie carrying the session token
    pub cookie_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: String::from(DEFAULT_SESSION_COOKIE_NAME),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.cookie_name.is_empty() {
            return Err(ConfigError::invalid(
                ConfigSection::Session,
                "session.cookie_name must not be empty",
            ));
        }

        if !self.cookie_name.chars().all(is_cookie_token_char) {
            return Err(ConfigError::invalid(
                ConfigSection::Session,
                format!(
                    "session.cookie_name contains characters not allowed in a cookie name: {}",
                    self.cookie_name
                ),
            ));
        }

        Ok(())
    }
}

/// RFC 6265 `token`: visible ASCII minus separators
fn is_cookie_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+-.^_`|~".contains(c)
}
