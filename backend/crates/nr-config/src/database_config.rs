use crate::{ConfigError, ConfigErrorResult, ConfigSection, DEFAULT_DATABASE_FILENAME};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite file, relative to the config directory
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATABASE_FILENAME),
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.path.trim().is_empty() {
            return Err(ConfigError::invalid(
                ConfigSection::Database,
                "database.path must not be empty",
            ));
        }

        if Path::new(&self.path).is_absolute() || self.path.contains("..") {
            return Err(ConfigError::invalid(
                ConfigSection::Database,
                "database.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
