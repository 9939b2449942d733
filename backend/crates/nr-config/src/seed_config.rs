use crate::{ConfigError, ConfigErrorResult, ConfigSection};

use std::path::Path;

use serde::Deserialize;

/// Optional JSON file of nurses imported into an empty store at startup
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Relative to the config directory
    pub path: Option<String>,
}

impl SeedConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if path.trim().is_empty() {
            return Err(ConfigError::invalid(
                ConfigSection::Seed,
                "seed.path must not be empty when set",
            ));
        }

        if Path::new(path).is_absolute() || path.contains("..") {
            return Err(ConfigError::invalid(
                ConfigSection::Seed,
                "seed.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
