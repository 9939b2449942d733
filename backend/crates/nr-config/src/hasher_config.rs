use crate::{
    ConfigError, ConfigErrorResult, ConfigSection, DEFAULT_HASHER_ITERATIONS,
    DEFAULT_HASHER_MEMORY_KIB, DEFAULT_HASHER_PARALLELISM, MAX_HASHER_ITERATIONS,
    MAX_HASHER_MEMORY_KIB, MAX_HASHER_PARALLELISM, MIN_HASHER_ITERATIONS, MIN_HASHER_MEMORY_KIB,
    MIN_HASHER_PARALLELISM,
};

use serde::Deserialize;

/// Argon2id cost parameters for password hashing
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HasherConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self {
            memory_kib: DEFAULT_HASHER_MEMORY_KIB,
            iterations: DEFAULT_HASHER_ITERATIONS,
            parallelism: DEFAULT_HASHER_PARALLELISM,
        }
    }
}

impl HasherConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_HASHER_PARALLELISM..=MAX_HASHER_PARALLELISM).contains(&self.parallelism) {
            return Err(ConfigError::invalid(
                ConfigSection::Hasher,
                format!(
                    "hasher.parallelism must be {}-{}, got {}",
                    MIN_HASHER_PARALLELISM, MAX_HASHER_PARALLELISM, self.parallelism
                ),
            ));
        }

        if !(MIN_HASHER_ITERATIONS..=MAX_HASHER_ITERATIONS).contains(&self.iterations) {
            return Err(ConfigError::invalid(
                ConfigSection::Hasher,
                format!(
                    "hasher.iterations must be {}-{}, got {}",
                    MIN_HASHER_ITERATIONS, MAX_HASHER_ITERATIONS, self.iterations
                ),
            ));
        }

        if !(MIN_HASHER_MEMORY_KIB..=MAX_HASHER_MEMORY_KIB).contains(&self.memory_kib) {
            return Err(ConfigError::invalid(
                ConfigSection::Hasher,
                format!(
                    "hasher.memory_kib must be {}-{}, got {}",
                    MIN_HASHER_MEMORY_KIB, MAX_HASHER_MEMORY_KIB, self.memory_kib
                ),
            ));
        }

        // Argon2 needs 8 KiB per lane
        if self.memory_kib < MIN_HASHER_MEMORY_KIB * self.parallelism {
            return Err(ConfigError::invalid(
                ConfigSection::Hasher,
                format!(
                    "hasher.memory_kib must be at least {} for parallelism {}, got {}",
                    MIN_HASHER_MEMORY_KIB * self.parallelism,
                    self.parallelism,
                    self.memory_kib
                ),
            ));
        }

        Ok(())
    }
}
