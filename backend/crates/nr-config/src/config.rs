use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    DatabaseConfig, HasherConfig, LoggingConfig, SeedConfig, ServerConfig, SessionConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub session: SessionConfig,
    pub seed: SeedConfig,
    pub hasher: HasherConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for NR_CONFIG_DIR env var, else use ./.nurse/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply NR_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir)
                .map_err(|e| ConfigError::io(config_dir.clone(), e))?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;

        toml::from_str(&contents).map_err(|e| ConfigError::toml(path, e))
    }

    /// Get the config directory.
    /// Priority: NR_CONFIG_DIR env var > ./.nurse/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|e| ConfigError::io(DEFAULT_CONFIG_DIR, e))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.session.validate()?;
        self.seed.validate()?;
        self.hasher.validate()?;

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Log file path when file logging is configured
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(filename) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(filename),
            )),
            None => Ok(None),
        }
    }

    /// Seed file path when seeding is configured
    pub fn seed_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.seed.path {
            Some(path) => Ok(Some(Self::config_dir()?.join(path))),
            None => Ok(None),
        }
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        self.server.bind_addr()
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);
        info!(
            "  logging: {} (colored: {}, file: {})",
            self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!("  session: cookie={}", self.session.cookie_name);
        info!(
            "  seed: {}",
            self.seed.path.as_deref().unwrap_or("disabled")
        );
        info!(
            "  hasher: argon2id m={}KiB t={} p={}",
            self.hasher.memory_kib, self.hasher.iterations, self.hasher.parallelism
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("NR_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("NR_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("NR_DATABASE_PATH", &mut self.database.path);

        // Logging
        Self::apply_env_parse("NR_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_string("NR_LOG_DIR", &mut self.logging.dir);
        Self::apply_env_option_string("NR_LOG_FILE", &mut self.logging.file);
        Self::apply_env_bool("NR_LOG_COLORED", &mut self.logging.colored);

        // Session
        Self::apply_env_string("NR_SESSION_COOKIE_NAME", &mut self.session.cookie_name);

        // Seed
        Self::apply_env_option_string("NR_SEED_PATH", &mut self.seed.path);

        // Hasher
        Self::apply_env_parse("NR_HASHER_MEMORY_KIB", &mut self.hasher.memory_kib);
        Self::apply_env_parse("NR_HASHER_ITERATIONS", &mut self.hasher.iterations);
        Self::apply_env_parse("NR_HASHER_PARALLELISM", &mut self.hasher.parallelism);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
