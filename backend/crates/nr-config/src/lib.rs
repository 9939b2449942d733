mod config;
mod database_config;
mod error;
mod hasher_config;
mod log_level;
mod logging_config;
mod seed_config;
mod server_config;
mod session_config;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult, ConfigSection};
pub use hasher_config::HasherConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use seed_config::SeedConfig;
pub use server_config::ServerConfig;
pub use session_config::SessionConfig;

const CONFIG_DIR_ENV: &str = "NR_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".nurse";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "nurses.db";

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_SESSION_COOKIE_NAME: &str = "NURSE_SESSION";

// Argon2id cost. 19 MiB / 2 passes / 1 lane is the OWASP baseline.
const DEFAULT_HASHER_MEMORY_KIB: u32 = 19 * 1024;
const DEFAULT_HASHER_ITERATIONS: u32 = 2;
const DEFAULT_HASHER_PARALLELISM: u32 = 1;
const MIN_HASHER_MEMORY_KIB: u32 = 8;
const MAX_HASHER_MEMORY_KIB: u32 = 1024 * 1024;
const MIN_HASHER_ITERATIONS: u32 = 1;
const MAX_HASHER_ITERATIONS: u32 = 10;
const MIN_HASHER_PARALLELISM: u32 = 1;
const MAX_HASHER_PARALLELISM: u32 = 16;

#[cfg(test)]
mod tests;
