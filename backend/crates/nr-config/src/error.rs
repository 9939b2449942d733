//! Startup configuration failures.
//!
//! Validation errors name the `config.toml` section they came from, so an
//! operator can go straight to the offending table.

use std::fmt;
use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

/// The `config.toml` table an invalid value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSection {
    Server,
    Database,
    Session,
    Seed,
    Hasher,
}

impl fmt::Display for ConfigSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConfigSection::Server => "[server]",
            ConfigSection::Database => "[database]",
            ConfigSection::Session => "[session]",
            ConfigSection::Seed => "[seed]",
            ConfigSection::Hasher => "[hasher]",
        };
        f.write_str(name)
    }
}

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("Invalid {section} setting: {message} {location}")]
    Invalid {
        section: ConfigSection,
        message: String,
        location: ErrorLocation,
    },

    #[error("Cannot access nurse registry config at {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Malformed {path}: {source} {location}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
        location: ErrorLocation,
    },
}

impl ConfigError {
    #[track_caller]
    pub fn invalid<S: Into<String>>(section: ConfigSection, message: S) -> Self {
        ConfigError::Invalid {
            section,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn io<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn toml<P: Into<PathBuf>>(path: P, source: toml::de::Error) -> Self {
        ConfigError::Toml {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Section of an invalid value; `None` for file access and parse errors
    pub fn section(&self) -> Option<ConfigSection> {
        match self {
            ConfigError::Invalid { section, .. } => Some(*section),
            ConfigError::Io { .. } | ConfigError::Toml { .. } => None,
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
