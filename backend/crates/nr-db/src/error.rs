use nr_core::StoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::migrate::MigrateError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<MigrateError> for DbError {
    #[track_caller]
    fn from(e: MigrateError) -> Self {
        Self::Migration {
            message: format!("Migration failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Translate a failed nurse write or read into the store contract.
///
/// Unique violations on `nurses.email` become `DuplicateEmail`; anything
/// else means the store could not do its job.
#[track_caller]
pub(crate) fn into_store_error(source: sqlx::Error, email: Option<&str>) -> StoreError {
    if let (sqlx::Error::Database(db), Some(email)) = (&source, email)
        && db.is_unique_violation()
    {
        return StoreError::duplicate_email(email);
    }

    StoreError::unavailable(source.to_string())
}

pub type Result<T> = std::result::Result<T, DbError>;
