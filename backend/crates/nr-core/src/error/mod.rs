use crate::ErrorLocation;

use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

/// Failures reported by an [`IdentityStore`](crate::IdentityStore) implementation.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The write would give two identities the same email (case-insensitive)
    #[error("Email already registered: {email} {location}")]
    DuplicateEmail {
        email: String,
        location: ErrorLocation,
    },

    /// An update or delete matched no stored identity
    #[error("Identity {id} not found {location}")]
    NotFound { id: i64, location: ErrorLocation },

    /// The backing storage could not complete the operation
    #[error("Identity store unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn duplicate_email<S: Into<String>>(email: S) -> Self {
        StoreError::DuplicateEmail {
            email: email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(id: i64) -> Self {
        StoreError::NotFound {
            id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unavailable<S: Into<String>>(message: S) -> Self {
        StoreError::Unavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type StoreResult<T> = StdResult<T, StoreError>;
