use nr_core::StoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Tagged failures returned by the nurse services.
///
/// Every variant is a returned value; nothing in the service layer panics
/// on bad input or storage failure.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Email already registered: {email} {location}")]
    Conflict {
        email: String,
        location: ErrorLocation,
    },

    #[error("Invalid email: {email} {location}")]
    InvalidEmail {
        email: String,
        location: ErrorLocation,
    },

    #[error("Invalid password {location}")]
    InvalidPassword { location: ErrorLocation },

    #[error("Invalid {field}: must not be empty {location}")]
    InvalidName {
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("Nurse not found with id {id} {location}")]
    NotFound { id: i64, location: ErrorLocation },

    #[error("Nurse not found with name {name} {location}")]
    NameNotFound {
        name: String,
        location: ErrorLocation,
    },

    #[error("Identity store unavailable: {message} {location}")]
    StoreUnavailable {
        message: String,
        location: ErrorLocation,
    },

    #[error("Credential hashing failed: {message} {location}")]
    Hashing {
        message: String,
        location: ErrorLocation,
    },
}

impl ServiceError {
    #[track_caller]
    pub fn conflict<S: Into<String>>(email: S) -> Self {
        Self::Conflict {
            email: email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_email<S: Into<String>>(email: S) -> Self {
        Self::InvalidEmail {
            email: email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_password() -> Self {
        Self::InvalidPassword {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_name(field: &'static str) -> Self {
        Self::InvalidName {
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(id: i64) -> Self {
        Self::NotFound {
            id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn name_not_found<S: Into<String>>(name: S) -> Self {
        Self::NameNotFound {
            name: name.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn hashing<S: Into<String>>(message: S) -> Self {
        Self::Hashing {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StoreError> for ServiceError {
    #[track_caller]
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicateEmail { email, .. } => Self::Conflict {
                email,
                location: ErrorLocation::from(Location::caller()),
            },
            StoreError::NotFound { id, .. } => Self::NotFound {
                id,
                location: ErrorLocation::from(Location::caller()),
            },
            StoreError::Unavailable { message, .. } => Self::StoreUnavailable {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
