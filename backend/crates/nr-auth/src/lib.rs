pub mod authentication_service;
pub mod credential_hasher;
pub mod error;
pub mod hasher_params;
pub mod login_outcome;
pub mod profile_service;
pub mod profile_update;
pub mod registration_request;
pub mod registration_service;
mod rules;
pub mod session_binding;

pub use authentication_service::AuthenticationService;
pub use credential_hasher::CredentialHasher;
pub use error::{Result, ServiceError};
pub use hasher_params::HasherParams;
pub use login_outcome::LoginOutcome;
pub use profile_service::ProfileService;
pub use profile_update::ProfileUpdate;
pub use registration_request::RegistrationRequest;
pub use registration_service::RegistrationService;
pub use session_binding::SessionBinding;

#[cfg(test)]
mod tests;
