pub mod error;
pub mod models;
pub mod store;
pub mod validator;

pub use error::{StoreError, StoreResult};
pub use models::identity::Identity;
pub use models::new_identity::NewIdentity;
pub use store::identity_store::IdentityStore;
pub use validator::{MIN_PASSWORD_LENGTH, PASSWORD_SPECIAL_CHARACTERS, Validator};

pub use error_location::ErrorLocation;

#[cfg(test)]
mod tests;
