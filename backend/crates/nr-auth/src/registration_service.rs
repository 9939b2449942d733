//! Nurse registration.

use crate::rules::check_submission;
use crate::{CredentialHasher, RegistrationRequest, Result as ServiceErrorResult, ServiceError};

use nr_core::{Identity, IdentityStore, NewIdentity};

use std::sync::Arc;

use log::{info, warn};

#[derive(Clone)]
pub struct RegistrationService {
    store: Arc<dyn IdentityStore>,
    hasher: CredentialHasher,
}

impl RegistrationService {
    pub fn new(store: Arc<dyn IdentityStore>, hasher: CredentialHasher) -> Self {
        Self { store, hasher }
    }

    /// Validate and persist a new nurse.
    ///
    /// Checks run in a fixed order: email uniqueness first, then email
    /// syntax, password strength and names. A duplicate email is therefore
    /// reported as `Conflict` even when the rest of the request is invalid.
    pub async fn register(&self, request: RegistrationRequest) -> ServiceErrorResult<Identity> {
        if self.store.exists_by_email(&request.email).await? {
            warn!("Registration rejected: email already registered");
            return Err(ServiceError::conflict(request.email));
        }

        if let Err(e) = check_submission(
            &request.first_name,
            &request.last_name,
            &request.email,
            &request.password,
        ) {
            warn!("Registration rejected: {}", e);
            return Err(e);
        }

        let credential = self.hasher.hash(&request.password)?;

        // The store's unique constraint settles races between concurrent
        // registrations; the loser comes back as DuplicateEmail -> Conflict.
        let identity = self
            .store
            .create(NewIdentity {
                first_name: request.first_name,
                last_name: request.last_name,
                email: request.email,
                credential,
                profile_picture: request.profile_picture,
            })
            .await?;

        info!("Registered nurse {}", identity.id);

        Ok(identity)
    }
}
