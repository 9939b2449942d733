//! Read, update and delete of existing nurses.

use crate::rules::check_submission;
use crate::{CredentialHasher, ProfileUpdate, Result as ServiceErrorResult, ServiceError};

use nr_core::{Identity, IdentityStore};

use std::sync::Arc;

use log::{debug, info, warn};

#[derive(Clone)]
pub struct ProfileService {
    store: Arc<dyn IdentityStore>,
    hasher: CredentialHasher,
}

impl ProfileService {
    pub fn new(store: Arc<dyn IdentityStore>, hasher: CredentialHasher) -> Self {
        Self { store, hasher }
    }

    pub async fn get(&self, id: i64) -> ServiceErrorResult<Identity> {
        debug!("Fetching nurse {}", id);

        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(id))
    }

    pub async fn list(&self) -> ServiceErrorResult<Vec<Identity>> {
        Ok(self.store.list().await?)
    }

    /// First nurse (lowest id) whose first name matches, ignoring case
    pub async fn find_by_name(&self, first_name: &str) -> ServiceErrorResult<Identity> {
        debug!("Looking up nurse by first name");

        self.store
            .find_by_first_name(first_name)
            .await?
            .ok_or_else(|| ServiceError::name_not_found(first_name))
    }

    /// Replace every mutable field of an existing nurse.
    ///
    /// The submission is validated like a registration, except that email
    /// uniqueness is not pre-checked against other nurses. The credential is
    /// always re-hashed from the submitted password.
    pub async fn update(&self, id: i64, update: ProfileUpdate) -> ServiceErrorResult<Identity> {
        let mut identity = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(id))?;

        if let Err(e) = check_submission(
            &update.first_name,
            &update.last_name,
            &update.email,
            &update.password,
        ) {
            warn!("Update of nurse {} rejected: {}", id, e);
            return Err(e);
        }

        let credential = self.hasher.hash(&update.password)?;

        identity.first_name = update.first_name;
        identity.last_name = update.last_name;
        identity.email = update.email;
        identity.credential = credential;
        identity.profile_picture = update.profile_picture;

        // Taking another nurse's email still trips the store's unique
        // constraint and comes back as Conflict with nothing written.
        self.store.update(&identity).await?;

        info!("Updated nurse {}", id);

        Ok(identity)
    }

    pub async fn delete(&self, id: i64) -> ServiceErrorResult<()> {
        if !self.store.exists_by_id(id).await? {
            return Err(ServiceError::not_found(id));
        }

        self.store.delete(id).await?;

        info!("Deleted nurse {}", id);

        Ok(())
    }
}
