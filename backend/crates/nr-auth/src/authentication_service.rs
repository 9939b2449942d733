//! Email and password login.

use crate::{CredentialHasher, LoginOutcome, Result as ServiceErrorResult};

use nr_core::IdentityStore;

use std::sync::Arc;

use log::{debug, info, warn};

#[derive(Clone)]
pub struct AuthenticationService {
    store: Arc<dyn IdentityStore>,
    hasher: CredentialHasher,
}

impl AuthenticationService {
    pub fn new(store: Arc<dyn IdentityStore>, hasher: CredentialHasher) -> Self {
        Self { store, hasher }
    }

    /// Verify an email/password pair.
    ///
    /// The email must match exactly. An unknown email and a wrong password
    /// both yield [`LoginOutcome::rejected`]; only storage failures are
    /// returned as errors.
    pub async fn login(&self, email: &str, password: &str) -> ServiceErrorResult<LoginOutcome> {
        let Some(identity) = self.store.find_by_email(email).await? else {
            debug!("Login lookup found no nurse for the submitted email");
            self.hasher.verify_decoy(password);
            warn!("Login rejected");
            return Ok(LoginOutcome::rejected());
        };

        if !self.hasher.verify(password, &identity.credential) {
            warn!("Login rejected");
            return Ok(LoginOutcome::rejected());
        }

        info!("Nurse {} authenticated", identity.id);

        Ok(LoginOutcome::authenticated(identity))
    }
}
