use crate::SessionRegistry;

use nr_auth::{AuthenticationService, CredentialHasher, ProfileService, RegistrationService};
use nr_core::IdentityStore;

use std::sync::Arc;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn IdentityStore>,
    pub registration: RegistrationService,
    pub authentication: AuthenticationService,
    pub profiles: ProfileService,
    pub sessions: SessionRegistry,
    pub cookie_name: Arc<str>,
}

impl AppState {
    /// Wire the three services to one store and one hasher
    pub fn new(store: Arc<dyn IdentityStore>, hasher: CredentialHasher, cookie_name: &str) -> Self {
        Self {
            registration: RegistrationService::new(store.clone(), hasher.clone()),
            authentication: AuthenticationService::new(store.clone(), hasher.clone()),
            profiles: ProfileService::new(store.clone(), hasher),
            sessions: SessionRegistry::new(),
            cookie_name: Arc::from(cookie_name),
            store,
        }
    }
}
