
use crate::{
    AuthenticationService, CredentialHasher, HasherParams, ProfileService, RegistrationRequest,
    RegistrationService,
};

use nr_core::{Identity, IdentityStore, NewIdentity, StoreError, StoreResult};

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

/// Cheapest Argon2 cost accepted by the hasher, to keep tests fast
pub(crate) fn test_hasher() -> CredentialHasher {
    CredentialHasher::new(HasherParams {
        memory_kib: 8,
        iterations: 1,
        parallelism: 1,
    })
    .unwrap()
}

pub(crate) fn valid_request(email: &str) -> RegistrationRequest {
    RegistrationRequest {
        first_name: "Ana".to_string(),
        last_name: "Lopez".to_string(),
        email: email.to_string(),
        password: "ValidPass123!".to_string(),
        profile_picture: Some(vec![0]),
    }
}

/// Services wired to one shared in-memory store
pub(crate) struct TestServices {
    pub store: Arc<MemoryIdentityStore>,
    pub registration: RegistrationService,
    pub authentication: AuthenticationService,
    pub profiles: ProfileService,
}

pub(crate) fn test_services() -> TestServices {
    let store = Arc::new(MemoryIdentityStore::default());
    let hasher = test_hasher();
    let dyn_store: Arc<dyn IdentityStore> = store.clone();

    TestServices {
        registration: RegistrationService::new(dyn_store.clone(), hasher.clone()),
        authentication: AuthenticationService::new(dyn_store.clone(), hasher.clone()),
        profiles: ProfileService::new(dyn_store, hasher),
        store,
    }
}

#[derive(Default)]
struct MemoryState {
    identities: Vec<Identity>,
    last_id: i64,
}

/// Vec-backed store enforcing the same uniqueness and id rules as SQLite
#[derive(Default)]
pub(crate) struct MemoryIdentityStore {
    state: Mutex<MemoryState>,
}

impl MemoryIdentityStore {
    pub(crate) fn snapshot(&self) -> Vec<Identity> {
        self.state.lock().unwrap().identities.clone()
    }

    /// Insert bypassing the services, as a concurrent writer would
    pub(crate) fn insert_raw(&self, new: NewIdentity) -> Identity {
        let mut state = self.state.lock().unwrap();
        state.last_id += 1;
        let identity = Identity::from_new(state.last_id, new);
        state.identities.push(identity.clone());
        identity
    }
}

#[async_trait]
impl IdentityStore for MemoryIdentityStore {
    async fn create(&self, identity: NewIdentity) -> StoreResult<Identity> {
        let mut state = self.state.lock().unwrap();
        if state
            .identities
            .iter()
            .any(|existing| existing.has_email_ignore_case(&identity.email))
        {
            return Err(StoreError::duplicate_email(identity.email));
        }

        state.last_id += 1;
        let created = Identity::from_new(state.last_id, identity);
        state.identities.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Identity>> {
        let state = self.state.lock().unwrap();
        Ok(state.identities.iter().find(|i| i.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Identity>> {
        let state = self.state.lock().unwrap();
        Ok(state.identities.iter().find(|i| i.email == email).cloned())
    }

    async fn find_by_first_name(&self, first_name: &str) -> StoreResult<Option<Identity>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .identities
            .iter()
            .find(|i| i.first_name.eq_ignore_ascii_case(first_name))
            .cloned())
    }

    async fn exists_by_email(&self, email: &str) -> StoreResult<bool> {
        let state = self.state.lock().unwrap();
        Ok(state.identities.iter().any(|i| i.has_email_ignore_case(email)))
    }

    async fn exists_by_id(&self, id: i64) -> StoreResult<bool> {
        let state = self.state.lock().unwrap();
        Ok(state.identities.iter().any(|i| i.id == id))
    }

    async fn list(&self) -> StoreResult<Vec<Identity>> {
        Ok(self.snapshot())
    }

    async fn count(&self) -> StoreResult<u64> {
        Ok(self.state.lock().unwrap().identities.len() as u64)
    }

    async fn update(&self, identity: &Identity) -> StoreResult<()> {
        let mut state = self.state.lock().unwrap();
        if state
            .identities
            .iter()
            .any(|i| i.id != identity.id && i.has_email_ignore_case(&identity.email))
        {
            return Err(StoreError::duplicate_email(identity.email.clone()));
        }

        let slot = state
            .identities
            .iter_mut()
            .find(|i| i.id == identity.id)
            .ok_or_else(|| StoreError::not_found(identity.id))?;
        *slot = identity.clone();
        Ok(())
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.identities.len();
        state.identities.retain(|i| i.id != id);
        if state.identities.len() == before {
            return Err(StoreError::not_found(id));
        }
        Ok(())
    }
}

/// Store whose every call fails as if the database were down
pub(crate) struct UnavailableStore;

#[async_trait]
impl IdentityStore for UnavailableStore {
    async fn create(&self, _identity: NewIdentity) -> StoreResult<Identity> {
        Err(StoreError::unavailable("disk I/O error"))
    }

    async fn find_by_id(&self, _id: i64) -> StoreResult<Option<Identity>> {
        Err(StoreError::unavailable("disk I/O error"))
    }

    async fn find_by_email(&self, _email: &str) -> StoreResult<Option<Identity>> {
        Err(StoreError::unavailable("disk I/O error"))
    }

    async fn find_by_first_name(&self, _first_name: &str) -> StoreResult<Option<Identity>> {
        Err(StoreError::unavailable("disk I/O error"))
    }

    async fn exists_by_email(&self, _email: &str) -> StoreResult<bool> {
        Err(StoreError::unavailable("disk I/O error"))
    }

    async fn exists_by_id(&self, _id: i64) -> StoreResult<bool> {
        Err(StoreError::unavailable("disk I/O error"))
    }

    async fn list(&self) -> StoreResult<Vec<Identity>> {
        Err(StoreError::unavailable("disk I/O error"))
    }

    async fn count(&self) -> StoreResult<u64> {
        Err(StoreError::unavailable("disk I/O error"))
    }

    async fn update(&self, _identity: &Identity) -> StoreResult<()> {
        Err(StoreError::unavailable("disk I/O error"))
    }

    async fn delete(&self, _id: i64) -> StoreResult<()> {
        Err(StoreError::unavailable("disk I/O error"))
    }
}
