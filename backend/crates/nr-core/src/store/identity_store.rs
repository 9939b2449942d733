//! Storage contract consumed by the nurse services.
//!
//! Any persistence technology qualifies as long as it keeps the email
//! uniqueness rule atomic: two concurrent creates for the same email
//! (compared case-insensitively) must leave exactly one record, and the
//! loser must receive [`StoreError::DuplicateEmail`](crate::StoreError).
//! Ids are assigned by the store and never reused after a delete.

use crate::{Identity, NewIdentity, StoreResult};

use async_trait::async_trait;

#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Persist a new identity and return it with its assigned id
    async fn create(&self, identity: NewIdentity) -> StoreResult<Identity>;

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Identity>>;

    /// Exact, case-sensitive email lookup
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Identity>>;

    /// Case-insensitive first name lookup; lowest id wins when several match
    async fn find_by_first_name(&self, first_name: &str) -> StoreResult<Option<Identity>>;

    /// Case-insensitive email existence check
    async fn exists_by_email(&self, email: &str) -> StoreResult<bool>;

    async fn exists_by_id(&self, id: i64) -> StoreResult<bool>;

    /// Snapshot of all identities ordered by id
    async fn list(&self) -> StoreResult<Vec<Identity>>;

    async fn count(&self) -> StoreResult<u64>;

    /// Overwrite every mutable field of an existing identity
    async fn update(&self, identity: &Identity) -> StoreResult<()>;

    async fn delete(&self, id: i64) -> StoreResult<()>;
}
