#![allow(dead_code)]

use nr_core::NewIdentity;

use sqlx::SqlitePool;

/// In-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    nr_db::connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// A nurse ready to insert; the credential is an opaque placeholder
pub fn create_test_nurse(first_name: &str, email: &str) -> NewIdentity {
    NewIdentity {
        first_name: first_name.to_string(),
        last_name: "Lopez".to_string(),
        email: email.to_string(),
        credential: "$argon2id$v=19$m=8,t=1,p=1$c2FsdHNhbHQ$aGFzaA".to_string(),
        profile_picture: Some(vec![0xFF, 0xD8, 0xFF]),
    }
}
