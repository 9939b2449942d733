//! Server-side session markers.
//!
//! A successful login binds a random token to the nurse it authenticated.
//! The token travels to the client as a cookie; everything else stays here.
//! Each nurse holds at most one marker: a new login replaces the previous
//! token, and deleting the nurse drops it. State is process-local.

use nr_auth::SessionBinding;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionMarker {
    pub identity_id: i64,
    pub first_name: String,
    pub issued_at: DateTime<Utc>,
}

#[derive(Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<String, SessionMarker>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a marker for `binding` under a fresh token and return the token.
    ///
    /// Any earlier token of the same nurse stops resolving.
    pub async fn bind(&self, binding: SessionBinding) -> String {
        let token = Uuid::new_v4().to_string();
        let marker = SessionMarker {
            identity_id: binding.identity_id,
            first_name: binding.first_name,
            issued_at: Utc::now(),
        };

        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, existing| existing.identity_id != marker.identity_id);
        sessions.insert(token.clone(), marker);

        token
    }

    /// Drop every marker bound to `identity_id`; returns how many were removed
    pub async fn remove_for_identity(&self, identity_id: i64) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, marker| marker.identity_id != identity_id);

        before - sessions.len()
    }

    pub async fn get(&self, token: &str) -> Option<SessionMarker> {
        self.sessions.read().await.get(token).cloned()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
