//! Session storage: which users this process holds provider credentials for.
//!
//! Handlers depend on the [`SessionStore`] trait rather than a concrete map,
//! so the in-memory implementation below can be swapped for a managed store
//! without touching the HTTP layer. The in-memory store is intentionally
//! ephemeral: a process restart logs everyone out.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::types::Credential;

/// Keyed credential storage. Keys are the provider's user ids, established
/// on a successful OAuth callback. `put` overwrites; entries are never
/// expired explicitly.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, user_id: &str) -> Option<Credential>;
    async fn put(&self, user_id: &str, credential: Credential);
}

/// Process-local session store backed by a map. Shared across requests of
/// one process instance only; no coordination beyond the map lock is needed
/// since entries are independent per key.
#[derive(Default)]
pub struct InMemorySessionStore {
    entries: RwLock<HashMap<String, Credential>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, user_id: &str) -> Option<Credential> {
        self.entries.read().await.get(user_id).cloned()
    }

    async fn put(&self, user_id: &str, credential: Credential) {
        self.entries
            .write()
            .await
            .insert(user_id.to_string(), credential);
    }
}
