//! In-Memory User Repository
//!
//! Reference implementation of the UserRepository trait. Records are keyed by
//! the canonical id string in a sharded concurrent map, so each `save` or
//! `find_by_id` is atomic for its key.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::{RepositoryError, User, UserId, UserRepository};

/// In-memory user repository.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: DashMap<String, User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored user, ordered by id.
    pub fn all(&self) -> Vec<User> {
        let mut users: Vec<User> = self
            .users
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        users.sort_by_key(|user| user.id().value());
        users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Drop every stored user.
    pub fn clear(&self) {
        self.users.clear();
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: &User) -> Result<(), RepositoryError> {
        self.users.insert(user.id().value(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        Ok(self.users.get(&id.value()).map(|entry| entry.value().clone()))
    }
}
