//! In-memory repositories - used when no database is configured, and in tests.
//!
//! Note: Data is lost on process restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use devconnect_core::domain::{Post, Profile, User};
use devconnect_core::error::RepoError;
use devconnect_core::ports::{BaseRepository, PostRepository, ProfileRepository, UserRepository};

/// Records that can live in an [`InMemoryStore`].
pub trait Keyed: Clone + Send + Sync + 'static {
    fn key(&self) -> Uuid;
}

impl Keyed for User {
    fn key(&self) -> Uuid {
        self.id
    }
}

impl Keyed for Post {
    fn key(&self) -> Uuid {
        self.id
    }
}

impl Keyed for Profile {
    fn key(&self) -> Uuid {
        self.id
    }
}

/// A table kept in a `HashMap` behind an async `RwLock`.
pub struct InMemoryStore<T> {
    rows: RwLock<HashMap<Uuid, T>>,
}

impl<T> InMemoryStore<T> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }
}

impl<T> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Keyed> InMemoryStore<T> {
    async fn snapshot(&self) -> Vec<T> {
        self.rows.read().await.values().cloned().collect()
    }
}

pub type InMemoryUserRepository = InMemoryStore<User>;
pub type InMemoryPostRepository = InMemoryStore<Post>;
pub type InMemoryProfileRepository = InMemoryStore<Profile>;

#[async_trait]
impl<T: Keyed> BaseRepository<T, Uuid> for InMemoryStore<T> {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, RepoError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn create(&self, entity: T) -> Result<T, RepoError> {
        let mut rows = self.rows.write().await;
        if rows.contains_key(&entity.key()) {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }
        rows.insert(entity.key(), entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: T) -> Result<T, RepoError> {
        let mut rows = self.rows.write().await;
        match rows.get_mut(&entity.key()) {
            Some(slot) => {
                *slot = entity.clone();
                Ok(entity)
            }
            None => Err(RepoError::NotFound),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.rows
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        Ok(self
            .rows
            .read()
            .await
            .values()
            .find(|u| u.email.to_lowercase() == email.to_lowercase())
            .cloned())
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<User>, RepoError> {
        let rows = self.rows.read().await;
        Ok(ids.iter().filter_map(|id| rows.get(id).cloned()).collect())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_all_recent(&self) -> Result<Vec<Post>, RepoError> {
        let mut posts = self.snapshot().await;
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Profile>, RepoError> {
        Ok(self
            .rows
            .read()
            .await
            .values()
            .find(|p| p.user_id == user_id)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Profile>, RepoError> {
        let mut profiles = self.snapshot().await;
        profiles.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(profiles)
    }

    async fn delete_by_user_id(&self, user_id: Uuid) -> Result<bool, RepoError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|_, p| p.user_id != user_id);
        Ok(rows.len() < before)
    }
}
