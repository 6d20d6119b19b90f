//! Minimal store doubles for service tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::json;
use uuid::Uuid;

use crate::domain::{Post, Profile, User};
use crate::error::RepoError;
use crate::ports::{
    BaseRepository, GithubClient, PostRepository, ProfileRepository, UpstreamError,
    UserRepository,
};

pub fn user(name: &str) -> User {
    User::new(
        name.to_string(),
        format!("{name}@example.com"),
        "hash".to_string(),
        Some(format!("https://avatars.test/{name}")),
    )
}

/// Map-backed table that counts every call made through the port.
pub struct Table<T> {
    rows: Mutex<HashMap<Uuid, T>>,
    calls: AtomicUsize,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Mutex::new(HashMap::new()),
            calls: AtomicUsize::new(0),
        }
    }
}

impl<T: Clone> Table<T> {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn tick(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn rows(&self) -> Vec<T> {
        self.rows.lock().unwrap().values().cloned().collect()
    }

    fn get(&self, id: Uuid) -> Option<T> {
        self.tick();
        self.rows.lock().unwrap().get(&id).cloned()
    }

    fn put(&self, id: Uuid, row: T) -> T {
        self.tick();
        self.rows.lock().unwrap().insert(id, row.clone());
        row
    }

    fn replace(&self, id: Uuid, row: T) -> Result<T, RepoError> {
        self.tick();
        let mut rows = self.rows.lock().unwrap();
        if !rows.contains_key(&id) {
            return Err(RepoError::NotFound);
        }
        rows.insert(id, row.clone());
        Ok(row)
    }

    fn remove(&self, id: Uuid) -> Result<(), RepoError> {
        self.tick();
        self.rows
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

pub type FakeUsers = Table<User>;
pub type FakePosts = Table<Post>;
pub type FakeProfiles = Table<Profile>;

impl FakeUsers {
    /// Seed a user without counting it as a store call.
    pub fn insert(&self, user: User) -> User {
        self.rows.lock().unwrap().insert(user.id, user.clone());
        user
    }
}

macro_rules! base_repository {
    ($row:ty) => {
        #[async_trait]
        impl BaseRepository<$row, Uuid> for Table<$row> {
            async fn find_by_id(&self, id: Uuid) -> Result<Option<$row>, RepoError> {
                Ok(self.get(id))
            }

            async fn create(&self, entity: $row) -> Result<$row, RepoError> {
                Ok(self.put(entity.id, entity))
            }

            async fn update(&self, entity: $row) -> Result<$row, RepoError> {
                self.replace(entity.id, entity)
            }

            async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
                self.remove(id)
            }
        }
    };
}

base_repository!(User);
base_repository!(Post);
base_repository!(Profile);

#[async_trait]
impl UserRepository for FakeUsers {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        self.tick();
        Ok(self.rows().into_iter().find(|u| u.email == email))
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<User>, RepoError> {
        self.tick();
        Ok(self
            .rows()
            .into_iter()
            .filter(|u| ids.contains(&u.id))
            .collect())
    }
}

#[async_trait]
impl PostRepository for FakePosts {
    async fn find_all_recent(&self) -> Result<Vec<Post>, RepoError> {
        self.tick();
        let mut posts = self.rows();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }
}

#[async_trait]
impl ProfileRepository for FakeProfiles {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Profile>, RepoError> {
        self.tick();
        Ok(self.rows().into_iter().find(|p| p.user_id == user_id))
    }

    async fn find_all(&self) -> Result<Vec<Profile>, RepoError> {
        self.tick();
        Ok(self.rows())
    }

    async fn delete_by_user_id(&self, user_id: Uuid) -> Result<bool, RepoError> {
        self.tick();
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|_, p| p.user_id != user_id);
        Ok(rows.len() != before)
    }
}

/// Knows a single account, `octocat`.
#[derive(Default)]
pub struct FakeGithub;

#[async_trait]
impl GithubClient for FakeGithub {
    async fn recent_repos(&self, username: &str) -> Result<serde_json::Value, UpstreamError> {
        if username == "octocat" {
            Ok(json!([{ "name": "hello-world" }]))
        } else {
            Err(UpstreamError::Status(404))
        }
    }
}
