use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::User;
use crate::error::{DomainError, EntityKind};

/// Body of a new post.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewPost {
    #[serde(default)]
    #[validate(length(min = 1, message = "Text is required"))]
    pub text: String,
}

/// Body of a new comment.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewComment {
    #[serde(default)]
    #[validate(length(min = 1, message = "Text is required"))]
    pub text: String,
}

/// A like left on a post. At most one per user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub user: Uuid,
}

/// A comment on a post, carrying a copy of the author's display fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub user: Uuid,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub date: DateTime<Utc>,
}

impl Comment {
    pub fn new(author: &User, text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user: author.id,
            text,
            name: author.name.clone(),
            avatar: author.avatar.clone(),
            date: Utc::now(),
        }
    }
}

/// Post entity. `name` and `avatar` are copied from the author at creation
/// and never refreshed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    #[serde(rename = "user")]
    pub user_id: Uuid,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub likes: Vec<Like>,
    pub comments: Vec<Comment>,
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post authored by `author`.
    pub fn new(author: &User, text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: author.id,
            text,
            name: author.name.clone(),
            avatar: author.avatar.clone(),
            likes: Vec::new(),
            comments: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }

    pub fn is_liked_by(&self, user_id: Uuid) -> bool {
        self.likes.iter().any(|like| like.user == user_id)
    }

    /// Record a like from `user_id` at the front of the list.
    pub fn like(&mut self, user_id: Uuid) -> Result<(), DomainError> {
        if self.is_liked_by(user_id) {
            return Err(DomainError::Conflict("Post already liked!".to_string()));
        }
        self.likes.insert(0, Like { user: user_id });
        Ok(())
    }

    /// Drop the like left by `user_id`.
    pub fn unlike(&mut self, user_id: Uuid) -> Result<(), DomainError> {
        let index = self
            .likes
            .iter()
            .position(|like| like.user == user_id)
            .ok_or_else(|| DomainError::Conflict("Post has not yet been liked".to_string()))?;
        self.likes.remove(index);
        Ok(())
    }

    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.insert(0, comment);
    }

    /// Remove the comment with `comment_id`, provided `caller` wrote it.
    pub fn remove_comment(&mut self, caller: Uuid, comment_id: Uuid) -> Result<Comment, DomainError> {
        let index = self
            .comments
            .iter()
            .position(|c| c.id == comment_id)
            .ok_or_else(|| DomainError::not_found(EntityKind::Comment, comment_id))?;

        if self.comments[index].user != caller {
            return Err(DomainError::Forbidden {
                entity: EntityKind::Comment,
            });
        }

        Ok(self.comments.remove(index))
    }
}
