use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::domain::{Comment, Like, NewComment, NewPost, Post, User};
use crate::error::{DomainError, EntityKind};
use crate::ports::{PostRepository, UserRepository};

/// Posts, likes and comments.
#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    users: Arc<dyn UserRepository>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { posts, users }
    }

    async fn author(&self, user_id: Uuid) -> Result<User, DomainError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::User, user_id))
    }

    async fn load(&self, post_id: Uuid) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::Post, post_id))
    }

    pub async fn create_post(&self, caller: Uuid, input: NewPost) -> Result<Post, DomainError> {
        input.validate()?;
        let author = self.author(caller).await?;
        let post = Post::new(&author, input.text);
        Ok(self.posts.create(post).await?)
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.find_all_recent().await?)
    }

    pub async fn get_post(&self, post_id: Uuid) -> Result<Post, DomainError> {
        self.load(post_id).await
    }

    pub async fn delete_post(&self, caller: Uuid, post_id: Uuid) -> Result<(), DomainError> {
        let post = self.load(post_id).await?;
        if !post.is_owned_by(caller) {
            return Err(DomainError::Forbidden {
                entity: EntityKind::Post,
            });
        }
        Ok(self.posts.delete(post.id).await?)
    }

    pub async fn like_post(&self, caller: Uuid, post_id: Uuid) -> Result<Vec<Like>, DomainError> {
        let mut post = self.load(post_id).await?;
        post.like(caller)?;
        Ok(self.posts.update(post).await?.likes)
    }

    pub async fn unlike_post(&self, caller: Uuid, post_id: Uuid) -> Result<Vec<Like>, DomainError> {
        let mut post = self.load(post_id).await?;
        post.unlike(caller)?;
        Ok(self.posts.update(post).await?.likes)
    }

    pub async fn add_comment(
        &self,
        caller: Uuid,
        post_id: Uuid,
        input: NewComment,
    ) -> Result<Vec<Comment>, DomainError> {
        input.validate()?;
        let author = self.author(caller).await?;
        let mut post = self.load(post_id).await?;
        post.add_comment(Comment::new(&author, input.text));
        Ok(self.posts.update(post).await?.comments)
    }

    pub async fn remove_comment(
        &self,
        caller: Uuid,
        post_id: Uuid,
        comment_id: Uuid,
    ) -> Result<Vec<Comment>, DomainError> {
        let mut post = self.load(post_id).await?;
        post.remove_comment(caller, comment_id)?;
        Ok(self.posts.update(post).await?.comments)
    }
}
