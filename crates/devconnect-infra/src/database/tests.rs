use chrono::Utc;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use uuid::Uuid;

use devconnect_core::domain::{Comment, Like, Post, Profile, SocialLinks, User};
use devconnect_core::error::RepoError;
use devconnect_core::ports::{BaseRepository, PostRepository, ProfileRepository, UserRepository};

use crate::database::entity::post::{self, CommentList, LikeList};
use crate::database::entity::user;
use crate::database::entity::profile::{
    self, EducationList, ExperienceList, SkillList, SocialColumn,
};
use crate::database::postgres_repo::{
    PostgresPostRepository, PostgresProfileRepository, PostgresUserRepository,
};

fn post_model(text: &str, likes: Vec<Like>) -> post::Model {
    post::Model {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        text: text.to_owned(),
        name: "Ada".to_owned(),
        avatar: "https://avatars.test/ada".to_owned(),
        likes: LikeList(likes),
        comments: CommentList::default(),
        created_at: Utc::now().into(),
    }
}

fn profile_model(user_id: Uuid) -> profile::Model {
    profile::Model {
        id: Uuid::new_v4(),
        user_id,
        company: Some("Acme".to_owned()),
        website: None,
        location: None,
        status: "Developer".to_owned(),
        skills: SkillList(vec!["rust".to_owned()]),
        bio: None,
        github_username: Some("octocat".to_owned()),
        social: SocialColumn(SocialLinks::default()),
        experience: ExperienceList::default(),
        education: EducationList::default(),
        created_at: Utc::now().into(),
    }
}

#[tokio::test]
async fn test_find_post_by_id_decodes_embedded_likes() {
    let liker = Uuid::new_v4();
    let model = post_model("Test Post", vec![Like { user: liker }]);
    let post_id = model.id;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model]])
        .into_connection();
    let repo = PostgresPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();
    let post = result.unwrap();

    assert_eq!(post.id, post_id);
    assert_eq!(post.text, "Test Post");
    assert_eq!(post.likes, vec![Like { user: liker }]);
}

#[tokio::test]
async fn test_find_all_recent_returns_rows_in_query_order() {
    let newer = post_model("newer", Vec::new());
    let older = post_model("older", Vec::new());

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![newer, older]])
        .into_connection();
    let repo = PostgresPostRepository::new(db);

    let posts = repo.find_all_recent().await.unwrap();

    let texts: Vec<&str> = posts.iter().map(|p| p.text.as_str()).collect();
    assert_eq!(texts, vec!["newer", "older"]);
}

#[tokio::test]
async fn test_update_post_persists_comments() {
    let author = User::new(
        "Ada".to_owned(),
        "ada@example.com".to_owned(),
        "hash".to_owned(),
        None,
    );
    let mut post = Post::new(&author, "hello".to_owned());
    post.add_comment(Comment::new(&author, "first!".to_owned()));

    let stored = post::Model {
        id: post.id,
        user_id: post.user_id,
        text: post.text.clone(),
        name: post.name.clone(),
        avatar: post.avatar.clone(),
        likes: LikeList::default(),
        comments: CommentList(post.comments.clone()),
        created_at: post.created_at.into(),
    };
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![stored]])
        .into_connection();
    let repo = PostgresPostRepository::new(db);

    let updated = repo.update(post.clone()).await.unwrap();

    assert_eq!(updated.comments, post.comments);
}

#[tokio::test]
async fn test_delete_missing_post_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();
    let repo = PostgresPostRepository::new(db);

    let result = BaseRepository::<Post, Uuid>::delete(&repo, Uuid::new_v4()).await;

    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_find_profile_by_user_id() {
    let user_id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![profile_model(user_id)]])
        .into_connection();
    let repo = PostgresProfileRepository::new(db);

    let profile: Profile = repo.find_by_user_id(user_id).await.unwrap().unwrap();

    assert_eq!(profile.user_id, user_id);
    assert_eq!(profile.skills, vec!["rust"]);
    assert_eq!(profile.githubusername.as_deref(), Some("octocat"));
}

#[tokio::test]
async fn test_delete_by_user_id_reports_removal() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ])
        .into_connection();
    let repo = PostgresProfileRepository::new(db);
    let user_id = Uuid::new_v4();

    assert!(repo.delete_by_user_id(user_id).await.unwrap());
    assert!(!repo.delete_by_user_id(user_id).await.unwrap());
}

#[tokio::test]
async fn test_find_user_by_email_ignores_case() {
    let model = user::Model {
        id: Uuid::new_v4(),
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        password_hash: "hash".to_owned(),
        avatar: "https://avatars.test/ada".to_owned(),
        created_at: Utc::now().into(),
    };
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model.clone()]])
        .into_connection();
    let repo = PostgresUserRepository::new(db);

    let found = repo.find_by_email("Ada@Example.COM").await.unwrap();
    assert_eq!(found.map(|u| u.id), Some(model.id));

    let log = format!("{:?}", repo.db.into_transaction_log());
    assert!(log.contains("LOWER("), "{log}");
    assert!(log.contains("ada@example.com"), "{log}");
}
