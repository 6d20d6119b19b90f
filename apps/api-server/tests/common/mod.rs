//! Shared wiring for the HTTP contract tests.

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;
use serde_json::json;

use api_server::state::{AppState, Repositories};
use devconnect_core::domain::User;
use devconnect_core::ports::{
    BaseRepository, GithubClient, TokenService, UpstreamError, UserRepository,
};
use devconnect_infra::{Argon2PasswordService, JwtConfig, JwtTokenService};

/// Answers for `octocat`, reports 404 for everyone else.
pub struct StubGithub;

#[async_trait]
impl GithubClient for StubGithub {
    async fn recent_repos(&self, username: &str) -> Result<serde_json::Value, UpstreamError> {
        match username {
            "octocat" => Ok(json!([{ "name": "hello-world", "owner": { "login": "octocat" } }])),
            "down" => Err(UpstreamError::Transport("connection refused".to_string())),
            _ => Err(UpstreamError::Status(404)),
        }
    }
}

pub struct TestContext {
    pub state: web::Data<AppState>,
    pub users: Arc<dyn UserRepository>,
    pub tokens: Arc<JwtTokenService>,
}

impl TestContext {
    pub fn new() -> Self {
        let repos = Repositories::in_memory();
        let users = repos.users.clone();
        let tokens = Arc::new(JwtTokenService::new(JwtConfig {
            secret: "test-secret".to_string(),
            ..JwtConfig::default()
        }));

        let state = AppState::from_parts(
            repos,
            tokens.clone(),
            Arc::new(Argon2PasswordService::new()),
            Arc::new(StubGithub),
        );

        Self {
            state: web::Data::new(state),
            users,
            tokens,
        }
    }

    /// Store a user directly and return it with a bearer header value.
    pub async fn signed_in(&self, name: &str) -> (User, String) {
        let user = self
            .users
            .create(User::new(
                name.to_string(),
                format!("{}@example.com", name.to_lowercase()),
                "unused".to_string(),
                Some(format!("https://avatars.test/{name}")),
            ))
            .await
            .unwrap();
        let token = self.tokens.generate_token(user.id).unwrap();
        (user, format!("Bearer {token}"))
    }
}

/// Build the full application around a [`TestContext`].
macro_rules! app {
    ($ctx:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data($ctx.state.clone())
                .configure(api_server::handlers::configure_routes),
        )
        .await
    };
}
