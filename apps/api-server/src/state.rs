//! Application state - shared across all handlers.

use std::sync::Arc;

use devconnect_core::ports::{
    GithubClient, PasswordService, PostRepository, ProfileRepository, TokenService,
    UserRepository,
};
use devconnect_core::services::{AccountService, PostService, ProfileService};
use devconnect_infra::{
    Argon2PasswordService, HttpGithubClient, InMemoryPostRepository, InMemoryProfileRepository,
    InMemoryUserRepository, JwtTokenService,
};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub accounts: AccountService,
    pub posts: PostService,
    pub profiles: ProfileService,
    pub tokens: Arc<dyn TokenService>,
    /// Backend behind the repositories, reported by the health check.
    pub storage: &'static str,
}

/// The three repositories every handler set needs.
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub profiles: Arc<dyn ProfileRepository>,
    pub backend: &'static str,
}

impl Repositories {
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::new()),
            posts: Arc::new(InMemoryPostRepository::new()),
            profiles: Arc::new(InMemoryProfileRepository::new()),
            backend: "memory",
        }
    }

    #[cfg(feature = "postgres")]
    async fn connect(config: &AppConfig) -> Self {
        use devconnect_infra::database::connect;
        use devconnect_infra::{
            PostgresPostRepository, PostgresProfileRepository, PostgresUserRepository,
        };

        let Some(db_config) = config.database.as_ref() else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Self::in_memory();
        };

        match connect(db_config).await {
            Ok(conn) => Self {
                users: Arc::new(PostgresUserRepository::new(conn.clone())),
                posts: Arc::new(PostgresPostRepository::new(conn.clone())),
                profiles: Arc::new(PostgresProfileRepository::new(conn)),
                backend: "postgres",
            },
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                Self::in_memory()
            }
        }
    }

    #[cfg(not(feature = "postgres"))]
    async fn connect(_config: &AppConfig) -> Self {
        tracing::info!("Running without postgres feature - using in-memory repositories");
        Self::in_memory()
    }
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> std::io::Result<Self> {
        let repos = Repositories::connect(config).await;

        let github = HttpGithubClient::new(config.github.clone())
            .map_err(|e| std::io::Error::other(e.to_string()))?;

        let state = Self::from_parts(
            repos,
            Arc::new(JwtTokenService::new(config.jwt.clone())),
            Arc::new(Argon2PasswordService::new()),
            Arc::new(github),
        );

        tracing::info!("Application state initialized");
        Ok(state)
    }

    /// Wire services over already-built ports.
    pub fn from_parts(
        repos: Repositories,
        tokens: Arc<dyn TokenService>,
        passwords: Arc<dyn PasswordService>,
        github: Arc<dyn GithubClient>,
    ) -> Self {
        Self {
            posts: PostService::new(repos.posts, repos.users.clone()),
            profiles: ProfileService::new(repos.profiles, repos.users.clone(), github),
            accounts: AccountService::new(repos.users, passwords, tokens.clone()),
            tokens,
            storage: repos.backend,
        }
    }
}
