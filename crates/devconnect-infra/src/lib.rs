//! # DevConnect Infrastructure
//!
//! Concrete implementations of the ports defined in `devconnect-core`.
//! This crate contains database, authentication and GitHub integrations.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL repositories via SeaORM
//! - without `postgres` - in-memory repositories only

pub mod auth;
pub mod database;
pub mod github;

pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
pub use database::{
    DatabaseConfig, InMemoryPostRepository, InMemoryProfileRepository, InMemoryUserRepository,
};
pub use github::{GithubConfig, HttpGithubClient};

#[cfg(feature = "postgres")]
pub use database::{PostgresPostRepository, PostgresProfileRepository, PostgresUserRepository};
