//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod github;
mod repository;

pub use auth::{AuthError, PasswordService, TokenClaims, TokenService};
pub use github::{GithubClient, UpstreamError};
pub use repository::{BaseRepository, PostRepository, ProfileRepository, UserRepository};
