//! Error handling - maps failures onto `{msg}` / `{errors}` responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode, http::header::ContentType};
use devconnect_core::error::{DomainError, EntityKind, RepoError};
use devconnect_shared::{ErrorsResponse, FieldMessage, MessageResponse};

/// Application-level error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Validation errors: {0:?}")]
    Validation(Vec<FieldMessage>),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        match self {
            AppError::NotFound(msg) | AppError::BadRequest(msg) | AppError::Unauthorized(msg) => {
                response.json(MessageResponse::new(msg.clone()))
            }
            AppError::Validation(errors) => response.json(ErrorsResponse::new(errors.clone())),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                response
                    .insert_header(ContentType::plaintext())
                    .body("Server error")
            }
        }
    }
}

fn not_found_message(entity: EntityKind) -> &'static str {
    match entity {
        EntityKind::Post => "Post not found",
        EntityKind::Comment => "Comment does not exist",
        EntityKind::Profile => "There is no profile for this user",
        EntityKind::User => "User not found",
        EntityKind::Experience => "Experience not found",
        EntityKind::Education => "Education not found",
    }
}

/// Ids that are not UUIDs get their own wording, distinct from a missing record.
fn malformed_id_message(entity: EntityKind) -> &'static str {
    match entity {
        EntityKind::Post => "Post Not Found!!",
        EntityKind::Profile | EntityKind::User => "PROFILE NOT FOUND",
        EntityKind::Comment => "Invalid comment id",
        EntityKind::Experience => "Invalid experience id",
        EntityKind::Education => "Invalid education id",
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity, .. } => match entity {
                EntityKind::Post
                | EntityKind::Comment
                | EntityKind::Experience
                | EntityKind::Education => {
                    AppError::NotFound(not_found_message(entity).to_string())
                }
                EntityKind::Profile | EntityKind::User => {
                    AppError::BadRequest(not_found_message(entity).to_string())
                }
            },
            DomainError::MalformedId { entity, raw } => {
                tracing::debug!(%entity, %raw, "Malformed id");
                AppError::BadRequest(malformed_id_message(entity).to_string())
            }
            DomainError::Validation(fields) => AppError::Validation(
                fields
                    .into_iter()
                    .map(|f| FieldMessage::field(f.param, f.msg))
                    .collect(),
            ),
            DomainError::Forbidden { .. } => {
                AppError::Unauthorized("User is not Authorized!".to_string())
            }
            DomainError::Conflict(msg) => AppError::BadRequest(msg),
            DomainError::Rejected(msg) => AppError::Validation(vec![FieldMessage::general(msg)]),
            DomainError::Upstream(detail) => {
                tracing::debug!("GitHub lookup failed: {}", detail);
                AppError::NotFound("No Github profile found".to_string())
            }
            DomainError::Repository(e) => e.into(),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("Resource not found".to_string()),
            RepoError::Constraint(msg) => AppError::BadRequest(msg),
            RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
