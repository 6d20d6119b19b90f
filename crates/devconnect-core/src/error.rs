//! Domain-level error types.

use std::fmt;

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Kinds of records an error can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    User,
    Post,
    Comment,
    Profile,
    Experience,
    Education,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::User => "user",
            EntityKind::Post => "post",
            EntityKind::Comment => "comment",
            EntityKind::Profile => "profile",
            EntityKind::Experience => "experience",
            EntityKind::Education => "education",
        };
        f.write_str(name)
    }
}

/// A single failed field check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub param: String,
    pub msg: String,
}

impl FieldError {
    pub fn new(param: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            param: param.into(),
            msg: msg.into(),
        }
    }
}

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: EntityKind, id: String },

    #[error("Validation failed: {0:?}")]
    Validation(Vec<FieldError>),

    #[error("Caller does not own this {entity}")]
    Forbidden { entity: EntityKind },

    #[error("Conflict: {0}")]
    Conflict(String),

    /// A request refused as a whole rather than for one field.
    #[error("Rejected: {0}")]
    Rejected(String),

    #[error("Malformed {entity} id: {raw}")]
    MalformedId { entity: EntityKind, raw: String },

    #[error("Upstream request failed: {0}")]
    Upstream(String),

    #[error(transparent)]
    Repository(#[from] RepoError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn not_found(entity: EntityKind, id: impl ToString) -> Self {
        DomainError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = errors
            .errors()
            .iter()
            .flat_map(|(field, kind)| {
                let field = field.to_string();
                match kind {
                    ValidationErrorsKind::Field(errs) => errs
                        .iter()
                        .map(|e| {
                            // Struct-level checks report under "__all__"; their code names the field.
                            let param = if field == "__all__" {
                                e.code.to_string()
                            } else {
                                field.clone()
                            };
                            let msg = e
                                .message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| format!("Invalid value for {param}"));
                            FieldError::new(param, msg)
                        })
                        .collect::<Vec<_>>(),
                    _ => vec![FieldError::new(field, "Invalid value")],
                }
            })
            .collect();

        fields.sort_by(|a, b| a.param.cmp(&b.param));
        DomainError::Validation(fields)
    }
}

impl From<crate::ports::AuthError> for DomainError {
    fn from(err: crate::ports::AuthError) -> Self {
        DomainError::Internal(err.to_string())
    }
}

/// Parse a path identifier, reporting a malformed reference for `entity`.
pub fn parse_id(raw: &str, entity: EntityKind) -> Result<Uuid, DomainError> {
    Uuid::parse_str(raw).map_err(|_| DomainError::MalformedId {
        entity,
        raw: raw.to_string(),
    })
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
