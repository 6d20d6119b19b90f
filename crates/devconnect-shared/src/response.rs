//! Standardized API message and error bodies.

use serde::{Deserialize, Serialize};

/// `{ "msg": ... }` - confirmations and single-message errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// One entry of an `errors` list. `param` is absent for errors that are not
/// tied to a request field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    pub msg: String,
}

impl FieldMessage {
    pub fn field(param: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            param: Some(param.into()),
            msg: msg.into(),
        }
    }

    pub fn general(msg: impl Into<String>) -> Self {
        Self {
            param: None,
            msg: msg.into(),
        }
    }
}

/// `{ "errors": [...] }` - validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorsResponse {
    pub errors: Vec<FieldMessage>,
}

impl ErrorsResponse {
    pub fn new(errors: Vec<FieldMessage>) -> Self {
        Self { errors }
    }

    pub fn single(msg: impl Into<String>) -> Self {
        Self::new(vec![FieldMessage::general(msg)])
    }
}
