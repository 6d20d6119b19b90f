//! # DevConnect Core
//!
//! The domain layer of the DevConnect backend.
//! Entities, validation rules, ports and the account/post/profile services live here;
//! nothing in this crate knows about HTTP or a concrete database.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::DomainError;
