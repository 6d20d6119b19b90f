//! SeaORM entities. Embedded lists are stored as JSONB documents.

pub mod post;
pub mod profile;
pub mod user;
