//! Observability module - request IDs carried through logs and responses.

mod request_id;

pub use request_id::{REQUEST_ID_HEADER, propagate_request_id};
