//! # DevConnect API Server
//!
//! Actix-web application: routes, extractors, error mapping and wiring.
//! The binary in `main.rs` only loads configuration and starts the server.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod state;
pub mod telemetry;
