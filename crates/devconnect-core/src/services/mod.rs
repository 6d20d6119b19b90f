//! Use cases built on top of the ports.

mod accounts;
mod posts;
mod profiles;

#[cfg(test)]
mod fakes;

pub use accounts::{AccountService, IssuedToken};
pub use posts::PostService;
pub use profiles::ProfileService;
