//! Password recovery core for the account service backend.
//!
//! Validates a password reset token, locates the user it belongs to,
//! hashes the replacement password and persists the update. Transport
//! (HTTP) and persistence engines live outside this crate; stores and
//! the hasher are injected through the traits in [`repositories`] and
//! [`services`].

pub mod config;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;
