//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- JWT session-token generation and validation.
//! - [`cookie`] -- the `token` cookie the dashboard authenticates with.

pub mod cookie;
pub mod jwt;
pub mod password;
