//! Authentication middleware extractors.
//!
//! - [`auth::AuthAdmin`] -- Extracts the authenticated admin from the session cookie.

pub mod auth;
