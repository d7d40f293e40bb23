//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` DTOs for the write endpoints that touch the table
//!
//! All wire-facing structs serialize with camelCase field names; that is the
//! JSON contract the dashboard and public site consume.

pub mod about;
pub mod admin;
pub mod content;
pub mod gallery;
pub mod hero;
pub mod package;
pub mod project;
pub mod rating;
pub mod services;
pub mod site_settings;
pub mod why_us;
