//! Domain types, error taxonomy, and pure content logic shared by the
//! database and API layers.

pub mod error;
pub mod icons;
pub mod types;
pub mod uploads;
pub mod validate;
