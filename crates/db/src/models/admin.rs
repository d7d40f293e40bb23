//! Admin account model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vitrine_core::types::{DbId, Timestamp};

/// An admin row from the `admins` table. Never serialized to the wire
/// directly; use [`AdminPublic`] for responses.
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The subset of admin fields safe to return from the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminPublic {
    pub id: DbId,
    pub email: String,
    pub created_at: Timestamp,
}

impl From<Admin> for AdminPublic {
    fn from(admin: Admin) -> Self {
        Self {
            id: admin.id,
            email: admin.email,
            created_at: admin.created_at,
        }
    }
}

/// DTO for inserting a new admin (password already hashed).
#[derive(Debug, Clone)]
pub struct CreateAdmin {
    pub email: String,
    pub password_hash: String,
}

/// Login request body.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Registration request body. Gated by the shared registration secret.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub secret: Option<String>,
}
