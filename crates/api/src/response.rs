//! Success envelope for API handlers.
//!
//! Every successful response body is `{ "data": ... }`; the error paths in
//! [`crate::error`] produce the matching `{ "error", "code" }` shape. Using
//! [`DataResponse`] instead of ad-hoc `serde_json::json!({ "data": ... })`
//! keeps the payload typed.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: package }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
