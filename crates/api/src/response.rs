//! Shared response envelope types for admin handlers.
//!
//! Public reads return their payload bare. Admin mutations wrap results in
//! `{ "success": true, "data": ... }` or `{ "success": true, "message": ... }`.

use serde::Serialize;

/// Envelope for successful admin mutations.
///
/// # Example
///
/// ```ignore
/// Ok(Json(SuccessResponse::data(project)))
/// ```
#[derive(Debug, Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }
}

impl SuccessResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
        }
    }
}
