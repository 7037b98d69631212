//! API DTOs (Data Transfer Objects)

use serde::Serialize;

/// Save response
#[derive(Debug, Clone, Serialize)]
pub struct SavedResponse {
    pub success: bool,
}

/// Delete response, echoing the normalized name
#[derive(Debug, Clone, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: String,
}
