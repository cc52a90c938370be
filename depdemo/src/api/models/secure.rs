//! Response models for the API-key gated endpoints.

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct SecureDataResponse {
    pub message: String,
    /// Owner of the presented API key.
    pub user_id: String,
    pub data: Vec<String>,
}
