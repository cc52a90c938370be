//! Response models for the fabricated listing endpoints.

use serde::Serialize;
use utoipa::ToSchema;

/// A single fabricated id/name entry.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListEntry {
    pub id: i64,
    pub name: String,
}

impl ListEntry {
    /// Fabricate `limit` entries starting at `skip`, named `"{label} {id}"`.
    pub fn fabricate(label: &str, skip: i64, limit: i64) -> Vec<Self> {
        (skip..skip.saturating_add(limit))
            .map(|id| Self {
                id,
                name: format!("{label} {id}"),
            })
            .collect()
    }
}

/// Effective pagination window echoed back in listing responses.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct WindowParams {
    pub skip: i64,
    pub limit: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ItemsResponse {
    pub message: String,
    pub params: WindowParams,
    pub items: Vec<ListEntry>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UsersResponse {
    pub message: String,
    pub params: WindowParams,
    pub users: Vec<ListEntry>,
}

/// The product listing echoes its window inline rather than nested.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductsResponse {
    pub message: String,
    pub skip: i64,
    pub limit: i64,
    pub products: Vec<ListEntry>,
}
