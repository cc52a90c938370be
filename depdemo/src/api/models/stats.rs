//! Response models for the user statistics endpoint.

use serde::Serialize;
use utoipa::ToSchema;

/// Fixed statistics payload; the demo never computes these.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct UserStats {
    pub active_users: i64,
    pub new_users: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserStatsResponse {
    pub message: String,
    /// Token of the service the chained provider built for this request.
    pub service_used: String,
    pub stats: UserStats,
}
