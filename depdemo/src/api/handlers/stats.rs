//! User statistics endpoint demonstrating the two-stage dependency chain.

use axum::Json;

use crate::api::models::stats::{UserStats, UserStatsResponse};
use crate::services::{DbConnection, UserService};

#[utoipa::path(
    get,
    path = "/user-stats/",
    tag = "stats",
    summary = "Get user statistics",
    description = "Fixed statistics payload; the service token shows the chained construction",
    responses(
        (status = 200, description = "User statistics", body = UserStatsResponse),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_user_stats() -> Json<UserStatsResponse> {
    // Ordered construction: the service is built from the exact connection
    // acquired for this request.
    let db = DbConnection::acquire();
    let service = UserService::new(&db);

    Json(UserStatsResponse {
        message: "User statistics".to_string(),
        service_used: service.token().to_string(),
        stats: UserStats {
            active_users: 150,
            new_users: 25,
        },
    })
}
