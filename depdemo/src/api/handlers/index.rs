//! Root endpoint listing the available routes.

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct IndexResponse {
    pub message: String,
    pub endpoints: Vec<String>,
    pub docs: String,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "index",
    summary = "Endpoint index",
    description = "List the demo's endpoints and where the API docs live",
    responses(
        (status = 200, description = "Endpoint index", body = IndexResponse),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn root() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "Dependency composition demo".to_string(),
        endpoints: vec![
            "/items/?skip=0&limit=10".to_string(),
            "/users/?skip=5&limit=20".to_string(),
            "/products/?skip=10&limit=30".to_string(),
            "/secure-data/ (requires X-API-Key header)".to_string(),
            "/secure-data-annotated/ (requires X-API-Key header)".to_string(),
            "/user-stats/".to_string(),
        ],
        docs: "/docs".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use crate::test_utils::create_test_app;
    use axum::http::StatusCode;
    use serde_json::Value;

    #[tokio::test]
    async fn test_index_lists_all_endpoints() {
        let server = create_test_app();

        let response = server.get("/").await;

        response.assert_status(StatusCode::OK);
        let json: Value = response.json();
        assert_eq!(json["docs"], "/docs");
        assert_eq!(json["endpoints"].as_array().expect("endpoints array").len(), 6);
    }
}
