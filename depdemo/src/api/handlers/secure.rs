//! API-key gated endpoints.
//!
//! Both routes are guarded by the same [`ApiKeyAuth`] extractor; they differ
//! only in how the extractor is declared at the call site and in their
//! payloads. Verification is identical, so a failed key check never reaches
//! either handler body.

use axum::Json;

use crate::api::models::secure::SecureDataResponse;
use crate::auth::ApiKeyAuth;

#[utoipa::path(
    get,
    path = "/secure-data/",
    tag = "secure",
    summary = "Get secure data",
    description = "Requires a valid X-API-Key header",
    responses(
        (status = 200, description = "Access granted", body = SecureDataResponse),
        (status = 401, description = "Missing or invalid API key"),
    ),
    security(("ApiKeyAuth" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn get_secure_data(auth: ApiKeyAuth) -> Json<SecureDataResponse> {
    Json(SecureDataResponse {
        message: "Access granted to secure data".to_string(),
        user_id: auth.user_id,
        data: vec!["secret1".to_string(), "secret2".to_string(), "secret3".to_string()],
    })
}

#[utoipa::path(
    get,
    path = "/secure-data-annotated/",
    tag = "secure",
    summary = "Get secure data (alternative declaration)",
    description = "Same guard as /secure-data/, declared by destructuring the extractor in place",
    responses(
        (status = 200, description = "Access granted", body = SecureDataResponse),
        (status = 401, description = "Missing or invalid API key"),
    ),
    security(("ApiKeyAuth" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn get_secure_data_annotated(ApiKeyAuth { user_id, .. }: ApiKeyAuth) -> Json<SecureDataResponse> {
    Json(SecureDataResponse {
        message: "Access granted to secure data (Annotated version)".to_string(),
        user_id,
        data: vec!["annotated_secret1".to_string(), "annotated_secret2".to_string()],
    })
}
