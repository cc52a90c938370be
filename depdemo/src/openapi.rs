//! OpenAPI documentation configuration.
//!
//! The spec is auto-generated from the handler annotations and served as an
//! interactive UI at `/docs`.

use utoipa::{
    Modify, OpenApi,
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
};

use crate::api;

/// Security scheme for the secure endpoints (`X-API-Key` header).
struct ApiKeySecurityAddon;

impl Modify for ApiKeySecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.security_schemes.insert(
                "ApiKeyAuth".to_string(),
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("X-API-Key"))),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Dependency Composition Demo",
        description = "A demonstration of reusable request-scoped dependencies: shared pagination, API key verification, and chained service construction",
    ),
    modifiers(&ApiKeySecurityAddon),
    paths(
        api::handlers::index::root,
        api::handlers::catalog::read_items,
        api::handlers::catalog::read_users,
        api::handlers::catalog::read_products,
        api::handlers::secure::get_secure_data,
        api::handlers::secure::get_secure_data_annotated,
        api::handlers::stats::get_user_stats,
    )
)]
pub struct ApiDoc;
