//! # depdemo — dependency composition demo service
//!
//! A small axum service demonstrating how reusable request-scoped
//! "dependencies" are shared across endpoints. In axum the mechanism is the
//! extractor: types resolved from the request before the handler body runs.
//!
//! ## The three dependency shapes
//!
//! - **Pagination extractors** ([`api::models::pagination`]): two query
//!   forms sharing one coercing contract, used by the listing endpoints.
//! - **API key verification** ([`auth`]): a [`FromRequestParts`] guard
//!   checking a static allow-list, shared by the secure endpoints.
//! - **Chained construction** ([`services`]): a service built from a
//!   connection, resolved in explicit order inside `/user-stats/`.
//!
//! ## Routes
//!
//! - `/` — endpoint index
//! - `/items/`, `/users/`, `/products/` — fabricated listings
//! - `/secure-data/`, `/secure-data-annotated/` — API-key gated
//! - `/user-stats/` — fixed statistics via the chained provider
//! - `/healthz` — liveness
//! - `/docs` — OpenAPI UI
//!
//! [`FromRequestParts`]: axum::extract::FromRequestParts

pub mod api;
pub mod auth;
pub mod config;
pub mod errors;
pub mod openapi;
pub mod services;
pub mod telemetry;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{Level, debug, info};
use utoipa::OpenApi as _;
use utoipa_scalar::{Scalar, Servable};

pub use config::Config;
pub use errors::Error;

/// Build the application router with all routes and middleware.
pub fn build_router() -> Router {
    let router = Router::new()
        .route("/", get(api::handlers::index::root))
        .route("/items/", get(api::handlers::catalog::read_items))
        .route("/users/", get(api::handlers::catalog::read_users))
        .route("/products/", get(api::handlers::catalog::read_products))
        .route("/secure-data/", get(api::handlers::secure::get_secure_data))
        .route(
            "/secure-data-annotated/",
            get(api::handlers::secure::get_secure_data_annotated),
        )
        .route("/user-stats/", get(api::handlers::stats::get_user_stats))
        .route("/healthz", get(|| async { "OK" }))
        .merge(Scalar::with_url("/docs", openapi::ApiDoc::openapi()));

    // Add tracing layer
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    )
}

/// The assembled application, ready to serve.
pub struct Application {
    router: Router,
    config: Config,
}

impl Application {
    /// Create a new application instance.
    pub fn new(config: Config) -> Self {
        debug!("Starting demo service with configuration: {:#?}", config);

        Self {
            router: build_router(),
            config,
        }
    }

    /// Convert application into a test server (for tests)
    #[cfg(test)]
    pub(crate) fn into_test_server(self) -> axum_test::TestServer {
        axum_test::TestServer::new(self.router.into_make_service()).expect("Failed to create test server")
    }

    /// Start serving the application
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!(
            "Demo service listening on http://{}, available at http://localhost:{}",
            bind_addr, self.config.port
        );

        // Run the server with graceful shutdown
        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }
}
