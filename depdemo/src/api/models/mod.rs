//! API request and response data models.
//!
//! Data structures for HTTP request deserialization and response
//! serialization — these define the public API contract. All models are
//! annotated with `utoipa` for automatic API docs.
//!
//! - [`pagination`]: query-parameter types with coercing accessors
//! - [`listings`]: fabricated id/name listings and their responses
//! - [`secure`]: payloads for the API-key gated endpoints
//! - [`stats`]: the fixed user statistics payload

pub mod listings;
pub mod pagination;
pub mod secure;
pub mod stats;
