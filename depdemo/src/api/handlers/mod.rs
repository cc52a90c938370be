//! HTTP request handlers for all API endpoints.
//!
//! Each handler is a pure function of its resolved extractors: it fabricates
//! a small in-memory listing sized by the pagination window or returns a
//! fixed payload. No handler performs real I/O.
//!
//! - [`catalog`]: the `/items/`, `/users/` and `/products/` listings
//! - [`index`]: the `/` endpoint index
//! - [`secure`]: the API-key gated `/secure-data*` routes
//! - [`stats`]: `/user-stats/` built on the chained provider

pub mod catalog;
pub mod index;
pub mod secure;
pub mod stats;
