//! Shared pagination types for API query parameters.
//!
//! Two declaration forms of the same contract: [`Pagination`] for the
//! general listing endpoints and [`ProductPagination`] with a tighter
//! ceiling for the product listing. Both coerce rather than reject — any
//! input is clamped into range, there is no validation-failure path.

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Default number of items for the general listing endpoints.
pub const DEFAULT_LIMIT: i64 = 100;

/// Maximum number of items for the general listing endpoints.
pub const MAX_LIMIT: i64 = 200;

/// Default number of items for the product listing.
pub const DEFAULT_PRODUCT_LIMIT: i64 = 50;

/// Maximum number of items for the product listing.
pub const MAX_PRODUCT_LIMIT: i64 = 100;

#[inline]
fn clamp_skip(skip: Option<i64>) -> i64 {
    skip.unwrap_or(0).max(0)
}

/// Single clamping rule behind both pagination forms: default when absent,
/// then clamp to `0..=max`. A zero or negative limit yields an empty
/// listing, never an error.
#[inline]
fn clamp_limit(limit: Option<i64>, default_limit: i64, max_limit: i64) -> i64 {
    limit.unwrap_or(default_limit).clamp(0, max_limit)
}

/// Standard pagination parameters for listing endpoints.
///
/// - `skip`: number of items to skip (default: 0)
/// - `limit`: maximum items to return (default: 100, max: 200)
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct Pagination {
    /// Number of items to skip (default: 0)
    #[param(default = 0, minimum = 0)]
    pub skip: Option<i64>,

    /// Maximum number of items to return (default: 100, max: 200)
    #[param(default = 100, minimum = 0, maximum = 200)]
    pub limit: Option<i64>,
}

impl Pagination {
    /// Get the skip value, defaulting to 0 and never negative.
    #[inline]
    pub fn skip(&self) -> i64 {
        clamp_skip(self.skip)
    }

    /// Get the limit value, clamped to `0..=MAX_LIMIT`.
    /// Defaults to DEFAULT_LIMIT if not specified.
    #[inline]
    pub fn limit(&self) -> i64 {
        clamp_limit(self.limit, DEFAULT_LIMIT, MAX_LIMIT)
    }

    /// Get the effective window as a tuple, logging it for observability.
    pub fn window(&self) -> (i64, i64) {
        let (skip, limit) = (self.skip(), self.limit());
        tracing::debug!(skip, limit, "resolved pagination window");
        (skip, limit)
    }
}

/// Pagination parameters for the product listing.
///
/// Same contract as [`Pagination`]; only the default (50) and the ceiling
/// (100) differ.
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct ProductPagination {
    /// Number of items to skip (default: 0)
    #[param(default = 0, minimum = 0)]
    pub skip: Option<i64>,

    /// Maximum number of items to return (default: 50, max: 100)
    #[param(default = 50, minimum = 0, maximum = 100)]
    pub limit: Option<i64>,
}

impl ProductPagination {
    /// Get the skip value, defaulting to 0 and never negative.
    #[inline]
    pub fn skip(&self) -> i64 {
        clamp_skip(self.skip)
    }

    /// Get the limit value, clamped to `0..=MAX_PRODUCT_LIMIT`.
    /// Defaults to DEFAULT_PRODUCT_LIMIT if not specified.
    #[inline]
    pub fn limit(&self) -> i64 {
        clamp_limit(self.limit, DEFAULT_PRODUCT_LIMIT, MAX_PRODUCT_LIMIT)
    }

    /// Get the effective window as a tuple, logging it for observability.
    pub fn window(&self) -> (i64, i64) {
        let (skip, limit) = (self.skip(), self.limit());
        tracing::debug!(skip, limit, "resolved product pagination window");
        (skip, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let p = Pagination::default();
        assert_eq!(p.skip(), 0);
        assert_eq!(p.limit(), DEFAULT_LIMIT);
    }

    #[test]
    fn test_limit_clamping() {
        // Over max is clamped to MAX_LIMIT
        let p = Pagination {
            skip: None,
            limit: Some(1000),
        };
        assert_eq!(p.limit(), MAX_LIMIT);

        // Zero passes through (empty listing, not an error)
        let p = Pagination {
            skip: None,
            limit: Some(0),
        };
        assert_eq!(p.limit(), 0);

        // Negative is clamped to 0
        let p = Pagination {
            skip: None,
            limit: Some(-5),
        };
        assert_eq!(p.limit(), 0);

        // Valid value passes through
        let p = Pagination {
            skip: None,
            limit: Some(150),
        };
        assert_eq!(p.limit(), 150);
    }

    #[test]
    fn test_skip_clamping() {
        // Negative is clamped to 0
        let p = Pagination {
            skip: Some(-10),
            limit: None,
        };
        assert_eq!(p.skip(), 0);

        // Valid value passes through
        let p = Pagination {
            skip: Some(100),
            limit: None,
        };
        assert_eq!(p.skip(), 100);
    }

    #[test]
    fn test_window() {
        let p = Pagination {
            skip: Some(20),
            limit: Some(50),
        };
        assert_eq!(p.window(), (20, 50));
    }

    #[test]
    fn test_product_default_values() {
        let p = ProductPagination::default();
        assert_eq!(p.skip(), 0);
        assert_eq!(p.limit(), DEFAULT_PRODUCT_LIMIT);
    }

    #[test]
    fn test_product_limit_clamping() {
        // Over max is clamped to MAX_PRODUCT_LIMIT
        let p = ProductPagination {
            skip: None,
            limit: Some(1000),
        };
        assert_eq!(p.limit(), MAX_PRODUCT_LIMIT);

        // Valid value passes through
        let p = ProductPagination {
            skip: None,
            limit: Some(30),
        };
        assert_eq!(p.limit(), 30);
    }
}
