//! Chained request-scoped dependencies.
//!
//! A two-stage construction chain: acquire a [`DbConnection`], then build a
//! [`UserService`] from it. Construction is explicit and ordered — plain
//! function composition, no injection container. Nothing here performs real
//! I/O; the fabricated tokens only demonstrate that one dependency's output
//! feeds the next dependency's construction.

/// Opaque handle standing in for a database connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConnection(String);

impl DbConnection {
    /// Fabricate a connection token. Stage 1 of the chain: no inputs.
    pub fn acquire() -> Self {
        tracing::debug!("acquiring db connection");
        Self("database_connection_123".to_string())
    }

    pub fn token(&self) -> &str {
        &self.0
    }
}

/// Service handle derived from a specific [`DbConnection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserService(String);

impl UserService {
    /// Build a service from the connection it will use. Stage 2 of the
    /// chain: the token always reflects the exact connection passed in.
    pub fn new(db: &DbConnection) -> Self {
        tracing::debug!(connection = db.token(), "creating user service");
        Self(format!("service_with_{}", db.token()))
    }

    pub fn token(&self) -> &str {
        &self.0
    }
}
