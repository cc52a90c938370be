//! API key authentication.
//!
//! [`ApiKeyAuth`] is the request-scoped credential check shared by the
//! secure endpoints: it resolves before the handler body runs and rejects
//! the request with 401 when the key is missing or not in the allow-list.

mod api_key;

pub use api_key::{API_KEY_HEADER, ApiKeyAuth, VALID_API_KEYS};
