use axum::{extract::FromRequestParts, http::request::Parts};
use tracing::{debug, instrument};

use crate::errors::{Error, Result};

/// Request header carrying the client credential.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Static allow-list of accepted keys. Configuration data, not process state.
pub const VALID_API_KEYS: [&str; 2] = ["secret-key-123", "test-key-456"];

/// Authenticated request context produced by a successful key check.
///
/// Declared as a handler parameter so secure endpoints never see
/// unauthenticated requests; the rejection surfaces as the terminal 401
/// response before the handler body runs.
#[derive(Debug, Clone)]
pub struct ApiKeyAuth {
    pub api_key: String,
    /// Owner of the key. A real service would look this up; the demo pins it.
    pub user_id: String,
}

/// Check the `X-API-Key` header against the allow-list.
///
/// A missing header is rejected with the same 401/challenge as an unknown
/// key, just with its own detail message.
fn verify_api_key(parts: &Parts) -> Result<ApiKeyAuth> {
    let api_key = parts
        .headers
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or(Error::MissingApiKey)?;

    if !VALID_API_KEYS.contains(&api_key) {
        return Err(Error::InvalidApiKey);
    }

    debug!("authenticated api key");
    Ok(ApiKeyAuth {
        api_key: api_key.to_string(),
        user_id: "user-123".to_string(),
    })
}

impl<S> FromRequestParts<S> for ApiKeyAuth
where
    S: Send + Sync,
{
    type Rejection = Error;

    #[instrument(skip(parts, _state))]
    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        verify_api_key(parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts_with_key(key: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/secure-data/");
        if let Some(key) = key {
            builder = builder.header(API_KEY_HEADER, key);
        }
        builder.body(()).expect("build request").into_parts().0
    }

    #[test]
    fn accepts_both_allow_listed_keys() {
        for key in VALID_API_KEYS {
            let auth = verify_api_key(&parts_with_key(Some(key))).expect("valid key");
            assert_eq!(auth.api_key, key);
            assert_eq!(auth.user_id, "user-123");
        }
    }

    #[test]
    fn rejects_unknown_key() {
        let err = verify_api_key(&parts_with_key(Some("wrong"))).unwrap_err();
        assert!(matches!(err, Error::InvalidApiKey));
        assert_eq!(err.user_message(), "Invalid API Key");
    }

    #[test]
    fn rejects_missing_header() {
        let err = verify_api_key(&parts_with_key(None)).unwrap_err();
        assert!(matches!(err, Error::MissingApiKey));
    }
}
