use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    /// API key header present but not in the allow-list
    #[error("Invalid API Key")]
    InvalidApiKey,

    /// Required API key header missing from the request
    #[error("Missing API key")]
    MissingApiKey,
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidApiKey | Error::MissingApiKey => StatusCode::UNAUTHORIZED,
        }
    }

    /// Returns a user-safe error message, mirrored into the response body
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match &self {
            Error::InvalidApiKey | Error::MissingApiKey => {
                tracing::info!("Authorization error: {}", self);
            }
        }

        let status = self.status_code();
        let body = serde_json::json!({ "detail": self.user_message() });

        // Unauthorized responses carry the challenge hint so clients know
        // which scheme to retry with.
        (status, [(header::WWW_AUTHENTICATE, "API-Key")], Json(body)).into_response()
    }
}

/// Type alias for service operation results
pub type Result<T> = std::result::Result<T, Error>;
