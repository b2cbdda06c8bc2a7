//! The service's client-facing error taxonomy.
//!
//! Every handler returns [`ApiError`] on failure, and the single
//! [`IntoResponse`] implementation below is the only place where internal
//! outcomes are mapped to HTTP status codes and the `{"error": "<message>"}`
//! body shape. Messages are deliberately terse; the interesting detail
//! (provider status and rejection body, the underlying auth failure) stays on
//! the error value as source data and is logged where it occurs, never echoed
//! to clients.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::spotify::{ProviderError, auth::AuthError};

/// Anything a request handler can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required request field is absent or empty.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// No credential is stored for the addressed user id.
    #[error("User not authenticated")]
    Unauthenticated,

    /// The OAuth callback arrived without an authorization code.
    #[error("No code provided")]
    MissingCode,

    /// The provider refused to turn the authorization code into a token.
    #[error("Failed to obtain access token")]
    TokenExchange(#[source] AuthError),

    /// A Web API call failed; the wrapped error already reads
    /// `Failed to <action>`.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::MissingField(_)
            | ApiError::MissingCode
            | ApiError::TokenExchange(_)
            | ApiError::Provider(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}
