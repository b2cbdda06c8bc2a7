//! # Spotify Integration Module
//!
//! Everything that talks to Spotify lives here: the OAuth 2.0 authorization
//! code flow and the handful of Web API calls the service needs. The rest of
//! the application sees typed functions and typed errors, never raw HTTP.
//!
//! ## Layout
//!
//! - [`auth`] - Authorization URL construction, code-for-token exchange,
//!   token refresh, and resolving the calling user's identity. These are the
//!   operations that mint and maintain [`Credential`](crate::types::Credential)s.
//! - [`playlist`] - Authenticated playlist reads (items, the user's playlist
//!   listing) and writes (create a playlist, add tracks to it).
//!
//! ## API coverage
//!
//! - `GET /me` - caller's profile, used to key the session store
//! - `GET /me/playlists` - playlist listing (returned to clients verbatim)
//! - `GET /playlists/{id}/tracks` - source material for selection
//! - `POST /users/{user_id}/playlists` - create the generated playlist
//! - `POST /playlists/{id}/tracks` - fill the generated playlist
//! - `POST <token endpoint>` - authorization-code exchange and refresh
//!
//! ## Error handling
//!
//! Every call distinguishes two failure shapes. A transport failure (DNS,
//! TLS, connection reset, malformed body) becomes
//! [`ProviderError::Request`]; a response the provider answered but did not
//! accept becomes [`ProviderError::Denied`], carrying the upstream status
//! and body. Rejection bodies are logged at warn here, at the call site,
//! and are not echoed back to API clients. There are no retries and no
//! client-side rate-limit handling; a failed call fails the request that
//! triggered it.

use reqwest::{Response, StatusCode};
use thiserror::Error;
use tracing::warn;

pub mod auth;
pub mod playlist;

/// Failure of one Web API call, tagged with the action it was performing so
/// the surfaced message reads like a sentence.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Failed to {action}")]
    Request {
        action: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to {action}: provider returned {status}")]
    Denied {
        action: &'static str,
        status: StatusCode,
        body: String,
    },
}

impl ProviderError {
    fn transport(action: &'static str, source: reqwest::Error) -> Self {
        warn!(action, error = %source, "provider request failed");
        ProviderError::Request { action, source }
    }

    async fn rejection(action: &'static str, response: Response) -> Self {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        warn!(action, status = %status, body = %body, "provider rejected request");
        ProviderError::Denied {
            action,
            status,
            body,
        }
    }
}

/// Passes a read response through when the provider reports success.
pub(crate) async fn expect_success(
    action: &'static str,
    response: Response,
) -> Result<Response, ProviderError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(ProviderError::rejection(action, response).await)
    }
}

/// Passes a write response through only when the provider signals that the
/// resource was created.
pub(crate) async fn expect_created(
    action: &'static str,
    response: Response,
) -> Result<Response, ProviderError> {
    if response.status() == StatusCode::CREATED {
        Ok(response)
    } else {
        Err(ProviderError::rejection(action, response).await)
    }
}
