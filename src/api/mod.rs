//! # API Module
//!
//! One handler per route. The handlers own request validation and the
//! mapping of internal outcomes onto the HTTP surface; the actual work
//! happens in [`crate::spotify`] and [`crate::selector`].
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`login`] - Hands the frontend the provider authorization URL.
//! - [`callback`] - Completes the OAuth flow: exchanges the authorization
//!   code, resolves the user's identity and stores the credential.
//!
//! ### Playlists
//!
//! - [`playlists`] - Lists the caller's playlists (provider passthrough).
//! - [`generate`] - Selects tracks from a source playlist for a target
//!   duration, without persisting anything.
//! - [`save`] - Persists a previously generated selection as a new private
//!   playlist.
//!
//! ### Monitoring
//!
//! - [`health`] - Liveness probe for deployment checks.
//!
//! ## Authentication model
//!
//! The user-scoped routes carry the provider user id in the path and only
//! proceed when this process holds a credential for it (established via
//! [`callback`]). There is no further authorization: whoever knows a user id
//! that this process authenticated can act for that user. Sessions die with
//! the process.

mod callback;
mod generate;
mod health;
mod login;
mod playlists;
mod save;

pub use callback::callback;
pub use generate::generate;
pub use health::health;
pub use login::login;
pub use playlists::playlists;
pub use save::save;

use tracing::warn;

use crate::{error::ApiError, server::AppState, spotify::auth, types::Credential};

/// Looks up the stored credential for a user-scoped route, refreshing it
/// first when it has gone stale.
///
/// A refresh failure is not fatal here: the stale credential is returned
/// as-is and the provider's own rejection surfaces through whichever call
/// needed the token. No credential at all means the user never completed the
/// login flow with this process (or the process restarted since).
pub(crate) async fn require_credential(
    state: &AppState,
    user_id: &str,
) -> Result<Credential, ApiError> {
    let credential = state
        .sessions
        .get(user_id)
        .await
        .ok_or(ApiError::Unauthenticated)?;

    if !credential.is_expired() {
        return Ok(credential);
    }

    match auth::refresh_credential(&state.http, &state.config, &credential).await {
        Ok(fresh) => {
            state.sessions.put(user_id, fresh.clone()).await;
            Ok(fresh)
        }
        Err(e) => {
            warn!(user_id, error = %e, "token refresh failed, keeping stale credential");
            Ok(credential)
        }
    }
}
