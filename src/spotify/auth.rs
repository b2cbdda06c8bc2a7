use reqwest::{Client, Response, StatusCode};
use thiserror::Error;
use tracing::warn;

use crate::{
    config::Config,
    spotify::{ProviderError, expect_success},
    types::{Credential, TokenResponse, UserProfile},
};

/// Scopes requested on login. Reading the user's private playlists and
/// profile, and writing the generated playlists back as private ones.
pub const SPOTIFY_SCOPE: &str =
    "user-read-private user-read-email playlist-read-private playlist-modify-private";

/// Failure while exchanging or refreshing a token.
///
/// Both variants surface to API clients as a generic exchange failure; the
/// detail (including the provider's rejection body) is logged here and kept
/// on the error as source/payload for diagnostics.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("token request failed")]
    Transport(#[from] reqwest::Error),
    #[error("token endpoint rejected the request: {status}")]
    Rejected { status: StatusCode, body: String },
}

/// Builds the provider authorization URL the frontend should send the user
/// to.
///
/// The URL carries the registered client id, `response_type=code`, the
/// configured redirect URI and the fixed scope list. Query values are
/// form-urlencoded by the URL builder, so the space-separated scope list is
/// transmitted safely. Pure function: no side effects, no state.
///
/// # Example
///
/// ```
/// let url = authorize_url(&config);
/// assert!(url.starts_with("https://accounts.spotify.com/authorize?"));
/// ```
pub fn authorize_url(config: &Config) -> String {
    let mut url = config.auth_url.clone();
    url.query_pairs_mut()
        .append_pair("client_id", &config.client_id)
        .append_pair("response_type", "code")
        .append_pair("redirect_uri", &config.redirect_uri)
        .append_pair("scope", SPOTIFY_SCOPE);
    url.to_string()
}

/// Exchanges an authorization code for a credential.
///
/// Completes the authorization code flow: posts the code to the provider's
/// token endpoint together with the redirect URI it was issued for and this
/// service's client id and secret. The authorization code is single-use and
/// short-lived, so the exchange happens directly in the callback request
/// that delivered it.
///
/// # Arguments
///
/// * `http` - Shared HTTP client
/// * `config` - Startup configuration (endpoint, client credentials)
/// * `code` - Authorization code received on the OAuth callback
///
/// # Errors
///
/// [`AuthError::Rejected`] when the provider answers with a non-success
/// status (expired code, mismatched redirect URI, bad client credentials);
/// [`AuthError::Transport`] when the request itself fails.
pub async fn exchange_code(
    http: &Client,
    config: &Config,
    code: &str,
) -> Result<Credential, AuthError> {
    let response = http
        .post(config.token_url.clone())
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("client_id", config.client_id.as_str()),
            ("client_secret", config.client_secret.as_str()),
        ])
        .send()
        .await?;

    credential_from(response, None).await
}

/// Obtains a fresh credential using the refresh token of a stale one.
///
/// The provider may omit `refresh_token` and `scope` from a refresh
/// response; the values from the stale credential are carried over in that
/// case so the session keeps working across repeated refreshes.
///
/// # Errors
///
/// Same contract as [`exchange_code`]. Callers that hold a stored credential
/// typically treat a refresh failure as non-fatal and keep using the stale
/// token; the provider's own rejection then surfaces through the operation
/// that needed it.
pub async fn refresh_credential(
    http: &Client,
    config: &Config,
    stale: &Credential,
) -> Result<Credential, AuthError> {
    let response = http
        .post(config.token_url.clone())
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", stale.refresh_token.as_str()),
            ("client_id", config.client_id.as_str()),
            ("client_secret", config.client_secret.as_str()),
        ])
        .send()
        .await?;

    credential_from(response, Some(stale)).await
}

async fn credential_from(
    response: Response,
    stale: Option<&Credential>,
) -> Result<Credential, AuthError> {
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        warn!(status = %status, body = %body, "token endpoint rejected the request");
        return Err(AuthError::Rejected { status, body });
    }

    let token: TokenResponse = response.json().await?;
    let mut credential = Credential::from_token_response(token);
    if let Some(stale) = stale {
        if credential.refresh_token.is_empty() {
            credential.refresh_token = stale.refresh_token.clone();
        }
        if credential.scope.is_empty() {
            credential.scope = stale.scope.clone();
        }
    }

    Ok(credential)
}

/// Resolves the identity of the user a credential belongs to.
///
/// The returned profile id is the key under which the credential is stored,
/// and the id clients address user-scoped routes with.
pub async fn current_user(
    http: &Client,
    config: &Config,
    access_token: &str,
) -> Result<UserProfile, ProviderError> {
    const ACTION: &str = "fetch user profile";

    let url = format!("{}/me", config.api_url);
    let response = http
        .get(&url)
        .bearer_auth(access_token)
        .send()
        .await
        .map_err(|e| ProviderError::transport(ACTION, e))?;
    let response = expect_success(ACTION, response).await?;

    response
        .json::<UserProfile>()
        .await
        .map_err(|e| ProviderError::transport(ACTION, e))
}
