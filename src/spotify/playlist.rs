use reqwest::Client;
use serde_json::Value;

use crate::{
    config::Config,
    spotify::{ProviderError, expect_created, expect_success},
    types::{
        AddTracksRequest, CreatePlaylistRequest, CreatePlaylistResponse, PlaylistEntry,
        PlaylistItemsResponse,
    },
};

/// Fetches the items of one playlist.
///
/// The returned entries are the selector's raw material; entries whose
/// underlying track has vanished from the catalogue come back with a null
/// track field and are filtered out downstream, not here.
///
/// # Arguments
///
/// * `http` - Shared HTTP client
/// * `config` - Startup configuration (API base URL)
/// * `access_token` - Bearer token of the playlist's owner
/// * `playlist_id` - Provider id of the playlist to read
///
/// # Errors
///
/// [`ProviderError`] when the request fails or the provider answers with a
/// non-success status.
pub async fn playlist_items(
    http: &Client,
    config: &Config,
    access_token: &str,
    playlist_id: &str,
) -> Result<Vec<PlaylistEntry>, ProviderError> {
    const ACTION: &str = "fetch playlist tracks";

    let url = format!("{}/playlists/{}/tracks", config.api_url, playlist_id);
    let response = http
        .get(&url)
        .bearer_auth(access_token)
        .send()
        .await
        .map_err(|e| ProviderError::transport(ACTION, e))?;
    let response = expect_success(ACTION, response).await?;

    let body: PlaylistItemsResponse = response
        .json()
        .await
        .map_err(|e| ProviderError::transport(ACTION, e))?;
    Ok(body.items)
}

/// Fetches the caller's own playlists.
///
/// The provider's response is returned as unparsed JSON: clients pick the
/// source playlist from it and this service has no reason to understand more
/// of the listing than they do.
pub async fn user_playlists(
    http: &Client,
    config: &Config,
    access_token: &str,
) -> Result<Value, ProviderError> {
    const ACTION: &str = "fetch playlists";

    let url = format!("{}/me/playlists", config.api_url);
    let response = http
        .get(&url)
        .bearer_auth(access_token)
        .send()
        .await
        .map_err(|e| ProviderError::transport(ACTION, e))?;
    let response = expect_success(ACTION, response).await?;

    response
        .json::<Value>()
        .await
        .map_err(|e| ProviderError::transport(ACTION, e))
}

/// Creates an empty private playlist in the user's library.
///
/// Generated playlists are always private; whether to share the returned
/// URL is the user's call.
///
/// # Errors
///
/// [`ProviderError`] unless the provider answers 201 Created.
pub async fn create(
    http: &Client,
    config: &Config,
    access_token: &str,
    owner_id: &str,
    name: &str,
) -> Result<CreatePlaylistResponse, ProviderError> {
    const ACTION: &str = "create playlist";

    let url = format!("{}/users/{}/playlists", config.api_url, owner_id);
    let response = http
        .post(&url)
        .bearer_auth(access_token)
        .json(&CreatePlaylistRequest {
            name: name.to_string(),
            public: false,
        })
        .send()
        .await
        .map_err(|e| ProviderError::transport(ACTION, e))?;
    let response = expect_created(ACTION, response).await?;

    response
        .json::<CreatePlaylistResponse>()
        .await
        .map_err(|e| ProviderError::transport(ACTION, e))
}

/// Appends tracks to a playlist, in the given order.
///
/// # Errors
///
/// [`ProviderError`] unless the provider answers 201 Created.
pub async fn add_tracks(
    http: &Client,
    config: &Config,
    access_token: &str,
    playlist_id: &str,
    uris: Vec<String>,
) -> Result<(), ProviderError> {
    const ACTION: &str = "add tracks to playlist";

    let url = format!("{}/playlists/{}/tracks", config.api_url, playlist_id);
    let response = http
        .post(&url)
        .bearer_auth(access_token)
        .json(&AddTracksRequest { uris })
        .send()
        .await
        .map_err(|e| ProviderError::transport(ACTION, e))?;
    expect_created(ACTION, response).await?;

    Ok(())
}
