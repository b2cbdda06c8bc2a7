use axum::{
    extract::{Path, State},
    response::Json,
};
use tracing::info;

use crate::{
    api::require_credential,
    error::ApiError,
    server::AppState,
    spotify::playlist,
    types::{SaveRequest, SaveResponse},
};

/// Persists a generated selection as a new private playlist.
///
/// Creates an empty playlist in the user's library, then appends the given
/// track URIs to it. The two provider writes are not transactional: if the
/// second fails, the empty playlist stays behind in the user's library and
/// the request fails with the add-tracks error.
///
/// # Errors
///
/// - [`ApiError::Unauthenticated`] when no credential is stored for
///   `user_id`.
/// - [`ApiError::MissingField`] when `track_uris` is absent/empty or
///   `playlist_name` is absent/empty.
/// - [`ApiError::Provider`] when either provider write fails.
pub async fn save(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(body): Json<SaveRequest>,
) -> Result<Json<SaveResponse>, ApiError> {
    let credential = require_credential(&state, &user_id).await?;

    let track_uris = body
        .track_uris
        .filter(|uris| !uris.is_empty())
        .ok_or(ApiError::MissingField("track_uris"))?;
    let playlist_name = body
        .playlist_name
        .filter(|name| !name.is_empty())
        .ok_or(ApiError::MissingField("playlist_name"))?;

    let created = playlist::create(
        &state.http,
        &state.config,
        &credential.access_token,
        &user_id,
        &playlist_name,
    )
    .await?;
    info!(user_id, playlist_id = %created.id, "playlist created");

    playlist::add_tracks(
        &state.http,
        &state.config,
        &credential.access_token,
        &created.id,
        track_uris,
    )
    .await?;
    info!(user_id, playlist_id = %created.id, "tracks added");

    Ok(Json(SaveResponse {
        playlist_id: created.id,
        playlist_url: created.external_urls.spotify,
    }))
}
