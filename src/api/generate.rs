use axum::{
    extract::{Path, State},
    response::Json,
};
use tracing::info;

use crate::{
    api::require_credential,
    error::ApiError,
    selector,
    server::AppState,
    spotify::playlist,
    types::{GenerateRequest, GenerateResponse},
};

/// Target listening time when the request does not name one: a classic
/// 25-minute focus session.
const DEFAULT_DURATION_MINUTES: u32 = 25;

/// Selects tracks from a source playlist for a target duration.
///
/// Reads the source playlist's items, runs the duration selector over them
/// with the thread RNG, and returns the selection. Nothing is persisted;
/// the client calls [`save`](crate::api::save) with the returned URIs once
/// the user accepts the mix.
///
/// # Errors
///
/// - [`ApiError::Unauthenticated`] when no credential is stored for
///   `user_id`.
/// - [`ApiError::MissingField`] when `source_playlist_id` is absent or
///   empty.
/// - [`ApiError::Provider`] when the playlist read fails.
pub async fn generate(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(body): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let credential = require_credential(&state, &user_id).await?;

    let source_playlist_id = body
        .source_playlist_id
        .filter(|id| !id.is_empty())
        .ok_or(ApiError::MissingField("source_playlist_id"))?;
    let minutes = body.duration_minutes.unwrap_or(DEFAULT_DURATION_MINUTES);

    let entries = playlist::playlist_items(
        &state.http,
        &state.config,
        &credential.access_token,
        &source_playlist_id,
    )
    .await?;
    info!(
        user_id,
        source_playlist_id,
        entries = entries.len(),
        "generating selection"
    );

    let selection = selector::select_for_duration(&entries, minutes, &mut rand::rng());
    info!(
        user_id,
        tracks = selection.tracks.len(),
        total_duration_ms = selection.total_duration_ms,
        "selection complete"
    );

    Ok(Json(GenerateResponse {
        track_count: selection.tracks.len(),
        total_duration_ms: selection.total_duration_ms,
        tracks: selection.tracks,
    }))
}
