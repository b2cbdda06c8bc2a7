use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::Value;

use crate::{api::require_credential, error::ApiError, server::AppState, spotify::playlist};

/// Lists the caller's playlists.
///
/// The provider's listing is passed through verbatim; the frontend renders
/// it directly and picks the source playlist for generation from it.
pub async fn playlists(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let credential = require_credential(&state, &user_id).await?;

    let listing =
        playlist::user_playlists(&state.http, &state.config, &credential.access_token).await?;
    Ok(Json(listing))
}
