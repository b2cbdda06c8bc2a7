use axum::{extract::State, response::Json};

use crate::{server::AppState, spotify::auth, types::LoginResponse};

/// Returns the provider authorization URL the frontend should redirect the
/// user to. Building the URL needs nothing but the startup configuration, so
/// this route cannot fail.
pub async fn login(State(state): State<AppState>) -> Json<LoginResponse> {
    Json(LoginResponse {
        auth_url: auth::authorize_url(&state.config),
    })
}
