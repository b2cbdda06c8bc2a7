use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    response::Json,
};
use tracing::info;

use crate::{error::ApiError, server::AppState, spotify::auth, types::CallbackResponse};

/// Completes the OAuth authorization code flow.
///
/// The provider redirects the user's browser here with a single-use `code`
/// query parameter. The code is exchanged for a credential right away, the
/// caller's identity is resolved through the provider, and the credential is
/// stored under that user id. The id is returned so the frontend can address
/// the user-scoped routes.
///
/// # Errors
///
/// - [`ApiError::MissingCode`] when the `code` parameter is absent (the user
///   denied access, or the URL was called by hand).
/// - [`ApiError::TokenExchange`] when the provider rejects the exchange.
/// - [`ApiError::Provider`] when the identity lookup fails.
pub async fn callback(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<CallbackResponse>, ApiError> {
    let code = params.get("code").ok_or(ApiError::MissingCode)?;

    let credential = auth::exchange_code(&state.http, &state.config, code)
        .await
        .map_err(ApiError::TokenExchange)?;

    let profile = auth::current_user(&state.http, &state.config, &credential.access_token).await?;
    state.sessions.put(&profile.id, credential).await;
    info!(user_id = %profile.id, "user authenticated");

    Ok(Json(CallbackResponse {
        user_id: profile.id,
    }))
}
