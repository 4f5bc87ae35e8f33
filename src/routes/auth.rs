use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::services;
use crate::state::AppState;

/// Body of signup and login requests: `{ user, password }`
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub user: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub username: Option<String>,
}

/// Handler for account creation
pub async fn sign_up(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> AppResult<Json<SessionResponse>> {
    let username = services::auth::sign_up(&state, &request.user, &request.password).await?;
    Ok(Json(SessionResponse {
        username: Some(username),
    }))
}

/// Handler for login
pub async fn sign_in(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> AppResult<Json<SessionResponse>> {
    let username = services::auth::sign_in(&state, &request.user, &request.password).await?;
    Ok(Json(SessionResponse {
        username: Some(username),
    }))
}

/// Handler for logout
pub async fn sign_out(State(state): State<AppState>) -> AppResult<Json<SessionResponse>> {
    services::auth::sign_out(&state).await?;
    Ok(Json(SessionResponse { username: None }))
}

/// Returns the current session identity, if any
pub async fn session(State(state): State<AppState>) -> Json<SessionResponse> {
    Json(SessionResponse {
        username: state.current_user().await,
    })
}
