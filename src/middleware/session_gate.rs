use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Middleware guarding identity-gated routes.
///
/// The session value is trusted at face value; no token validation happens
/// here. A signed-out request is rejected before the handler runs.
pub async fn require_session(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if state.current_user().await.is_none() {
        tracing::debug!(uri = %request.uri(), "Rejected identity-gated route without a session");
        return AppError::Unauthorized("Please log in first".to_string()).into_response();
    }

    next.run(request).await
}
