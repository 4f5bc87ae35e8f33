use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::session_gate::require_session;
use crate::state::AppState;

pub mod auth;
pub mod movies;
pub mod views;

/// Creates the application router with all routes
///
/// The favourites view and the like/dislike actions require a session; home,
/// search and the detail view work signed-out with reduced content.
pub fn create_router(state: AppState) -> Router {
    let gated = Router::new()
        .route("/views/favourites", get(views::favourites))
        .route("/movies/:id/like", post(movies::like))
        .route("/movies/:id/dislike", post(movies::dislike))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    Router::new()
        .route("/health", get(health_check))
        // Session
        .route("/auth/signup", post(auth::sign_up))
        .route("/auth/login", post(auth::sign_in))
        .route("/auth/logout", post(auth::sign_out))
        .route("/auth/session", get(auth::session))
        // Views
        .route("/views/home", get(views::home))
        .route("/views/search", get(views::search))
        .route("/views/movie/:id", get(views::movie_detail))
        .merge(gated)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
