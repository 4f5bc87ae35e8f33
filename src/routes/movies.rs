use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::error::AppResult;
use crate::models::MovieId;
use crate::services::favourites::{self, LikeOutcome};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct LikeResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub favourites: Vec<MovieId>,
}

/// Handler for the like action
pub async fn like(
    State(state): State<AppState>,
    Path(id): Path<MovieId>,
) -> AppResult<Json<LikeResponse>> {
    let outcome = favourites::like(&state, id).await?;

    let (status, message) = match outcome {
        LikeOutcome::Added => ("added", "Movie added to your favourites!"),
        LikeOutcome::AlreadyFavourite => {
            ("already_favourite", "Movie is already in your favourites")
        }
        LikeOutcome::AlreadyPending => ("pending", "Like request already in progress"),
    };

    Ok(Json(LikeResponse {
        status,
        message,
        favourites: state.favourite_ids().await,
    }))
}

#[derive(Debug, Serialize)]
pub struct DislikeResponse {
    pub message: &'static str,
    pub favourites: Vec<MovieId>,
}

/// Handler for the dislike action
pub async fn dislike(
    State(state): State<AppState>,
    Path(id): Path<MovieId>,
) -> AppResult<Json<DislikeResponse>> {
    favourites::dislike(&state, id).await?;

    Ok(Json(DislikeResponse {
        message: "Movie removed from favourites",
        favourites: state.favourite_ids().await,
    }))
}
