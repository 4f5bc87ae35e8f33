use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::models::{MovieId, MovieSummary, SimilarMovie};
use crate::services;
use crate::services::home::HomeView;
use crate::services::movie::MovieDetailView;
use crate::state::AppState;

/// Handler for the composed home view
pub async fn home(State(state): State<AppState>) -> AppResult<Json<HomeView>> {
    Ok(Json(services::home::home_view(&state).await?))
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    q: String,
}

/// Similar movie annotated with its renderable percentage
#[derive(Debug, Serialize)]
pub struct SimilarEntry {
    #[serde(flatten)]
    pub movie: SimilarMovie,
    pub match_percent: u8,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub matches: Vec<MovieSummary>,
    pub similar: Vec<SimilarEntry>,
}

/// Handler for the search view
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<SearchResponse>> {
    let outcome = services::search::search(&state, &params.q).await?;

    let similar = outcome
        .similar
        .into_iter()
        .map(|movie| SimilarEntry {
            match_percent: movie.match_percent(),
            movie,
        })
        .collect();

    Ok(Json(SearchResponse {
        query: params.q,
        matches: outcome.matches,
        similar,
    }))
}

/// Handler for the movie detail view
pub async fn movie_detail(
    State(state): State<AppState>,
    Path(id): Path<MovieId>,
) -> AppResult<Json<MovieDetailView>> {
    Ok(Json(services::movie::detail_view(&state, id).await?))
}

#[derive(Debug, Serialize)]
pub struct FavouritesResponse {
    pub favourites: Vec<MovieSummary>,
    pub total: u64,
}

/// Handler for the favourites view; refreshes the local projection
pub async fn favourites(State(state): State<AppState>) -> AppResult<Json<FavouritesResponse>> {
    let page = services::favourites::refetch(&state).await?;
    Ok(Json(FavouritesResponse {
        favourites: page.favourites,
        total: page.total,
    }))
}
