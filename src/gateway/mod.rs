/// Remote recommender gateway
///
/// All business logic (recommendation scoring, authentication, favourites
/// persistence) lives in the remote Curate recommender service; this module is
/// the crate's only way to reach it. One stateless request function per
/// endpoint, no retries, no batching.
use serde::Deserialize;

use crate::{
    error::AppResult,
    models::{MovieDetails, MovieId, MovieSummary, SimilarMovie, Suggestion, WatchProviders},
};

pub mod http;

pub use http::HttpRecommender;

/// Signup/login response body: `{ message, error? }`
#[derive(Debug, Clone, Deserialize)]
pub struct AuthOutcome {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Favourites listing for one user, as persisted server-side
#[derive(Debug, Clone, Deserialize)]
pub struct FavouritesPage {
    #[serde(default)]
    pub favourites: Vec<MovieSummary>,
    #[serde(default)]
    pub total: u64,
}

/// Trait over the recommender's REST API
///
/// Kept as a seam so view and synchronization logic can be tested against a
/// mock without a network. Every method is a single best-effort attempt; the
/// backend is idempotent, so callers tolerate overlap and staleness.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommenderApi: Send + Sync {
    /// POST /signup with `{ user, password }`
    async fn sign_up(&self, user: &str, password: &str) -> AppResult<AuthOutcome>;

    /// POST /login with `{ user, password }`
    async fn sign_in(&self, user: &str, password: &str) -> AppResult<AuthOutcome>;

    /// POST /search with `{ movie: query }`
    async fn search_movies(&self, query: &str) -> AppResult<Vec<MovieSummary>>;

    /// GET /trending for one language
    async fn trending(&self, language: &str) -> AppResult<Vec<MovieSummary>>;

    /// GET /trending/{genre} for one language
    async fn trending_by_genre(&self, genre: &str, language: &str)
        -> AppResult<Vec<MovieSummary>>;

    /// GET /suggestions/{username} bounded to `top_n` entries
    async fn suggestions(&self, username: &str, top_n: u32) -> AppResult<Vec<Suggestion>>;

    /// POST /like/{username} with `{ tmdb_id }`
    async fn like(&self, username: &str, tmdb_id: MovieId) -> AppResult<()>;

    /// POST /dislike/{username} with `{ tmdb_id }`
    async fn dislike(&self, username: &str, tmdb_id: MovieId) -> AppResult<()>;

    /// GET /favourites/{username}
    async fn favourites(&self, username: &str) -> AppResult<FavouritesPage>;

    /// GET /movie/{id}
    async fn movie_details(&self, id: MovieId) -> AppResult<MovieDetails>;

    /// GET /similar/{id} bounded to `top_n` entries
    async fn similar_movies(&self, id: MovieId, top_n: u32) -> AppResult<Vec<SimilarMovie>>;

    /// GET /movie/{id}/watch-providers for one region
    async fn watch_providers(&self, id: MovieId, region: &str) -> AppResult<WatchProviders>;
}
