use reqwest::{Client as HttpClient, StatusCode};
use serde::Deserialize;
use serde_json::json;

use crate::{
    error::{AppError, AppResult},
    gateway::{AuthOutcome, FavouritesPage, RecommenderApi},
    models::{MovieDetails, MovieId, MovieSummary, SimilarMovie, Suggestion, WatchProviders},
};

/// reqwest-backed implementation of [`RecommenderApi`]
///
/// Holds nothing but the shared connection pool and the service base URL.
/// Error mapping: transport failures surface as `HttpClient`; non-2xx
/// responses prefer the body's `{ "error": ... }` message and otherwise fall
/// back to a generic message keyed off the status code.
#[derive(Clone)]
pub struct HttpRecommender {
    http_client: HttpClient,
    base_url: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[derive(Deserialize)]
struct MoviesEnvelope {
    #[serde(default)]
    movies: Vec<MovieSummary>,
}

#[derive(Deserialize)]
struct SuggestionsEnvelope {
    #[serde(default)]
    suggestions: Vec<Suggestion>,
}

#[derive(Deserialize)]
struct MovieEnvelope {
    movie: MovieDetails,
}

#[derive(Deserialize)]
struct SimilarEnvelope {
    #[serde(default)]
    similar_movies: Vec<SimilarMovie>,
}

impl HttpRecommender {
    pub fn new(base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Convert a non-2xx response into the matching `AppError`
    async fn fail(response: reqwest::Response) -> AppError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if let Ok(payload) = serde_json::from_str::<ErrorBody>(&body) {
            if let Some(message) = payload.error {
                return AppError::Remote(message);
            }
        }

        match status {
            StatusCode::NOT_FOUND => AppError::NotFound("Resource not found".to_string()),
            s if s.is_server_error() => {
                AppError::Remote("Server error - please try again later".to_string())
            }
            s => AppError::Remote(format!("Recommender returned status {}", s)),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> AppResult<T> {
        let response = self
            .http_client
            .get(self.url(path))
            .query(query)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::fail(response).await);
        }

        Ok(response.json().await?)
    }

    async fn post_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> AppResult<T> {
        let response = self
            .http_client
            .post(self.url(path))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::fail(response).await);
        }

        Ok(response.json().await?)
    }

    /// POST where only the status matters; the acknowledgement body is ignored
    async fn post_ack(&self, path: &str, body: serde_json::Value) -> AppResult<()> {
        let response = self
            .http_client
            .post(self.url(path))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::fail(response).await);
        }

        Ok(())
    }
}

#[async_trait::async_trait]
impl RecommenderApi for HttpRecommender {
    async fn sign_up(&self, user: &str, password: &str) -> AppResult<AuthOutcome> {
        self.post_json("/signup", json!({ "user": user, "password": password }))
            .await
    }

    async fn sign_in(&self, user: &str, password: &str) -> AppResult<AuthOutcome> {
        self.post_json("/login", json!({ "user": user, "password": password }))
            .await
    }

    async fn search_movies(&self, query: &str) -> AppResult<Vec<MovieSummary>> {
        if query.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search query cannot be empty".to_string(),
            ));
        }

        let envelope: MoviesEnvelope = self
            .post_json("/search", json!({ "movie": query }))
            .await?;

        tracing::info!(
            query = %query,
            results = envelope.movies.len(),
            "Movie search completed"
        );

        Ok(envelope.movies)
    }

    async fn trending(&self, language: &str) -> AppResult<Vec<MovieSummary>> {
        let envelope: MoviesEnvelope = self
            .get_json("/trending", &[("language", language.to_string())])
            .await?;
        Ok(envelope.movies)
    }

    async fn trending_by_genre(
        &self,
        genre: &str,
        language: &str,
    ) -> AppResult<Vec<MovieSummary>> {
        let envelope: MoviesEnvelope = self
            .get_json(
                &format!("/trending/{}", genre),
                &[("language", language.to_string())],
            )
            .await?;
        Ok(envelope.movies)
    }

    async fn suggestions(&self, username: &str, top_n: u32) -> AppResult<Vec<Suggestion>> {
        let envelope: SuggestionsEnvelope = self
            .get_json(
                &format!("/suggestions/{}", username),
                &[("top_n", top_n.to_string())],
            )
            .await?;

        tracing::debug!(
            username = %username,
            suggestions = envelope.suggestions.len(),
            "Suggestions fetched"
        );

        Ok(envelope.suggestions)
    }

    async fn like(&self, username: &str, tmdb_id: MovieId) -> AppResult<()> {
        self.post_ack(&format!("/like/{}", username), json!({ "tmdb_id": tmdb_id }))
            .await
    }

    async fn dislike(&self, username: &str, tmdb_id: MovieId) -> AppResult<()> {
        self.post_ack(
            &format!("/dislike/{}", username),
            json!({ "tmdb_id": tmdb_id }),
        )
        .await
    }

    async fn favourites(&self, username: &str) -> AppResult<FavouritesPage> {
        self.get_json(&format!("/favourites/{}", username), &[]).await
    }

    async fn movie_details(&self, id: MovieId) -> AppResult<MovieDetails> {
        let envelope: MovieEnvelope = self.get_json(&format!("/movie/{}", id), &[]).await?;
        Ok(envelope.movie)
    }

    async fn similar_movies(&self, id: MovieId, top_n: u32) -> AppResult<Vec<SimilarMovie>> {
        let envelope: SimilarEnvelope = self
            .get_json(&format!("/similar/{}", id), &[("top_n", top_n.to_string())])
            .await?;
        Ok(envelope.similar_movies)
    }

    async fn watch_providers(&self, id: MovieId, region: &str) -> AppResult<WatchProviders> {
        self.get_json(
            &format!("/movie/{}/watch-providers", id),
            &[("region", region.to_string())],
        )
        .await
    }
}
