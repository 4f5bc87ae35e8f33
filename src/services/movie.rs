use serde::Serialize;

use crate::error::AppResult;
use crate::models::{Genres, MovieDetails, MovieId, ProviderGroups};
use crate::state::AppState;

/// Composed movie detail view
#[derive(Debug, Serialize)]
pub struct MovieDetailView {
    pub movie: MovieDetails,
    /// Genres flattened to one display string, however the wire sent them
    pub genres: Option<String>,
    pub region: String,
    /// None when the provider lookup failed or found nothing for the region
    pub watch_providers: Option<ProviderGroups>,
}

/// Fetch details and watch providers for one movie concurrently
///
/// Missing providers are a normal empty state; a missing movie is the page
/// error.
pub async fn detail_view(state: &AppState, id: MovieId) -> AppResult<MovieDetailView> {
    let region = state.config.region.clone();

    let (details, providers) = tokio::join!(
        state.gateway.movie_details(id),
        state.gateway.watch_providers(id, &region),
    );

    let movie = details?;
    let watch_providers = match providers {
        Ok(lookup) if !lookup.providers.is_empty() => Some(lookup.providers),
        Ok(_) => None,
        Err(e) => {
            tracing::warn!(movie_id = id, error = %e, "Watch providers lookup failed");
            None
        }
    };

    let genres = movie.genres.as_ref().map(Genres::joined);

    Ok(MovieDetailView {
        movie,
        genres,
        region,
        watch_providers,
    })
}
