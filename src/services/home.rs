use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::models::{MovieId, MovieSummary, Suggestion};
use crate::services::{favourites, suggestions};
use crate::state::AppState;

/// Genre rails shown on the home view
pub const GENRES: [&str; 7] = [
    "Action",
    "Comedy",
    "Romance",
    "Crime",
    "Horror",
    "Mystery",
    "Adventure",
];

#[derive(Debug, Serialize)]
pub struct LanguageRail {
    pub language: String,
    pub movies: Vec<MovieSummary>,
}

#[derive(Debug, Serialize)]
pub struct GenreRail {
    pub genre: String,
    pub movies: Vec<MovieSummary>,
}

/// Composed home view
///
/// `notices` carries the transient failure messages the SPA surfaced as
/// toasts; the view itself still renders with whatever loaded.
#[derive(Debug, Serialize)]
pub struct HomeView {
    pub username: Option<String>,
    pub suggestions: Vec<Suggestion>,
    pub trending: Vec<LanguageRail>,
    pub genres: Vec<GenreRail>,
    pub favourites: Vec<MovieId>,
    pub notices: Vec<String>,
}

/// Fetch everything the home view needs
///
/// Language rails, genre rails and (when signed in) favourites and
/// suggestions are all fetched concurrently and joined before the view
/// returns. A failed genre rail is simply absent; failed trending or
/// favourites fetches add a notice but do not fail the view.
pub async fn home_view(state: &AppState) -> AppResult<HomeView> {
    let username = state.current_user().await;
    let mut notices = Vec::new();

    let mut language_tasks = Vec::new();
    for language in state.config.trending_languages.clone() {
        let gateway = state.gateway.clone();
        language_tasks.push(tokio::spawn(async move {
            let movies = gateway.trending(&language).await;
            (language, movies)
        }));
    }

    let mut genre_tasks = Vec::new();
    for genre in GENRES {
        let gateway = state.gateway.clone();
        genre_tasks.push(tokio::spawn(async move {
            (genre, gateway.trending_by_genre(genre, "en").await)
        }));
    }

    let identity_tasks = username.clone().map(|user| {
        let favourites_state = state.clone();
        let favourites_task =
            tokio::spawn(async move { favourites::refetch(&favourites_state).await });

        let suggestions_state = state.clone();
        let suggestions_task =
            tokio::spawn(async move { suggestions::refetch(&suggestions_state, &user).await });

        (favourites_task, suggestions_task)
    });

    let mut trending = Vec::new();
    for task in language_tasks {
        match task.await {
            Ok((language, Ok(movies))) => trending.push(LanguageRail { language, movies }),
            Ok((language, Err(e))) => {
                tracing::error!(language = %language, error = %e, "Failed to load trending movies");
                notices.push("Failed to load trending movies".to_string());
            }
            Err(e) => return Err(AppError::Internal(e.to_string())),
        }
    }

    let mut genres = Vec::new();
    for task in genre_tasks {
        match task.await {
            Ok((genre, Ok(movies))) => {
                if !movies.is_empty() {
                    genres.push(GenreRail {
                        genre: genre.to_string(),
                        movies,
                    });
                }
            }
            Ok((genre, Err(e))) => {
                tracing::warn!(genre, error = %e, "Failed to load genre rail");
            }
            Err(e) => return Err(AppError::Internal(e.to_string())),
        }
    }

    let mut suggestion_list = Vec::new();
    if let Some((favourites_task, suggestions_task)) = identity_tasks {
        match favourites_task.await {
            Ok(Ok(_)) => {}
            Ok(Err(e)) => {
                tracing::error!(error = %e, "Failed to load favourites");
                notices.push("Failed to load favourites".to_string());
            }
            Err(e) => return Err(AppError::Internal(e.to_string())),
        }

        match suggestions_task.await {
            Ok(Ok(list)) => suggestion_list = list,
            Ok(Err(e)) => {
                // Empty suggestions render as the "like some movies" prompt,
                // not as an error.
                tracing::warn!(error = %e, "Failed to load suggestions");
            }
            Err(e) => return Err(AppError::Internal(e.to_string())),
        }
    }

    notices.dedup();

    Ok(HomeView {
        username,
        suggestions: suggestion_list,
        trending,
        genres,
        favourites: state.favourite_ids().await,
        notices,
    })
}
