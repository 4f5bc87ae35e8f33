use crate::error::AppResult;
use crate::models::{MovieSummary, SimilarMovie};
use crate::state::AppState;

/// Result of the search-then-similar pipeline
///
/// Composed per request and returned as one value, so a slow similar-movies
/// response can never leak into a newer query's result.
#[derive(Debug)]
pub struct SearchOutcome {
    pub matches: Vec<MovieSummary>,
    pub similar: Vec<SimilarMovie>,
}

/// Resolve a query to matches, then fetch titles similar to the first match
///
/// Zero matches is a normal empty state: no similar fetch is attempted and no
/// error is raised. A failed similar fetch degrades to matches-only.
pub async fn search(state: &AppState, query: &str) -> AppResult<SearchOutcome> {
    let mut matches = state.gateway.search_movies(query).await?;
    matches.truncate(state.config.search_result_limit);

    if matches.is_empty() {
        return Ok(SearchOutcome {
            matches,
            similar: Vec::new(),
        });
    }

    let seed = matches[0].id;
    let similar = match state
        .gateway
        .similar_movies(seed, state.config.similar_count)
        .await
    {
        Ok(similar) => similar,
        Err(e) => {
            tracing::warn!(movie_id = seed, error = %e, "Similar movies fetch failed");
            Vec::new()
        }
    };

    Ok(SearchOutcome { matches, similar })
}
