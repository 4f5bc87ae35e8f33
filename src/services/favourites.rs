use crate::error::AppResult;
use crate::gateway::FavouritesPage;
use crate::models::MovieId;
use crate::services::suggestions;
use crate::state::AppState;

/// What happened to a like request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeOutcome {
    /// Sent to the recommender and added to the local projection
    Added,
    /// Already in the favourites set; no request issued
    AlreadyFavourite,
    /// A like for the same movie is still in flight; no request issued
    AlreadyPending,
}

/// Optimistic like
///
/// At most one request per movie: ids already in the projection or with a
/// request in flight are skipped. On success the id is added locally and the
/// suggestion list is refetched; on failure the projection is left unchanged
/// and the error propagates to the caller.
pub async fn like(state: &AppState, movie_id: MovieId) -> AppResult<LikeOutcome> {
    let username = state.require_user().await?;

    if state.is_favourite(movie_id).await {
        return Ok(LikeOutcome::AlreadyFavourite);
    }
    if !state.begin_like(movie_id) {
        return Ok(LikeOutcome::AlreadyPending);
    }

    if let Err(e) = state.gateway.like(&username, movie_id).await {
        state.finish_like(movie_id);
        return Err(e);
    }

    // The marker stays held until the id is in the projection, so a rapid
    // second like always hits one of the two guards.
    state.add_favourite(movie_id).await;
    state.finish_like(movie_id);
    tracing::info!(username = %username, movie_id, "Movie liked");

    // The new favourite changes the personalized list; discard and refetch it.
    if let Err(e) = suggestions::refetch(state, &username).await {
        tracing::warn!(error = %e, "Suggestions refetch after like failed");
    }

    Ok(LikeOutcome::Added)
}

/// Remove a favourite, then drop it from the projection unconditionally
pub async fn dislike(state: &AppState, movie_id: MovieId) -> AppResult<()> {
    let username = state.require_user().await?;

    state.gateway.dislike(&username, movie_id).await?;
    state.remove_favourite(movie_id).await;
    tracing::info!(username = %username, movie_id, "Movie removed from favourites");

    Ok(())
}

/// Authoritative refetch; replaces the local projection wholesale
pub async fn refetch(state: &AppState) -> AppResult<FavouritesPage> {
    let username = state.require_user().await?;

    let page = state.gateway.favourites(&username).await?;
    state
        .replace_favourites(page.favourites.iter().map(|m| m.id))
        .await;

    Ok(page)
}
