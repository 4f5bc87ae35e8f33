use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;

use crate::error::AppResult;
use crate::models::Suggestion;
use crate::state::AppState;

/// Holder for the personalized suggestion list
///
/// The list is always replaced wholesale, never patched. Every refetch takes a
/// monotonic generation token when it starts; a response is installed only if
/// no newer refetch was issued in the meantime, so overlapping refetches
/// resolve deterministically (newest-issued wins) instead of racing on
/// arrival order.
pub struct SuggestionBoard {
    generation: AtomicU64,
    current: RwLock<(u64, Vec<Suggestion>)>,
}

impl Default for SuggestionBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl SuggestionBoard {
    pub fn new() -> Self {
        Self {
            generation: AtomicU64::new(0),
            current: RwLock::new((0, Vec::new())),
        }
    }

    /// Claim a generation token for a refetch about to start
    pub fn begin_refetch(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Install a fetched list unless a newer refetch already landed.
    /// Returns false when the response was stale and dropped.
    pub async fn install(&self, generation: u64, suggestions: Vec<Suggestion>) -> bool {
        let mut current = self.current.write().await;
        if generation > current.0 {
            *current = (generation, suggestions);
            true
        } else {
            false
        }
    }

    /// Snapshot of the current list
    pub async fn snapshot(&self) -> Vec<Suggestion> {
        self.current.read().await.1.clone()
    }

    /// Empty the board and invalidate every in-flight refetch, for sign-out
    pub async fn reset(&self) {
        let generation = self.begin_refetch();
        let mut current = self.current.write().await;
        if generation > current.0 {
            *current = (generation, Vec::new());
        }
    }
}

/// Discard-and-refetch of the suggestion list for one user
///
/// Returns the board's current list, which may come from a concurrent newer
/// refetch when this one resolved stale.
pub async fn refetch(state: &AppState, username: &str) -> AppResult<Vec<Suggestion>> {
    let generation = state.suggestions.begin_refetch();

    let fetched = state
        .gateway
        .suggestions(username, state.config.suggestion_count)
        .await?;

    if !state.suggestions.install(generation, fetched).await {
        tracing::debug!(generation, "Dropped stale suggestions response");
    }

    Ok(state.suggestions.snapshot().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MovieId;

    fn suggestion(id: MovieId) -> Suggestion {
        Suggestion {
            id,
            title: format!("Movie {}", id),
            vote_average: None,
            similarity: None,
            poster: None,
            overview: None,
            suggested_because: None,
        }
    }

    #[tokio::test]
    async fn test_install_replaces_wholesale() {
        let board = SuggestionBoard::new();
        let first = board.begin_refetch();
        assert!(board.install(first, vec![suggestion(1), suggestion(2)]).await);

        let second = board.begin_refetch();
        assert!(board.install(second, vec![suggestion(3)]).await);

        let snapshot = board.snapshot().await;
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id, 3);
    }

    #[tokio::test]
    async fn test_stale_response_is_dropped() {
        let board = SuggestionBoard::new();
        let older = board.begin_refetch();
        let newer = board.begin_refetch();

        // The newer refetch resolves first.
        assert!(board.install(newer, vec![suggestion(9)]).await);
        // The older one lands afterwards and must not overwrite it.
        assert!(!board.install(older, vec![suggestion(1)]).await);

        let snapshot = board.snapshot().await;
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id, 9);
    }

    #[tokio::test]
    async fn test_reset_clears_and_invalidates_in_flight() {
        let board = SuggestionBoard::new();
        let in_flight = board.begin_refetch();

        board.reset().await;
        assert!(board.snapshot().await.is_empty());

        // The refetch issued before the reset resolves late and is dropped.
        assert!(!board.install(in_flight, vec![suggestion(7)]).await);
        assert!(board.snapshot().await.is_empty());
    }
}
