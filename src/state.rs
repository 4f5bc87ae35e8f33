use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use tokio::sync::RwLock;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::gateway::RecommenderApi;
use crate::models::MovieId;
use crate::services::suggestions::SuggestionBoard;
use crate::session::SessionFile;

/// Shared application state
///
/// Holds the session identity plus the view-local projections the SPA kept in
/// page state: the favourites id set (tentative until the next authoritative
/// refetch) and the current suggestion list. All remote access goes through
/// the gateway trait object.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub gateway: Arc<dyn RecommenderApi>,
    pub suggestions: Arc<SuggestionBoard>,
    session_file: Arc<SessionFile>,
    session: Arc<RwLock<Option<String>>>,
    /// Local projection of server-side favourites; optimistic adds may
    /// transiently diverge until the next full refetch.
    favourites: Arc<RwLock<HashSet<MovieId>>>,
    /// Movie ids with a like request currently in flight
    pending_likes: Arc<Mutex<HashSet<MovieId>>>,
}

impl AppState {
    /// Creates application state, restoring any persisted session
    pub fn new(config: Config, gateway: Arc<dyn RecommenderApi>) -> Self {
        let session_file = SessionFile::new(&config.session_file);
        let restored = session_file.load();
        if let Some(username) = &restored {
            tracing::info!(username = %username, "Restored persisted session");
        }

        Self {
            config: Arc::new(config),
            gateway,
            suggestions: Arc::new(SuggestionBoard::new()),
            session_file: Arc::new(session_file),
            session: Arc::new(RwLock::new(restored)),
            favourites: Arc::new(RwLock::new(HashSet::new())),
            pending_likes: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Current identity, if signed in
    pub async fn current_user(&self) -> Option<String> {
        self.session.read().await.clone()
    }

    /// Current identity, or `Unauthorized` when signed out
    pub async fn require_user(&self) -> AppResult<String> {
        self.current_user()
            .await
            .ok_or_else(|| AppError::Unauthorized("Please log in first".to_string()))
    }

    /// Set the identity and persist it
    pub async fn sign_in(&self, username: &str) -> AppResult<()> {
        self.session_file.save(username)?;
        *self.session.write().await = Some(username.to_string());
        Ok(())
    }

    /// Clear the identity, the persisted value, and the previous user's
    /// view-local projections
    pub async fn sign_out(&self) -> AppResult<()> {
        self.session_file.clear()?;
        *self.session.write().await = None;
        self.favourites.write().await.clear();
        self.suggestions.reset().await;
        self.pending_likes.lock().unwrap().clear();
        Ok(())
    }

    /// Snapshot of the favourites projection
    pub async fn favourite_ids(&self) -> Vec<MovieId> {
        let mut ids: Vec<MovieId> = self.favourites.read().await.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub async fn is_favourite(&self, movie_id: MovieId) -> bool {
        self.favourites.read().await.contains(&movie_id)
    }

    /// Optimistically add one id to the projection
    pub async fn add_favourite(&self, movie_id: MovieId) {
        self.favourites.write().await.insert(movie_id);
    }

    /// Drop one id from the projection
    pub async fn remove_favourite(&self, movie_id: MovieId) {
        self.favourites.write().await.remove(&movie_id);
    }

    /// Replace the projection with the authoritative server-side set
    pub async fn replace_favourites(&self, ids: impl IntoIterator<Item = MovieId>) {
        *self.favourites.write().await = ids.into_iter().collect();
    }

    /// Test hook: hold the favourites write lock to stall projection updates
    #[cfg(test)]
    pub(crate) async fn lock_favourites_for_write(
        &self,
    ) -> tokio::sync::RwLockWriteGuard<'_, HashSet<MovieId>> {
        self.favourites.write().await
    }

    /// Mark a like as in flight; false when one is already pending for the id
    pub fn begin_like(&self, movie_id: MovieId) -> bool {
        self.pending_likes.lock().unwrap().insert(movie_id)
    }

    /// Release the in-flight marker for one id
    pub fn finish_like(&self, movie_id: MovieId) {
        self.pending_likes.lock().unwrap().remove(&movie_id);
    }
}
