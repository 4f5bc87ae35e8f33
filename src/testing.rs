//! Shared helpers for unit tests

use std::sync::Arc;

use crate::config::Config;
use crate::gateway::MockRecommenderApi;
use crate::state::AppState;

/// Default config pointed at a throwaway session file
pub(crate) fn test_config(dir: &tempfile::TempDir) -> Config {
    let mut config: Config = envy::from_iter(std::iter::empty::<(String, String)>()).unwrap();
    config.session_file = dir.path().join("session").to_string_lossy().into_owned();
    config
}

/// State with no session, backed by the given mock gateway
pub(crate) fn signed_out_state(gateway: MockRecommenderApi) -> (tempfile::TempDir, AppState) {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);
    let state = AppState::new(config, Arc::new(gateway));
    (dir, state)
}

/// State with an established session for `username`
pub(crate) async fn signed_in_state(
    gateway: MockRecommenderApi,
    username: &str,
) -> (tempfile::TempDir, AppState) {
    let (dir, state) = signed_out_state(gateway);
    state.sign_in(username).await.unwrap();
    (dir, state)
}
