use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Exact success messages the recommender returns for auth calls
const SIGNUP_OK: &str = "User signed up successfully";
const LOGIN_OK: &str = "Login successful";

fn validated(user: &str, password: &str) -> AppResult<(String, String)> {
    let user = user.trim();
    let password = password.trim();
    if user.is_empty() || password.is_empty() {
        return Err(AppError::InvalidInput(
            "Please enter both username and password".to_string(),
        ));
    }
    Ok((user.to_string(), password.to_string()))
}

/// Create an account, then establish and persist the session
pub async fn sign_up(state: &AppState, user: &str, password: &str) -> AppResult<String> {
    let (user, password) = validated(user, password)?;

    let outcome = state.gateway.sign_up(&user, &password).await?;
    if let Some(error) = outcome.error {
        return Err(AppError::Unauthorized(error));
    }
    if outcome.message.as_deref() != Some(SIGNUP_OK) {
        return Err(AppError::Unauthorized("Signup failed".to_string()));
    }

    state.sign_in(&user).await?;
    tracing::info!(username = %user, "User signed up");
    Ok(user)
}

/// Authenticate, then establish and persist the session
pub async fn sign_in(state: &AppState, user: &str, password: &str) -> AppResult<String> {
    let (user, password) = validated(user, password)?;

    let outcome = state.gateway.sign_in(&user, &password).await?;
    if let Some(error) = outcome.error {
        return Err(AppError::Unauthorized(error));
    }
    if outcome.message.as_deref() != Some(LOGIN_OK) {
        return Err(AppError::Unauthorized("Login failed".to_string()));
    }

    state.sign_in(&user).await?;
    tracing::info!(username = %user, "User logged in");
    Ok(user)
}

/// Destroy the session and forget the previous user's view state
pub async fn sign_out(state: &AppState) -> AppResult<()> {
    state.sign_out().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::{AuthOutcome, MockRecommenderApi};
    use crate::session::SessionFile;
    use crate::testing::{signed_in_state, signed_out_state};

    fn ok_outcome(message: &str) -> AuthOutcome {
        AuthOutcome {
            message: Some(message.to_string()),
            error: None,
        }
    }

    #[tokio::test]
    async fn test_login_establishes_and_persists_session() {
        let mut gateway = MockRecommenderApi::new();
        gateway
            .expect_sign_in()
            .withf(|user, password| user == "alice" && password == "hunter2")
            .times(1)
            .returning(|_, _| Ok(ok_outcome(LOGIN_OK)));

        let (_dir, state) = signed_out_state(gateway);

        let username = sign_in(&state, "alice", "hunter2").await.unwrap();
        assert_eq!(username, "alice");
        assert_eq!(state.current_user().await, Some("alice".to_string()));

        // The identity survives a restart.
        let restored = SessionFile::new(&state.config.session_file);
        assert_eq!(restored.load(), Some("alice".to_string()));
    }

    #[tokio::test]
    async fn test_login_trims_credentials() {
        let mut gateway = MockRecommenderApi::new();
        gateway
            .expect_sign_in()
            .withf(|user, password| user == "alice" && password == "hunter2")
            .times(1)
            .returning(|_, _| Ok(ok_outcome(LOGIN_OK)));

        let (_dir, state) = signed_out_state(gateway);
        sign_in(&state, "  alice ", " hunter2 ").await.unwrap();
    }

    #[tokio::test]
    async fn test_login_rejection_leaves_no_session() {
        let mut gateway = MockRecommenderApi::new();
        gateway.expect_sign_in().times(1).returning(|_, _| {
            Ok(AuthOutcome {
                message: None,
                error: Some("Invalid credentials".to_string()),
            })
        });

        let (_dir, state) = signed_out_state(gateway);

        let result = sign_in(&state, "alice", "wrong").await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
        assert_eq!(state.current_user().await, None);
    }

    #[tokio::test]
    async fn test_blank_credentials_never_reach_the_gateway() {
        let gateway = MockRecommenderApi::new();
        let (_dir, state) = signed_out_state(gateway);

        let result = sign_in(&state, "   ", "").await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_signup_success_establishes_session() {
        let mut gateway = MockRecommenderApi::new();
        gateway
            .expect_sign_up()
            .times(1)
            .returning(|_, _| Ok(ok_outcome(SIGNUP_OK)));

        let (_dir, state) = signed_out_state(gateway);

        sign_up(&state, "bob", "secret").await.unwrap();
        assert_eq!(state.current_user().await, Some("bob".to_string()));
    }

    #[tokio::test]
    async fn test_unexpected_signup_message_is_a_failure() {
        let mut gateway = MockRecommenderApi::new();
        gateway
            .expect_sign_up()
            .times(1)
            .returning(|_, _| Ok(ok_outcome("Something else")));

        let (_dir, state) = signed_out_state(gateway);

        assert!(sign_up(&state, "bob", "secret").await.is_err());
        assert_eq!(state.current_user().await, None);
    }

    #[tokio::test]
    async fn test_logout_clears_session_and_view_state() {
        let gateway = MockRecommenderApi::new();
        let (_dir, state) = signed_in_state(gateway, "alice").await;
        state.add_favourite(27205).await;

        sign_out(&state).await.unwrap();

        assert_eq!(state.current_user().await, None);
        assert!(state.favourite_ids().await.is_empty());
        assert!(state.suggestions.snapshot().await.is_empty());

        let restored = SessionFile::new(&state.config.session_file);
        assert_eq!(restored.load(), None);
    }
}
