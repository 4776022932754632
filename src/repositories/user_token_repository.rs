//! Reset token store trait for dependency injection and testing.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::AppError;
use crate::models::user_token::UserToken;
use crate::services::clock::Clock;

/// Store for password reset tokens.
///
/// Mockable using mockall; use `MockUserTokenRepository` in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserTokenRepository: Send + Sync {
    /// Issue a new reset token bound to `user_id`
    async fn generate(&self, user_id: &str) -> Result<UserToken, AppError>;

    /// Exact-match lookup by token string, no side effects
    async fn find_by_token(&self, token: &str) -> Result<Option<UserToken>, AppError>;
}

/// In-memory token store keyed by token string.
///
/// Issued tokens are timestamped through the injected [`Clock`], which
/// keeps expiry behavior deterministic under test.
#[derive(Clone)]
pub struct InMemoryUserTokenRepository {
    tokens: Arc<RwLock<HashMap<String, UserToken>>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryUserTokenRepository {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
            clock,
        }
    }
}

#[async_trait]
impl UserTokenRepository for InMemoryUserTokenRepository {
    async fn generate(&self, user_id: &str) -> Result<UserToken, AppError> {
        let token = UserToken::new(user_id, self.clock.now());
        let mut tokens = self.tokens.write().await;
        tokens.insert(token.token.clone(), token.clone());
        Ok(token)
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<UserToken>, AppError> {
        let tokens = self.tokens.read().await;
        Ok(tokens.get(token).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::clock::ManualClock;
    use chrono::{TimeZone, Utc};

    #[tokio::test]
    async fn generate_binds_user_and_clock_time() {
        let issued_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let clock = Arc::new(ManualClock::new(issued_at));
        let repo = InMemoryUserTokenRepository::new(clock);

        let token = repo.generate("user-1").await.unwrap();

        assert_eq!(token.user_id, "user-1");
        assert_eq!(token.created_at, issued_at);
    }

    #[tokio::test]
    async fn find_by_token_returns_generated_record() {
        let clock = Arc::new(ManualClock::start_now());
        let repo = InMemoryUserTokenRepository::new(clock);

        let issued = repo.generate("user-1").await.unwrap();
        let found = repo.find_by_token(&issued.token).await.unwrap().unwrap();

        assert_eq!(found.id, issued.id);
        assert_eq!(found.user_id, "user-1");
    }

    #[tokio::test]
    async fn unknown_token_returns_none() {
        let clock = Arc::new(ManualClock::start_now());
        let repo = InMemoryUserTokenRepository::new(clock);

        let found = repo.find_by_token("non-existing-token").await.unwrap();
        assert!(found.is_none());
    }
}
