//! Reset-password workflow: validates a reset token and persists the
//! replacement password hash.

use std::sync::Arc;

use chrono::Duration;

use crate::error::AppError;
use crate::models::user_token::ResetPasswordPayload;
use crate::repositories::{UserRepository, UserTokenRepository};
use crate::services::clock::Clock;
use crate::services::hash::HashProvider;

/// Hours a reset token stays valid after being issued.
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 2;

/// Orchestrates the token store, user store and hasher to perform a
/// password reset. Collaborators are injected at construction time.
pub struct ResetPasswordService {
    users: Arc<dyn UserRepository>,
    user_tokens: Arc<dyn UserTokenRepository>,
    hasher: Arc<dyn HashProvider>,
    clock: Arc<dyn Clock>,
    token_ttl: Duration,
}

impl ResetPasswordService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        user_tokens: Arc<dyn UserTokenRepository>,
        hasher: Arc<dyn HashProvider>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            users,
            user_tokens,
            hasher,
            clock,
            token_ttl: Duration::hours(DEFAULT_TOKEN_TTL_HOURS),
        }
    }

    /// Overrides the token time-to-live (see `Config::token_ttl`).
    pub fn with_token_ttl(mut self, token_ttl: Duration) -> Self {
        self.token_ttl = token_ttl;
        self
    }

    /// Resets the password of the user the token was issued for.
    ///
    /// Fails with [`AppError::TokenNotFound`], [`AppError::UserNotFound`]
    /// or [`AppError::TokenExpired`]. A token exactly at its TTL is
    /// still accepted; only strictly older tokens are rejected. Every
    /// failure aborts before the store is written, so there is no
    /// partial-write path.
    pub async fn execute(&self, payload: ResetPasswordPayload) -> Result<(), AppError> {
        let user_token = self
            .user_tokens
            .find_by_token(&payload.token)
            .await?
            .ok_or(AppError::TokenNotFound)?;

        let mut user = self
            .users
            .find_by_id(&user_token.user_id)
            .await?
            .ok_or(AppError::UserNotFound)?;

        let token_age = self.clock.now() - user_token.created_at;
        if token_age > self.token_ttl {
            tracing::warn!(
                user_id = %user.id,
                token_age_minutes = token_age.num_minutes(),
                "Rejected expired password reset token"
            );
            return Err(AppError::TokenExpired);
        }

        user.password_hash = self.hasher.generate_hash(&payload.new_password)?;
        self.users.update(&user).await?;

        tracing::debug!(user_id = %user.id, "Password reset completed");
        Ok(())
    }
}
