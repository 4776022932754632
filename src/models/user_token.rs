//! Models for password reset tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Stored representation of a password reset token.
///
/// Immutable once created. Expiry is computed from `created_at`;
/// expired tokens remain in storage.
pub struct UserToken {
    /// Unique identifier for the token record.
    pub id: String,
    /// Opaque token string delivered to the user out of band.
    pub token: String,
    /// User this token authorizes a reset for. Non-owning reference
    /// that may no longer resolve at lookup time.
    pub user_id: String,
    /// Issuance timestamp the expiry window is measured from.
    pub created_at: DateTime<Utc>,
}

impl UserToken {
    /// Creates a token record bound to `user_id` with a fresh unique
    /// token string.
    pub fn new(user_id: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            token: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Payload for resetting a password with a token.
pub struct ResetPasswordPayload {
    /// Password reset token from the recovery email.
    pub token: String,
    /// Replacement password to hash and store.
    pub new_password: String,
}
