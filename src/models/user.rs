//! Models representing user accounts and account creation payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Stored representation of a user account.
pub struct User {
    /// Unique identifier for the user.
    pub id: String,
    /// Human-readable full name.
    pub name: String,
    /// Email address used for login and recovery mail.
    pub email: String,
    /// One-way hash of the user's password.
    pub password_hash: String,
    /// Creation timestamp for auditing.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp for auditing.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Constructs a new user with a freshly generated identifier.
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Payload for creating a new user account.
pub struct CreateUser {
    pub name: String,
    pub email: String,
    /// Value stored as the user's password hash. Registration hashes
    /// before calling the store; this core never sees sign-up plaintext.
    pub password: String,
}
