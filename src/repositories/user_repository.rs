//! User store trait for dependency injection and testing.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::AppError;
use crate::models::user::{CreateUser, User};

/// Store for user accounts.
///
/// This trait is designed to be mockable using mockall for testing.
/// Use `MockUserRepository` in tests to mock the behavior.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user
    async fn create(&self, data: CreateUser) -> Result<User, AppError>;

    /// Find a user by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;

    /// Find a user by email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Persist changes to an existing user
    async fn update(&self, user: &User) -> Result<User, AppError>;
}

/// In-memory user store keyed by user id.
///
/// Interchangeable with any database-backed implementation of
/// [`UserRepository`]; used for tests and local wiring. Email
/// uniqueness is assumed upstream and not enforced here.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, data: CreateUser) -> Result<User, AppError> {
        let user = User::new(data.name, data.email, data.password);
        let mut users = self.users.write().await;
        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.users.read().await;
        Ok(users.values().find(|user| user.email == email).cloned())
    }

    async fn update(&self, user: &User) -> Result<User, AppError> {
        let mut users = self.users.write().await;
        users.insert(user.id.clone(), user.clone());
        Ok(user.clone())
    }
}
