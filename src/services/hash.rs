//! Password hashing capability used by the recovery workflow.

use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

/// Converts a plaintext password into its stored, non-reversible form.
///
/// Mockable using mockall; use `MockHashProvider` in tests.
#[cfg_attr(test, mockall::automock)]
pub trait HashProvider: Send + Sync {
    /// Hash a plaintext password for storage
    fn generate_hash(&self, plaintext: &str) -> anyhow::Result<String>;

    /// Check a plaintext password against a stored hash
    fn compare_hash(&self, plaintext: &str, hashed: &str) -> anyhow::Result<bool>;
}

/// Production hasher backed by Argon2 with per-password salts.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2HashProvider;

impl HashProvider for Argon2HashProvider {
    fn generate_hash(&self, plaintext: &str) -> anyhow::Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let password_hash = argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?;

        Ok(password_hash.to_string())
    }

    fn compare_hash(&self, plaintext: &str, hashed: &str) -> anyhow::Result<bool> {
        let parsed_hash = PasswordHash::new(hashed)
            .map_err(|e| anyhow::anyhow!("Invalid password hash: {}", e))?;

        let argon2 = Argon2::default();
        match argon2.verify_password(plaintext.as_bytes(), &parsed_hash) {
            Ok(_) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(anyhow::anyhow!("Password verification error: {}", e)),
        }
    }
}

/// Deterministic identity hasher: stores the plaintext unchanged.
///
/// Test double kept interchangeable with [`Argon2HashProvider`] so
/// scenarios can assert on stored values directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextHashProvider;

impl HashProvider for PlainTextHashProvider {
    fn generate_hash(&self, plaintext: &str) -> anyhow::Result<String> {
        Ok(plaintext.to_string())
    }

    fn compare_hash(&self, plaintext: &str, hashed: &str) -> anyhow::Result<bool> {
        Ok(plaintext == hashed)
    }
}
