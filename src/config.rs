use std::env;

use anyhow::anyhow;
use chrono::Duration;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Hours a password reset token stays valid after being issued.
    pub token_ttl_hours: i64,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let token_ttl_hours: i64 = env::var("RESET_TOKEN_TTL_HOURS")
            .unwrap_or_else(|_| "2".to_string())
            .parse()
            .unwrap_or(2);

        if token_ttl_hours <= 0 {
            return Err(anyhow!(
                "Invalid RESET_TOKEN_TTL_HOURS value: {}",
                token_ttl_hours
            ));
        }

        Ok(Config { token_ttl_hours })
    }

    /// Token time-to-live as a duration.
    pub fn token_ttl(&self) -> Duration {
        Duration::hours(self.token_ttl_hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the env var mutation cannot race a parallel test.
    #[test]
    fn load_reads_ttl_from_env_with_default() {
        env::remove_var("RESET_TOKEN_TTL_HOURS");
        let config = Config::load().unwrap();
        assert_eq!(config.token_ttl_hours, 2);
        assert_eq!(config.token_ttl(), Duration::hours(2));

        env::set_var("RESET_TOKEN_TTL_HOURS", "6");
        let config = Config::load().unwrap();
        assert_eq!(config.token_ttl_hours, 6);

        env::set_var("RESET_TOKEN_TTL_HOURS", "not-a-number");
        let config = Config::load().unwrap();
        assert_eq!(config.token_ttl_hours, 2);

        env::set_var("RESET_TOKEN_TTL_HOURS", "0");
        assert!(Config::load().is_err());

        env::remove_var("RESET_TOKEN_TTL_HOURS");
    }
}
