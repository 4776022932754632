use thiserror::Error;

/// Application-level failures surfaced to the calling layer.
///
/// The recovery workflow fails terminally: no retry, no compensating
/// writes. The caller maps these to user-facing responses.
#[derive(Debug, Error)]
pub enum AppError {
    /// The supplied reset token matches no stored record.
    #[error("Password reset token not found")]
    TokenNotFound,

    /// The user referenced by the reset token no longer resolves.
    #[error("User not found")]
    UserNotFound,

    /// The reset token is older than its time-to-live. Expired tokens
    /// stay in storage; expiry is computed, not enforced by deletion.
    #[error("Password reset token expired")]
    TokenExpired,

    /// Failure inside a collaborator (hasher, storage backend).
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Stable machine-readable code for logs and API mappings.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::TokenNotFound => "TOKEN_NOT_FOUND",
            AppError::UserNotFound => "USER_NOT_FOUND",
            AppError::TokenExpired => "TOKEN_EXPIRED",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_match_variants() {
        assert_eq!(
            AppError::TokenNotFound.to_string(),
            "Password reset token not found"
        );
        assert_eq!(AppError::UserNotFound.to_string(), "User not found");
        assert_eq!(
            AppError::TokenExpired.to_string(),
            "Password reset token expired"
        );
    }

    #[test]
    fn codes_are_stable() {
        assert_eq!(AppError::TokenNotFound.code(), "TOKEN_NOT_FOUND");
        assert_eq!(AppError::UserNotFound.code(), "USER_NOT_FOUND");
        assert_eq!(AppError::TokenExpired.code(), "TOKEN_EXPIRED");
        assert_eq!(
            AppError::Internal(anyhow::anyhow!("boom")).code(),
            "INTERNAL_ERROR"
        );
    }

    #[test]
    fn anyhow_errors_convert_to_internal() {
        let err: AppError = anyhow::anyhow!("hash failure").into();
        assert!(matches!(err, AppError::Internal(_)));
        assert_eq!(err.to_string(), "Internal error: hash failure");
    }
}
