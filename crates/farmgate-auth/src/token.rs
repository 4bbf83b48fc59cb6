//! Bearer tokens issued by the auth backend.

use serde::{Deserialize, Serialize};

/// A bearer token with its expiry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthToken {
    /// The raw token value sent in the Authorization header.
    pub access_token: String,
    /// Unix timestamp when the token expires. `None` means the backend did
    /// not report one; such tokens are treated as live until logout.
    pub expires_at: Option<i64>,
}

impl AuthToken {
    /// Wrap a token that never expires locally.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            expires_at: None,
        }
    }

    /// Wrap a token with a lifetime in seconds from `issued_at`.
    pub fn with_expiry(access_token: impl Into<String>, issued_at: i64, expires_in: i64) -> Self {
        Self {
            access_token: access_token.into(),
            expires_at: Some(issued_at + expires_in),
        }
    }

    /// The value for the Authorization header, without the scheme.
    pub fn bearer(&self) -> &str {
        &self.access_token
    }

    /// Check whether the token has expired as of `now`.
    pub fn is_expired(&self, now: i64) -> bool {
        match self.expires_at {
            Some(expires_at) => now >= expires_at,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_without_expiry_never_expires() {
        let token = AuthToken::new("abc");
        assert!(!token.is_expired(i64::MAX));
    }

    #[test]
    fn test_token_with_expiry() {
        let token = AuthToken::with_expiry("abc", 1_000, 3_600);
        assert!(!token.is_expired(4_599));
        assert!(token.is_expired(4_600));
        assert!(token.is_expired(9_999));
    }
}
