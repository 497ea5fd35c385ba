use std::fmt;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Declared use of a token.
///
/// The purpose travels inside the signed payload, so a token minted for one
/// use can never be presented for the other without failing validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenPurpose {
    Access,
    Refresh,
}

impl fmt::Display for TokenPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenPurpose::Access => write!(f, "access"),
            TokenPurpose::Refresh => write!(f, "refresh"),
        }
    }
}

/// Signed token payload.
///
/// Fixed claim shape: the RFC 7519 timing and identity claims plus the
/// profile fields and purpose this service encodes. Instants are integer
/// Unix seconds. Claims are immutable once minted; validation only reads
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (user identifier)
    pub sub: String,

    /// Email of the subject at issuance time
    pub email: String,

    pub first_name: String,

    pub last_name: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Not before (Unix timestamp)
    pub nbf: i64,

    /// Issuer
    pub iss: String,

    /// Unique token identifier
    pub jti: String,

    /// Declared purpose of the token
    pub purpose: TokenPurpose,
}

impl TokenClaims {
    /// Build claims for a subject with the given purpose and validity window.
    ///
    /// Sets `iat` and `nbf` to the current instant and `exp` to exactly
    /// `iat + validity`. The `jti` combines subject, purpose, and issuance
    /// second, so two tokens minted for the same subject in the same instant
    /// with different purposes remain distinguishable.
    pub fn issue(
        subject: impl ToString,
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        issuer: &str,
        purpose: TokenPurpose,
        validity: Duration,
    ) -> Self {
        let subject = subject.to_string();
        let now = Utc::now();
        let expiration = now + validity;

        Self {
            jti: format!("{}-{}-{}", subject, purpose, now.timestamp()),
            sub: subject,
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            iss: issuer.to_string(),
            purpose,
        }
    }

    /// Check whether the validity window has elapsed at the given instant.
    ///
    /// A token whose `exp` equals the instant is already expired.
    pub fn is_expired(&self, at: DateTime<Utc>) -> bool {
        self.exp <= at.timestamp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_sets_validity_window() {
        let claims = TokenClaims::issue(
            "user123",
            "user@example.com",
            "Ada",
            "Lovelace",
            "token-issuer",
            TokenPurpose::Access,
            Duration::hours(24),
        );

        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.email, "user@example.com");
        assert_eq!(claims.iss, "token-issuer");
        assert_eq!(claims.purpose, TokenPurpose::Access);
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
        assert_eq!(claims.nbf, claims.iat);
    }

    #[test]
    fn test_jti_distinguishes_purposes_in_same_instant() {
        let access = TokenClaims::issue(
            "user123",
            "user@example.com",
            "Ada",
            "Lovelace",
            "token-issuer",
            TokenPurpose::Access,
            Duration::hours(1),
        );
        let refresh = TokenClaims::issue(
            "user123",
            "user@example.com",
            "Ada",
            "Lovelace",
            "token-issuer",
            TokenPurpose::Refresh,
            Duration::hours(24),
        );

        assert_ne!(access.jti, refresh.jti);
        assert!(access.jti.contains("access"));
        assert!(refresh.jti.contains("refresh"));
    }

    #[test]
    fn test_is_expired_boundary() {
        let mut claims = TokenClaims::issue(
            "user123",
            "user@example.com",
            "Ada",
            "Lovelace",
            "token-issuer",
            TokenPurpose::Access,
            Duration::hours(1),
        );
        let now = Utc::now();

        claims.exp = now.timestamp() + 1;
        assert!(!claims.is_expired(now));

        // Expiring exactly now counts as expired
        claims.exp = now.timestamp();
        assert!(claims.is_expired(now));

        claims.exp = now.timestamp() - 1;
        assert!(claims.is_expired(now));
    }

    #[test]
    fn test_purpose_serializes_lowercase() {
        let access = serde_json::to_string(&TokenPurpose::Access).unwrap();
        let refresh = serde_json::to_string(&TokenPurpose::Refresh).unwrap();

        assert_eq!(access, "\"access\"");
        assert_eq!(refresh, "\"refresh\"");
    }
}
