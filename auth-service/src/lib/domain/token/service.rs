use auth_core::JwtCodec;
use auth_core::TokenClaims;
use auth_core::TokenError;
use auth_core::TokenPurpose;
use chrono::Duration;
use chrono::Utc;

use crate::domain::auth::models::UserRecord;
use crate::domain::token::models::TokenPair;
use crate::domain::token::models::BEARER_SCHEME;

/// Issuer written into every minted token.
const ISSUER: &str = "auth-service";

/// Token lifecycle service.
///
/// Sole owner of the signing secret (via the codec) and the two validity
/// windows for the process lifetime; no other component mints or verifies
/// signatures. Immutable after construction and shared read-only across
/// request tasks.
pub struct TokenService {
    codec: JwtCodec,
    access_validity: Duration,
    refresh_validity: Duration,
}

impl TokenService {
    /// Create a token service over a signing secret and validity windows.
    pub fn new(secret: &[u8], access_validity: Duration, refresh_validity: Duration) -> Self {
        Self {
            codec: JwtCodec::new(secret),
            access_validity,
            refresh_validity,
        }
    }

    /// Mint a coupled access/refresh pair bound to the given user.
    ///
    /// Each token carries its own validity window; `expires_in` reports the
    /// access window in seconds.
    ///
    /// # Errors
    /// * `SigningFailed` - the codec could not encode a token
    pub fn mint_pair(&self, user: &UserRecord) -> Result<TokenPair, TokenError> {
        let access_token = self.issue_token(user, TokenPurpose::Access, self.access_validity)?;
        let refresh_token = self.issue_token(user, TokenPurpose::Refresh, self.refresh_validity)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            token_type: BEARER_SCHEME.to_string(),
            expires_in: self.access_validity.num_seconds(),
        })
    }

    fn issue_token(
        &self,
        user: &UserRecord,
        purpose: TokenPurpose,
        validity: Duration,
    ) -> Result<String, TokenError> {
        let claims = TokenClaims::issue(
            user.id.to_string(),
            user.email.as_str(),
            user.first_name.clone(),
            user.last_name.clone(),
            ISSUER,
            purpose,
            validity,
        );

        self.codec.encode(&claims)
    }

    /// Decode a presented token and enforce its semantic validity.
    ///
    /// Checks, in order: signature and structure (from the codec),
    /// expiration (a token at or past its expiry instant is rejected), and
    /// the declared purpose against the purpose the call site expects.
    ///
    /// # Errors
    /// * `Malformed` / `Invalid` - re-raised from the codec
    /// * `Expired` - the validity window has elapsed
    /// * `PurposeMismatch` - token minted for the other use
    pub fn validate(&self, token: &str, expected: TokenPurpose) -> Result<TokenClaims, TokenError> {
        let claims = self.codec.decode(token)?;

        if claims.is_expired(Utc::now()) {
            return Err(TokenError::Expired);
        }

        if claims.purpose != expected {
            return Err(TokenError::PurposeMismatch {
                expected,
                found: claims.purpose,
            });
        }

        Ok(claims)
    }

    /// Rotate a refresh token into a fresh pair for the given user.
    ///
    /// The caller re-fetches the user from the directory first; this only
    /// re-validates the presented token and mints. This is the only path
    /// that produces a new refresh token.
    ///
    /// # Errors
    /// Validation errors from [`TokenService::validate`], or `SigningFailed`
    /// from minting.
    pub fn refresh_pair(
        &self,
        refresh_token: &str,
        user: &UserRecord,
    ) -> Result<TokenPair, TokenError> {
        self.validate(refresh_token, TokenPurpose::Refresh)?;
        self.mint_pair(user)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::auth::models::EmailAddress;
    use crate::domain::auth::models::UserId;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    fn test_user() -> UserRecord {
        UserRecord {
            id: UserId::new(),
            email: EmailAddress::new("ada@example.com".to_string()).unwrap(),
            password_hash: "$argon2id$test_hash".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn test_service() -> TokenService {
        TokenService::new(SECRET, Duration::hours(1), Duration::hours(24))
    }

    #[test]
    fn test_mint_pair_shape() {
        let service = test_service();
        let user = test_user();

        let pair = service.mint_pair(&user).expect("Failed to mint pair");

        assert!(!pair.access_token.is_empty());
        assert!(!pair.refresh_token.is_empty());
        assert_ne!(pair.access_token, pair.refresh_token);
        assert_eq!(pair.token_type, "Bearer");
        assert_eq!(pair.expires_in, 3600);
    }

    #[test]
    fn test_validate_minted_tokens() {
        let service = test_service();
        let user = test_user();
        let pair = service.mint_pair(&user).expect("Failed to mint pair");

        let access = service
            .validate(&pair.access_token, TokenPurpose::Access)
            .expect("Access token should validate");
        assert_eq!(access.sub, user.id.to_string());
        assert_eq!(access.email, "ada@example.com");
        assert_eq!(access.iss, "auth-service");
        assert_eq!(access.purpose, TokenPurpose::Access);

        let refresh = service
            .validate(&pair.refresh_token, TokenPurpose::Refresh)
            .expect("Refresh token should validate");
        assert_eq!(refresh.purpose, TokenPurpose::Refresh);
        assert_eq!(refresh.exp - refresh.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_validate_rejects_expired_token() {
        // Zero-width access window expires the token at its issuance instant
        let service = TokenService::new(SECRET, Duration::seconds(0), Duration::hours(24));
        let pair = service.mint_pair(&test_user()).expect("Failed to mint pair");

        let result = service.validate(&pair.access_token, TokenPurpose::Access);
        assert_eq!(result, Err(TokenError::Expired));
    }

    #[test]
    fn test_validate_rejects_wrong_purpose() {
        let service = test_service();
        let pair = service.mint_pair(&test_user()).expect("Failed to mint pair");

        let result = service.validate(&pair.refresh_token, TokenPurpose::Access);
        assert_eq!(
            result,
            Err(TokenError::PurposeMismatch {
                expected: TokenPurpose::Access,
                found: TokenPurpose::Refresh,
            })
        );

        let result = service.validate(&pair.access_token, TokenPurpose::Refresh);
        assert!(matches!(result, Err(TokenError::PurposeMismatch { .. })));
    }

    #[test]
    fn test_validate_rejects_foreign_signature() {
        let service = test_service();
        let foreign = TokenService::new(
            b"another_secret_key_32_bytes_long!!",
            Duration::hours(1),
            Duration::hours(24),
        );
        let pair = foreign.mint_pair(&test_user()).expect("Failed to mint pair");

        let result = service.validate(&pair.access_token, TokenPurpose::Access);
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_refresh_pair_mints_new_pair() {
        let service = test_service();
        let user = test_user();
        let pair = service.mint_pair(&user).expect("Failed to mint pair");

        let rotated = service
            .refresh_pair(&pair.refresh_token, &user)
            .expect("Refresh should mint a new pair");

        assert_eq!(rotated.expires_in, 3600);
        service
            .validate(&rotated.access_token, TokenPurpose::Access)
            .expect("Rotated access token should validate");
        service
            .validate(&rotated.refresh_token, TokenPurpose::Refresh)
            .expect("Rotated refresh token should validate");
    }

    #[test]
    fn test_refresh_pair_rejects_access_token() {
        let service = test_service();
        let user = test_user();
        let pair = service.mint_pair(&user).expect("Failed to mint pair");

        let result = service.refresh_pair(&pair.access_token, &user);
        assert!(matches!(result, Err(TokenError::PurposeMismatch { .. })));
    }
}
