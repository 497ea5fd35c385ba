use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::DirectoryError;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::models::LoginResult;
use crate::domain::auth::models::UserId;
use crate::domain::auth::models::UserRecord;
use crate::domain::token::models::TokenPair;
use crate::domain::token::models::TokenStatus;

/// Port for user-directory lookups (external service).
///
/// Implementations must bound each call with a timeout and surface
/// transport failures as `DirectoryError`, distinct from a confirmed
/// not-found (`Ok(None)`). Cancellation propagates by dropping the
/// returned future.
#[async_trait]
pub trait UserDirectoryPort: Send + Sync + 'static {
    /// Resolve a user record by email address.
    ///
    /// # Returns
    /// The record, or None when the directory confirms no such user
    ///
    /// # Errors
    /// * `Unavailable` - directory unreachable or timed out
    /// * `UnexpectedStatus` / `InvalidBody` - protocol-level failures
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<UserRecord>, DirectoryError>;

    /// Resolve a user record by unique identifier.
    ///
    /// # Returns
    /// The record, or None when the directory confirms no such user
    ///
    /// # Errors
    /// * `Unavailable` - directory unreachable or timed out
    /// * `UnexpectedStatus` / `InvalidBody` - protocol-level failures
    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserRecord>, DirectoryError>;
}

/// Port for the authentication use cases exposed to the transport layer.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Authenticate a credential pair and mint a token pair.
    ///
    /// # Errors
    /// * `InvalidCredentials` - unknown email or wrong password (collapsed)
    /// * `UserInactive` - account resolved but administratively disabled
    /// * `DirectoryUnavailable` - user directory could not be reached
    /// * `Internal` - signing or other unexpected failure
    async fn login(&self, email: &EmailAddress, password: &str) -> Result<LoginResult, AuthError>;

    /// Check a presented access token.
    ///
    /// Validation failures never surface as errors: every rejection folds
    /// into `TokenStatus { valid: false, claims: None }`. "Is this token
    /// good?" is a yes/no question for downstream consumers.
    async fn validate_token(&self, token: &str) -> Result<TokenStatus, AuthError>;

    /// Rotate a refresh token into a fresh token pair.
    ///
    /// # Errors
    /// * `Token` - malformed, invalid, expired, or wrong-purpose token
    /// * `InvalidToken` - the embedded identity no longer resolves
    /// * `UserInactive` - account has been disabled since issuance
    /// * `DirectoryUnavailable` - user directory could not be reached
    async fn refresh_token(&self, refresh_token: &str) -> Result<TokenPair, AuthError>;
}
