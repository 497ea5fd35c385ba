use std::sync::Arc;

use async_trait::async_trait;
use auth_core::PasswordVerifier;
use auth_core::TokenPurpose;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::models::LoginResult;
use crate::domain::auth::models::UserId;
use crate::domain::auth::models::UserSummary;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::UserDirectoryPort;
use crate::domain::token::models::TokenPair;
use crate::domain::token::models::TokenStatus;
use crate::domain::token::service::TokenService;

/// Authentication use-case orchestrator.
///
/// Coordinates the user directory, credential verification, and the token
/// lifecycle service. Stateless across requests; every login and refresh
/// re-fetches the user record instead of trusting anything cached or
/// claim-embedded beyond the user id.
pub struct AuthService<D>
where
    D: UserDirectoryPort,
{
    directory: Arc<D>,
    tokens: TokenService,
    passwords: PasswordVerifier,
}

impl<D> AuthService<D>
where
    D: UserDirectoryPort,
{
    /// Create an orchestrator with injected dependencies.
    pub fn new(directory: Arc<D>, tokens: TokenService) -> Self {
        Self {
            directory,
            tokens,
            passwords: PasswordVerifier::new(),
        }
    }
}

#[async_trait]
impl<D> AuthServicePort for AuthService<D>
where
    D: UserDirectoryPort,
{
    async fn login(&self, email: &EmailAddress, password: &str) -> Result<LoginResult, AuthError> {
        let user = self
            .directory
            .find_by_email(email)
            .await?
            // "No such user" collapses into the same outcome as a wrong
            // password so callers cannot enumerate accounts.
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.is_active {
            return Err(AuthError::UserInactive);
        }

        match self.passwords.verify(password, &user.password_hash) {
            Ok(true) => {}
            // A structurally broken stored hash reads the same as a mismatch.
            Ok(false) | Err(_) => return Err(AuthError::InvalidCredentials),
        }

        let tokens = self.tokens.mint_pair(&user)?;

        Ok(LoginResult {
            user: UserSummary::from(&user),
            tokens,
        })
    }

    async fn validate_token(&self, token: &str) -> Result<TokenStatus, AuthError> {
        match self.tokens.validate(token, TokenPurpose::Access) {
            Ok(claims) => Ok(TokenStatus::valid(claims)),
            Err(err) => {
                tracing::debug!(error = %err, "Access token rejected");
                Ok(TokenStatus::invalid())
            }
        }
    }

    async fn refresh_token(&self, refresh_token: &str) -> Result<TokenPair, AuthError> {
        let claims = self.tokens.validate(refresh_token, TokenPurpose::Refresh)?;

        let user_id =
            UserId::from_string(&claims.sub).map_err(|_| AuthError::InvalidToken)?;

        let user = self
            .directory
            .find_by_id(&user_id)
            .await?
            .ok_or(AuthError::InvalidToken)?;

        if !user.is_active {
            return Err(AuthError::UserInactive);
        }

        Ok(self.tokens.refresh_pair(refresh_token, &user)?)
    }
}
