use auth_core::TokenError;
use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for user-directory gateway operations.
///
/// A confirmed "no such record" is not an error (the port returns
/// `Ok(None)`); these variants cover the transport and protocol failures
/// that must stay distinguishable from not-found.
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    #[error("user directory unavailable: {0}")]
    Unavailable(String),

    #[error("unexpected status from user directory: {0}")]
    UnexpectedStatus(u16),

    #[error("invalid user directory response: {0}")]
    InvalidBody(String),
}

/// Top-level error for authentication operations.
///
/// Closed taxonomy matched on by tag; every variant is terminal for the
/// request that raised it, nothing is retried internally.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Collapsed result of "no such user" and "wrong password"; the two are
    /// never distinguishable to the caller.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("user is inactive")]
    UserInactive,

    #[error(transparent)]
    Token(#[from] TokenError),

    /// The token was valid at the protocol level but the identity it names
    /// no longer resolves.
    #[error("invalid token")]
    InvalidToken,

    #[error("user directory unavailable: {0}")]
    DirectoryUnavailable(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<DirectoryError> for AuthError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::Unavailable(message) => AuthError::DirectoryUnavailable(message),
            other => AuthError::Internal(other.to_string()),
        }
    }
}
