use thiserror::Error;

use super::claims::TokenPurpose;

/// Error type for token encoding, decoding, and validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token is malformed: {0}")]
    Malformed(String),

    #[error("token is invalid: {0}")]
    Invalid(String),

    #[error("token has expired")]
    Expired,

    #[error("token purpose mismatch: expected {expected}, found {found}")]
    PurposeMismatch {
        expected: TokenPurpose,
        found: TokenPurpose,
    },

    #[error("failed to sign token: {0}")]
    SigningFailed(String),
}
