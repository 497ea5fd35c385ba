use auth_core::TokenClaims;
use serde::Serialize;

/// Scheme label returned with every minted pair.
pub const BEARER_SCHEME: &str = "Bearer";

/// Coupled pair of signed tokens returned after login or refresh.
///
/// Created fresh on every call and never stored; its lifetime is the
/// response that carries it. `expires_in` counts the access token's
/// validity window in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Yes/no outcome of an access-token check.
///
/// Claims are present exactly when the token is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenStatus {
    pub valid: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub claims: Option<TokenClaims>,
}

impl TokenStatus {
    pub fn valid(claims: TokenClaims) -> Self {
        Self {
            valid: true,
            claims: Some(claims),
        }
    }

    pub fn invalid() -> Self {
        Self {
            valid: false,
            claims: None,
        }
    }
}
