use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::TokenClaims;
use super::errors::TokenError;

/// Codec for signed bearer tokens.
///
/// Encodes claims into compact three-part JWTs signed with HS256 (HMAC with
/// SHA-256) over the shared secret, and decodes them back, verifying the
/// signature and the declared signing method.
///
/// Expiration is deliberately NOT enforced here: an expired token still
/// decodes so callers needing raw claims (diagnostics, refresh error
/// reporting) can read them. Expiry is a semantic check layered on top by
/// the token lifecycle service.
pub struct JwtCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtCodec {
    /// Create a codec over a shared signing secret.
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Encode claims into a signed token string.
    ///
    /// Deterministic for identical claims. Fails only when the payload
    /// cannot be serialized, which the fixed claim shape rules out in
    /// normal operation.
    ///
    /// # Errors
    /// * `SigningFailed` - serialization or signing failed
    pub fn encode(&self, claims: &TokenClaims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    /// Decode a token string and verify its signature.
    ///
    /// The declared signing method is checked before signature
    /// verification: a token whose header names a different or absent
    /// algorithm is rejected as `Invalid` even if otherwise well-formed,
    /// closing the downgrade/confusion hole where an attacker supplies a
    /// token signed another way.
    ///
    /// # Errors
    /// * `Malformed` - the three-part structure or header cannot be parsed
    /// * `Invalid` - signature or signing method does not verify
    pub fn decode(&self, token: &str) -> Result<TokenClaims, TokenError> {
        self.check_signing_method(token)?;

        let mut validation = Validation::new(self.algorithm);
        // Expiry is validated semantically by the caller, not structurally here
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let token_data =
            decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidToken
                    | ErrorKind::Base64(_)
                    | ErrorKind::Json(_)
                    | ErrorKind::Utf8(_) => TokenError::Malformed(e.to_string()),
                    _ => TokenError::Invalid(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }

    fn check_signing_method(&self, token: &str) -> Result<(), TokenError> {
        let segments: Vec<&str> = token.split('.').collect();
        if segments.len() != 3 {
            return Err(TokenError::Malformed(
                "expected three dot-separated segments".to_string(),
            ));
        }

        let header_bytes = URL_SAFE_NO_PAD
            .decode(segments[0])
            .map_err(|e| TokenError::Malformed(format!("undecodable header: {}", e)))?;
        let header: serde_json::Value = serde_json::from_slice(&header_bytes)
            .map_err(|e| TokenError::Malformed(format!("unparsable header: {}", e)))?;

        match header.get("alg").and_then(serde_json::Value::as_str) {
            Some("HS256") => Ok(()),
            Some(other) => Err(TokenError::Invalid(format!(
                "unexpected signing method: {}",
                other
            ))),
            None => Err(TokenError::Invalid(
                "missing signing method in header".to_string(),
            )),
        }
    }
}
