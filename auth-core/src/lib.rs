//! Authentication primitives library
//!
//! Provides the building blocks for credential and token handling:
//! - Password verification (Argon2id, PHC string format)
//! - Signed bearer token encoding and decoding (JWT, HS256)
//!
//! Services compose these into their own authentication flows; this crate
//! performs no I/O and holds no configuration beyond the signing secret
//! handed to the codec.
//!
//! # Examples
//!
//! ## Verifying a credential
//! ```
//! use auth_core::PasswordVerifier;
//!
//! let verifier = PasswordVerifier::new();
//! let hash = verifier.hash("my_password").unwrap();
//! let is_valid = verifier.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Minting and decoding a token
//! ```
//! use auth_core::jwt::JwtCodec;
//! use auth_core::jwt::TokenClaims;
//! use auth_core::jwt::TokenPurpose;
//! use chrono::Duration;
//!
//! let codec = JwtCodec::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = TokenClaims::issue(
//!     "user123",
//!     "user@example.com",
//!     "Ada",
//!     "Lovelace",
//!     "token-issuer",
//!     TokenPurpose::Access,
//!     Duration::hours(1),
//! );
//! let token = codec.encode(&claims).unwrap();
//! let decoded = codec.decode(&token).unwrap();
//! assert_eq!(decoded, claims);
//! ```

pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use jwt::JwtCodec;
pub use jwt::TokenClaims;
pub use jwt::TokenError;
pub use jwt::TokenPurpose;
pub use password::PasswordError;
pub use password::PasswordVerifier;
