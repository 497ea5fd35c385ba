pub mod claims;
pub mod codec;
pub mod errors;

pub use claims::TokenClaims;
pub use claims::TokenPurpose;
pub use codec::JwtCodec;
pub use errors::TokenError;
