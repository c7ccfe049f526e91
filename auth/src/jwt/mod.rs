pub mod claims;
pub mod codec;
pub mod errors;
pub mod issuer;
pub mod verifier;

pub use claims::Claims;
pub use claims::Identity;
pub use errors::JwtError;
pub use issuer::TokenIssuer;
pub use verifier::TokenVerifier;
