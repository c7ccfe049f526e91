//! Credential and token lifecycle library
//!
//! Provides the authentication core used by the hotel backend:
//! - Password hashing (Argon2id)
//! - Signing secret derivation with timed rotation and a grace period
//! - JWT issuance and verification (HMAC only)
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Issuing and Verifying Tokens
//! ```
//! use std::sync::Arc;
//!
//! use auth::{Identity, SecretStore, StaticSecret, TokenIssuer, TokenVerifier};
//!
//! let store = Arc::new(SecretStore::new(StaticSecret::new("server-secret")));
//! let issuer = TokenIssuer::new(Arc::clone(&store));
//! let verifier = TokenVerifier::new(store);
//!
//! let token = issuer.issue(&Identity::new(1, "admin", "admin manager")).unwrap();
//! let claims = verifier.verify(&token).unwrap();
//! assert_eq!(claims.username, "admin");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use std::sync::Arc;
//!
//! use auth::{Authenticator, Identity, SecretStore, StaticSecret};
//!
//! let store = Arc::new(SecretStore::new(StaticSecret::new("server-secret")));
//! let auth = Authenticator::new(store);
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let identity = Identity::new(1, "alice", "main manager");
//! let result = auth.authenticate("password123", &hash, &identity).unwrap();
//!
//! // Validate token
//! let claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(claims.uid, 1);
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;
pub mod secret;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::Identity;
pub use jwt::JwtError;
pub use jwt::TokenIssuer;
pub use jwt::TokenVerifier;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use secret::Clock;
pub use secret::SecretError;
pub use secret::SecretSource;
pub use secret::SecretStore;
pub use secret::StaticSecret;
pub use secret::SystemClock;
