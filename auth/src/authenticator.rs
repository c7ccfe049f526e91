use std::sync::Arc;

use chrono::Duration;

use crate::jwt::Claims;
use crate::jwt::Identity;
use crate::jwt::JwtError;
use crate::jwt::TokenIssuer;
use crate::jwt::TokenVerifier;
use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::secret::SecretStore;

/// Authentication coordinator combining password verification and token handling.
///
/// Issuer and verifier share one `SecretStore`, so a rotation seen by either
/// is seen by both.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    issuer: TokenIssuer,
    verifier: TokenVerifier,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// Signed access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator over a shared secret store.
    ///
    /// Tokens live for 24 hours.
    pub fn new(store: Arc<SecretStore>) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            issuer: TokenIssuer::new(Arc::clone(&store)),
            verifier: TokenVerifier::new(store),
        }
    }

    /// Replace the lifetime of issued tokens.
    pub fn with_token_lifetime(mut self, lifetime: Duration) -> Self {
        self.issuer = self.issuer.with_lifetime(lifetime);
        self
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a token for `identity`.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `identity` - Identity to embed in the token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash is malformed
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        identity: &Identity,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.issuer.issue(identity)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Issue a token without password verification.
    ///
    /// Used right after registration, when the plaintext was just hashed.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn generate_token(&self, identity: &Identity) -> Result<String, JwtError> {
        self.issuer.issue(identity)
    }

    /// Verify a token and decode its claims.
    ///
    /// # Errors
    /// * `JwtError` - Token validation or decoding failed
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.verifier.verify(token)
    }

    /// True iff the token verifies.
    pub fn is_valid(&self, token: &str) -> bool {
        self.verifier.is_valid(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secret::StaticSecret;

    fn authenticator() -> Authenticator {
        Authenticator::new(Arc::new(SecretStore::new(StaticSecret::new(
            "test_secret_key_at_least_32_bytes!",
        ))))
    }

    #[test]
    fn test_authenticate_success() {
        let authenticator = authenticator();

        let password = "my_password";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        let identity = Identity::new(5, "frontdesk", "main manager");
        let result = authenticator
            .authenticate(password, &hash, &identity)
            .expect("Authentication failed");

        assert!(!result.access_token.is_empty());

        let decoded = authenticator
            .validate_token(&result.access_token)
            .expect("Token validation failed");
        assert_eq!(decoded.identity(), identity);
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = authenticator();

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let identity = Identity::new(5, "frontdesk", "main manager");
        let result = authenticator.authenticate("wrong_password", &hash, &identity);
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_malformed_hash() {
        let authenticator = authenticator();

        let identity = Identity::new(5, "frontdesk", "main manager");
        let result = authenticator.authenticate("my_password", "plaintext-in-db", &identity);
        assert!(matches!(
            result,
            Err(AuthenticationError::PasswordError(_))
        ));
    }

    #[test]
    fn test_generate_and_validate_token() {
        let authenticator = authenticator().with_token_lifetime(Duration::hours(1));

        let identity = Identity::new(9, "cleaner_01", "cleaner");
        let token = authenticator
            .generate_token(&identity)
            .expect("Failed to generate token");

        let decoded = authenticator
            .validate_token(&token)
            .expect("Failed to validate token");

        assert_eq!(decoded.uid, 9);
        assert_eq!(decoded.exp - decoded.iat, 60 * 60);
        assert!(authenticator.is_valid(&token));
    }

    #[test]
    fn test_validate_invalid_token() {
        let authenticator = authenticator();

        let result = authenticator.validate_token("invalid.token.here");
        assert!(result.is_err());
        assert!(!authenticator.is_valid("invalid.token.here"));
    }
}
