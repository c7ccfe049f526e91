use std::sync::Arc;

use super::claims::Claims;
use super::codec;
use super::errors::JwtError;
use crate::secret::SecretStore;

/// Verifies presented tokens against every active secret.
///
/// Tokens signed with the previous secret keep verifying until the next
/// rotation retires it (the grace period).
pub struct TokenVerifier {
    store: Arc<SecretStore>,
}

impl TokenVerifier {
    pub fn new(store: Arc<SecretStore>) -> Self {
        Self { store }
    }

    /// Verify `token` and return its claims.
    ///
    /// Secrets are tried current first, then previous; the first one that
    /// checks the signature of an unexpired token wins. Otherwise the result
    /// is `TokenExpired` if any secret matched, else the last decode error.
    ///
    /// # Errors
    /// * `UnsupportedAlgorithm` - Header declares a non-HMAC algorithm
    /// * `Malformed` - Token cannot be decoded
    /// * `InvalidSignature` - No active secret matches the signature
    /// * `TokenExpired` - Signature matches but `exp` has passed
    /// * `SecretUnavailable` - Active secrets could not be obtained
    pub fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        let algorithm = codec::ensure_hmac_algorithm(token)?;
        let secrets = self.store.active_secrets()?;
        let now = self.store.now().timestamp();

        let mut last_error = JwtError::InvalidSignature;
        for secret in &secrets {
            match codec::decode::<Claims>(token, secret, algorithm) {
                Ok(claims) if claims.is_expired(now) => last_error = JwtError::TokenExpired,
                Ok(claims) => return Ok(claims),
                // Expiry outranks a mismatch from another secret.
                Err(_) if matches!(last_error, JwtError::TokenExpired) => {}
                Err(e) => last_error = e,
            }
        }

        tracing::debug!(error = %last_error, "Token verification failed");
        Err(last_error)
    }

    /// True iff `verify` succeeds.
    pub fn is_valid(&self, token: &str) -> bool {
        self.verify(token).is_ok()
    }
}
