use std::sync::Arc;

use chrono::Duration;

use super::claims::Claims;
use super::claims::Identity;
use super::codec;
use super::errors::JwtError;
use crate::secret::SecretStore;

/// Issues signed tokens with the store's current secret.
pub struct TokenIssuer {
    store: Arc<SecretStore>,
    lifetime: Duration,
}

impl TokenIssuer {
    pub const DEFAULT_LIFETIME_HOURS: i64 = 24;

    /// Create an issuer producing tokens valid for 24 hours.
    pub fn new(store: Arc<SecretStore>) -> Self {
        Self {
            store,
            lifetime: Duration::hours(Self::DEFAULT_LIFETIME_HOURS),
        }
    }

    /// Replace the token lifetime.
    pub fn with_lifetime(mut self, lifetime: Duration) -> Self {
        self.lifetime = lifetime;
        self
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// Issue a token for `identity`.
    ///
    /// The token expires `lifetime` after issuance and records the
    /// generation of the secret that signed it.
    ///
    /// # Errors
    /// * `SecretUnavailable` - Current secret could not be obtained
    /// * `EncodingFailed` - Token signing failed
    pub fn issue(&self, identity: &Identity) -> Result<String, JwtError> {
        let secret = self.store.current_secret()?;
        let claims = Claims::for_identity(
            identity,
            self.store.now(),
            self.lifetime,
            secret.generation(),
        );

        codec::encode(&claims, &secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::codec::SIGNING_ALGORITHM;
    use crate::secret::clock::manual::ManualClock;
    use crate::secret::Clock;
    use crate::secret::StaticSecret;

    #[test]
    fn test_issue_embeds_identity_and_generation() {
        let clock = Arc::new(ManualClock::at_epoch());
        let store = Arc::new(
            SecretStore::new(StaticSecret::new("front-desk-secret")).with_clock(clock.clone()),
        );
        let issuer = TokenIssuer::new(Arc::clone(&store));

        clock.advance(Duration::hours(3));
        let identity = Identity::new(12, "housekeeping", "cleaner");
        let token = issuer.issue(&identity).expect("Failed to issue token");

        let secret = store.current_secret().unwrap();
        let claims: Claims = codec::decode(&token, &secret, SIGNING_ALGORITHM).unwrap();

        assert_eq!(claims.identity(), identity);
        assert_eq!(claims.iat, clock.now().timestamp());
        assert_eq!(claims.exp, (clock.now() + Duration::hours(24)).timestamp());
        assert_eq!(claims.secret_gen, secret.generation().timestamp());
    }

    #[test]
    fn test_issue_with_custom_lifetime() {
        let store = Arc::new(SecretStore::new(StaticSecret::new("front-desk-secret")));
        let issuer = TokenIssuer::new(Arc::clone(&store)).with_lifetime(Duration::minutes(30));

        let token = issuer.issue(&Identity::new(1, "admin", "admin manager")).unwrap();
        let secret = store.current_secret().unwrap();
        let claims: Claims = codec::decode(&token, &secret, SIGNING_ALGORITHM).unwrap();

        assert_eq!(claims.exp - claims.iat, 30 * 60);
        assert_eq!(issuer.lifetime(), Duration::minutes(30));
    }

    #[test]
    fn test_issue_fails_without_secret() {
        let store = Arc::new(SecretStore::new(StaticSecret::new("")));
        let issuer = TokenIssuer::new(store);

        let result = issuer.issue(&Identity::new(1, "admin", "admin manager"));
        assert!(matches!(result, Err(JwtError::SecretUnavailable(_))));
    }
}
