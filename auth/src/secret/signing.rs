use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use sha2::Digest;
use sha2::Sha256;

/// HMAC key derived from the configured passphrase.
///
/// `generation` is the instant this secret became current; issued tokens
/// carry it as `secret_gen`.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningSecret {
    key: Vec<u8>,
    generation: DateTime<Utc>,
}

impl SigningSecret {
    /// Derive a signing key as the SHA-256 digest of `passphrase`.
    pub fn derive(passphrase: &str, generation: DateTime<Utc>) -> Self {
        Self {
            key: Sha256::digest(passphrase.as_bytes()).to_vec(),
            generation,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.key
    }

    pub fn generation(&self) -> DateTime<Utc> {
        self.generation
    }

    /// True when both secrets hold the same key material, whatever their generation.
    pub fn same_key(&self, other: &SigningSecret) -> bool {
        self.key == other.key
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningSecret")
            .field("key", &"<redacted>")
            .field("generation", &self.generation)
            .finish()
    }
}
