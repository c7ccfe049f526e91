use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Identity a token is issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: i64,
    pub username: String,
    pub role: String,
}

impl Identity {
    pub fn new(id: i64, username: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            role: role.into(),
        }
    }
}

/// Claims carried by every issued token.
///
/// Serialized as a flat JSON object; time fields are Unix timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject identifier
    pub uid: i64,

    pub username: String,

    pub role: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Generation of the signing secret (Unix timestamp of its rotation)
    pub secret_gen: i64,
}

impl Claims {
    /// Build claims for `identity` issued at `issued_at`.
    ///
    /// # Arguments
    /// * `identity` - Subject of the token
    /// * `issued_at` - Issuance instant
    /// * `lifetime` - Time until the token expires
    /// * `generation` - Generation of the secret that will sign the token
    pub fn for_identity(
        identity: &Identity,
        issued_at: DateTime<Utc>,
        lifetime: Duration,
        generation: DateTime<Utc>,
    ) -> Self {
        Self {
            uid: identity.id,
            username: identity.username.clone(),
            role: identity.role.clone(),
            exp: (issued_at + lifetime).timestamp(),
            iat: issued_at.timestamp(),
            secret_gen: generation.timestamp(),
        }
    }

    /// Identity embedded in the token.
    pub fn identity(&self) -> Identity {
        Identity::new(self.uid, self.username.clone(), self.role.clone())
    }

    /// Check if token is expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
