use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AuthenticatedStaff;
use crate::domain::auth::models::Credential;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::NewCredential;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::models::Username;

/// Port for authentication operations consumed by the HTTP layer.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a staff account and issue its first token.
    ///
    /// # Returns
    /// Signed token for the new account
    ///
    /// # Errors
    /// * `AlreadyExists` - Username is already taken
    /// * `SecretUnavailable` - Signing secret could not be derived
    /// * `InternalFailure` - Hashing or persistence failed
    async fn register(&self, command: RegisterCommand) -> Result<String, AuthError>;

    /// Check credentials and issue a token.
    ///
    /// # Returns
    /// Signed token for the stored identity
    ///
    /// # Errors
    /// * `NotFound` - No account with this username
    /// * `BadCredential` - Password does not match
    /// * `SecretUnavailable` - Signing secret could not be derived
    /// * `InternalFailure` - Persistence failed or stored hash is malformed
    async fn login(&self, command: LoginCommand) -> Result<String, AuthError>;

    /// Verify a presented token.
    ///
    /// # Errors
    /// * `TokenExpired` / `TokenInvalidSignature` / `TokenMalformed`
    /// * `SecretUnavailable` - Active secrets could not be derived
    fn verify(&self, token: &str) -> Result<AuthenticatedStaff, AuthError>;

    /// True iff `verify` succeeds.
    fn is_valid(&self, token: &str) -> bool {
        self.verify(token).is_ok()
    }
}

/// Persistence operations for staff credentials.
#[async_trait]
pub trait CredentialRepository: Send + Sync + 'static {
    /// Check whether a username is taken.
    ///
    /// # Errors
    /// * `InternalFailure` - Database operation failed
    async fn exists_by_username(&self, username: &Username) -> Result<bool, AuthError>;

    /// Persist a new credential.
    ///
    /// # Returns
    /// Stored credential with its assigned identifier
    ///
    /// # Errors
    /// * `AlreadyExists` - Username is already taken
    /// * `InternalFailure` - Database operation failed
    async fn insert(&self, credential: NewCredential) -> Result<Credential, AuthError>;

    /// Retrieve a credential by username.
    ///
    /// # Returns
    /// Optional credential (None if not found)
    ///
    /// # Errors
    /// * `InternalFailure` - Database operation failed
    async fn find_by_username(&self, username: &Username)
        -> Result<Option<Credential>, AuthError>;
}
