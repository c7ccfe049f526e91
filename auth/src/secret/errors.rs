use thiserror::Error;

/// Error type for signing secret operations.
#[derive(Debug, Clone, Error)]
pub enum SecretError {
    #[error("Signing passphrase unavailable: {0}")]
    Unavailable(String),

    #[error("Signing passphrase is empty")]
    EmptyPassphrase,

    #[error("Secret store lock poisoned")]
    Poisoned,
}
