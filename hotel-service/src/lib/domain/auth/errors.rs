use auth::JwtError;
use auth::PasswordError;
use thiserror::Error;

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Username too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error(
        "Username contains invalid characters (only alphanumeric, underscore, and hyphen allowed)"
    )]
    InvalidCharacters,
}

/// Error for Role parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoleError {
    #[error("Unknown role '{0}': expected 'admin manager', 'main manager' or 'cleaner'")]
    Unknown(String),
}

/// Top-level error for registration, login and token verification
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    #[error("Invalid role: {0}")]
    InvalidRole(#[from] RoleError),

    #[error("Invalid password: {0}")]
    InvalidPassword(String),

    #[error("User already exists: {0}")]
    AlreadyExists(String),

    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Wrong password")]
    BadCredential,

    #[error("Token is expired")]
    TokenExpired,

    #[error("Token signature is invalid")]
    TokenInvalidSignature,

    #[error("Token is malformed: {0}")]
    TokenMalformed(String),

    #[error("Signing secret unavailable: {0}")]
    SecretUnavailable(String),

    #[error("Internal failure: {0}")]
    InternalFailure(String),
}

impl From<JwtError> for AuthError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::TokenExpired => AuthError::TokenExpired,
            JwtError::InvalidSignature => AuthError::TokenInvalidSignature,
            JwtError::Malformed(msg) => AuthError::TokenMalformed(msg),
            JwtError::UnsupportedAlgorithm(alg) => {
                AuthError::TokenMalformed(format!("unsupported signing algorithm {}", alg))
            }
            JwtError::SecretUnavailable(e) => AuthError::SecretUnavailable(e.to_string()),
            JwtError::EncodingFailed(msg) => AuthError::InternalFailure(msg),
        }
    }
}

impl From<PasswordError> for AuthError {
    fn from(err: PasswordError) -> Self {
        match err {
            PasswordError::TooLong { .. } => AuthError::InvalidPassword(err.to_string()),
            PasswordError::HashingFailed(_) | PasswordError::MalformedHash(_) => {
                AuthError::InternalFailure(format!("Password hashing failed: {}", err))
            }
        }
    }
}
