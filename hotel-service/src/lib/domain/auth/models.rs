use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::RoleError;
use crate::domain::auth::errors::UsernameError;

/// Staff credential record.
///
/// The plaintext password never reaches this type; only its hash is stored.
#[derive(Debug, Clone)]
pub struct Credential {
    pub id: CredentialId,
    pub username: Username,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl Credential {
    /// Identity embedded in tokens issued for this credential.
    pub fn identity(&self) -> auth::Identity {
        auth::Identity::new(self.id.0, self.username.as_str(), self.role.as_str())
    }
}

/// Credential to be inserted; the identifier is assigned by storage.
#[derive(Debug, Clone)]
pub struct NewCredential {
    pub username: Username,
    pub password_hash: String,
    pub role: Role,
}

/// Credential unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CredentialId(pub i64);

impl fmt::Display for CredentialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type
///
/// Ensures username is 3-32 characters and contains only alphanumeric, underscore, and hyphen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    const MIN_LENGTH: usize = 3;
    const MAX_LENGTH: usize = 32;

    /// Create a new valid username.
    ///
    /// # Errors
    /// * `TooShort` - Username shorter than 3 characters
    /// * `TooLong` - Username longer than 32 characters
    /// * `InvalidCharacters` - Contains non-alphanumeric characters (except _ and -)
    pub fn new(username: String) -> Result<Self, UsernameError> {
        let username = Self::with_valid_length(username)?;
        let username = Self::with_valid_chars(username)?;
        Ok(Self(username))
    }

    fn with_valid_length(username: String) -> Result<String, UsernameError> {
        let length = username.chars().count();
        if length < Self::MIN_LENGTH {
            Err(UsernameError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            })
        } else if length > Self::MAX_LENGTH {
            Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(username)
        }
    }

    fn with_valid_chars(username: String) -> Result<String, UsernameError> {
        if username
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
        {
            Ok(username)
        } else {
            Err(UsernameError::InvalidCharacters)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Staff role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    AdminManager,
    MainManager,
    Cleaner,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::AdminManager => "admin manager",
            Role::MainManager => "main manager",
            Role::Cleaner => "cleaner",
        }
    }
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin manager" => Ok(Role::AdminManager),
            "main manager" => Ok(Role::MainManager),
            "cleaner" => Ok(Role::Cleaner),
            other => Err(RoleError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Command to register a new staff account
#[derive(Debug)]
pub struct RegisterCommand {
    pub username: Username,
    pub password: String,
    pub role: Role,
}

impl RegisterCommand {
    pub fn new(username: Username, password: String, role: Role) -> Self {
        Self {
            username,
            password,
            role,
        }
    }
}

/// Command to log in with a username and password
#[derive(Debug)]
pub struct LoginCommand {
    pub username: Username,
    pub password: String,
}

impl LoginCommand {
    pub fn new(username: Username, password: String) -> Self {
        Self { username, password }
    }
}

/// Staff member identified by a verified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedStaff {
    pub id: CredentialId,
    pub username: String,
    pub role: Role,
}

impl TryFrom<auth::Claims> for AuthenticatedStaff {
    type Error = AuthError;

    fn try_from(claims: auth::Claims) -> Result<Self, Self::Error> {
        let role = claims
            .role
            .parse::<Role>()
            .map_err(|e| AuthError::TokenMalformed(e.to_string()))?;

        Ok(Self {
            id: CredentialId(claims.uid),
            username: claims.username,
            role,
        })
    }
}
