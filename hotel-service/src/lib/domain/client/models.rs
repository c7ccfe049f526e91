use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::client::errors::EmailError;
use crate::domain::client::errors::FullNameError;

/// Hotel guest record.
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    pub id: ClientId,
    pub full_name: FullName,
    pub email: EmailAddress,
    pub phone: String,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

/// Client unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientId(pub i64);

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Guest full name, trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullName(String);

impl FullName {
    const MAX_LENGTH: usize = 255;

    pub fn new(full_name: String) -> Result<Self, FullNameError> {
        let trimmed = full_name.trim();
        let length = trimmed.chars().count();

        if length == 0 {
            Err(FullNameError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(FullNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Editable client fields, shared by add and edit.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientDetails {
    pub full_name: FullName,
    pub email: EmailAddress,
    pub phone: String,
    pub notes: String,
}

impl ClientDetails {
    pub fn new(full_name: FullName, email: EmailAddress, phone: String, notes: String) -> Self {
        Self {
            full_name,
            email,
            phone,
            notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_is_trimmed() {
        let name = FullName::new("  Anna Petrova ".to_string()).unwrap();
        assert_eq!(name.as_str(), "Anna Petrova");
    }

    #[test]
    fn test_full_name_rejects_blank() {
        assert_eq!(FullName::new("   ".to_string()), Err(FullNameError::Empty));
        assert!(matches!(
            FullName::new("x".repeat(256)),
            Err(FullNameError::TooLong { max: 255, .. })
        ));
    }

    #[test]
    fn test_email_validation() {
        assert!(EmailAddress::new("guest@example.com".to_string()).is_ok());
        assert!(EmailAddress::new("not-an-email".to_string()).is_err());
    }
}
