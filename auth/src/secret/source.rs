use super::errors::SecretError;

/// Supplies the passphrase signing secrets are derived from.
///
/// Called lazily by `SecretStore`: once on first use and again on every
/// rotation, so a changed configuration value becomes the next secret.
pub trait SecretSource: Send + Sync {
    fn passphrase(&self) -> Result<String, SecretError>;
}

/// Fixed passphrase known at construction time.
pub struct StaticSecret(String);

impl StaticSecret {
    pub fn new(passphrase: impl Into<String>) -> Self {
        Self(passphrase.into())
    }
}

impl SecretSource for StaticSecret {
    fn passphrase(&self) -> Result<String, SecretError> {
        Ok(self.0.clone())
    }
}

impl<F> SecretSource for F
where
    F: Fn() -> Result<String, SecretError> + Send + Sync,
{
    fn passphrase(&self) -> Result<String, SecretError> {
        self()
    }
}
