use std::sync::Arc;
use std::sync::RwLock;
use std::sync::RwLockReadGuard;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use super::clock::Clock;
use super::clock::SystemClock;
use super::errors::SecretError;
use super::signing::SigningSecret;
use super::source::SecretSource;

/// Current and previous signing secrets.
///
/// `previous` is always the value `current` held right before the last
/// rotation, or `None` until the first rotation.
#[derive(Clone)]
struct Generations {
    current: SigningSecret,
    previous: Option<SigningSecret>,
}

impl Generations {
    fn rotation_due(&self, now: DateTime<Utc>, interval: Duration) -> bool {
        now.signed_duration_since(self.current.generation()) >= interval
    }
}

/// Process-wide holder of the signing secrets.
///
/// Starts uninitialized and derives its first secret on first use. Readers
/// share the lock; the rotate-check-and-update sequence runs under the
/// exclusive lock, so concurrent callers at a rotation boundary collapse into
/// a single rotation.
///
/// Rotation re-reads the passphrase from the `SecretSource`. If the
/// configured value has not changed, the new current secret has the same key
/// material as the previous one and only the generation advances.
pub struct SecretStore {
    source: Box<dyn SecretSource>,
    clock: Arc<dyn Clock>,
    rotation_interval: Duration,
    state: RwLock<Option<Generations>>,
}

impl SecretStore {
    pub const DEFAULT_ROTATION_INTERVAL_HOURS: i64 = 24;

    /// Create an uninitialized store reading its passphrase from `source`.
    ///
    /// Uses the system clock and a 24 hour rotation interval.
    pub fn new(source: impl SecretSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            clock: Arc::new(SystemClock),
            rotation_interval: Duration::hours(Self::DEFAULT_ROTATION_INTERVAL_HOURS),
            state: RwLock::new(None),
        }
    }

    /// Replace the clock used for rotation and expiry decisions.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the rotation interval.
    pub fn with_rotation_interval(mut self, interval: Duration) -> Self {
        self.rotation_interval = interval;
        self
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn rotation_interval(&self) -> Duration {
        self.rotation_interval
    }

    /// Instant the current secret was established, if initialized.
    pub fn last_rotation(&self) -> Option<DateTime<Utc>> {
        self.state
            .read()
            .ok()?
            .as_ref()
            .map(|generations| generations.current.generation())
    }

    /// Initialize on first use, rotate once the interval has elapsed.
    ///
    /// A no-op while the current secret is still fresh.
    ///
    /// # Errors
    /// * `Unavailable` / `EmptyPassphrase` - Passphrase could not be read
    /// * `Poisoned` - A writer panicked while holding the lock
    pub fn ensure_fresh(&self) -> Result<(), SecretError> {
        let now = self.clock.now();

        if let Some(generations) = self.read()?.as_ref() {
            if !generations.rotation_due(now, self.rotation_interval) {
                return Ok(());
            }
        }

        let mut state = self.state.write().map_err(|_| SecretError::Poisoned)?;

        // Another caller may have initialized or rotated while we waited.
        match state.as_mut() {
            None => {
                let current = self.derive(now)?;
                tracing::info!(generation = %current.generation(), "Signing secret initialized");
                *state = Some(Generations {
                    current,
                    previous: None,
                });
            }
            Some(generations) if generations.rotation_due(now, self.rotation_interval) => {
                let next = self.derive(now)?;
                let key_changed = !next.same_key(&generations.current);
                let retired = std::mem::replace(&mut generations.current, next);

                tracing::info!(
                    previous_generation = %retired.generation(),
                    generation = %generations.current.generation(),
                    key_changed,
                    "Signing secret rotated"
                );

                generations.previous = Some(retired);
            }
            Some(_) => {}
        }

        Ok(())
    }

    /// Secret new tokens are signed with.
    pub fn current_secret(&self) -> Result<SigningSecret, SecretError> {
        self.ensure_fresh()?;

        self.read()?
            .as_ref()
            .map(|generations| generations.current.clone())
            .ok_or_else(|| SecretError::Unavailable("secret store is not initialized".to_string()))
    }

    /// Secrets a presented token may be signed with, current first.
    pub fn active_secrets(&self) -> Result<Vec<SigningSecret>, SecretError> {
        self.ensure_fresh()?;

        let state = self.read()?;
        let generations = state.as_ref().ok_or_else(|| {
            SecretError::Unavailable("secret store is not initialized".to_string())
        })?;

        let mut secrets = vec![generations.current.clone()];
        if let Some(previous) = &generations.previous {
            secrets.push(previous.clone());
        }

        Ok(secrets)
    }

    fn derive(&self, now: DateTime<Utc>) -> Result<SigningSecret, SecretError> {
        let passphrase = self.source.passphrase()?;
        if passphrase.is_empty() {
            return Err(SecretError::EmptyPassphrase);
        }

        Ok(SigningSecret::derive(&passphrase, now))
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Option<Generations>>, SecretError> {
        self.state.read().map_err(|_| SecretError::Poisoned)
    }
}
