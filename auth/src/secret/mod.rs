//! Signing secret lifecycle: derivation from a configured passphrase, timed
//! rotation, and the current/previous pair used for the grace period.

pub mod clock;
pub mod errors;
pub mod signing;
pub mod source;
pub mod store;

pub use clock::Clock;
pub use clock::SystemClock;
pub use errors::SecretError;
pub use signing::SigningSecret;
pub use source::SecretSource;
pub use source::StaticSecret;
pub use store::SecretStore;
