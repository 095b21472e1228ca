//! `aes-ctr-column`: a storage column type that encrypts string values with
//! AES-256-CTR before they are persisted and decrypts them on read.
//!
//! Stored values are `IV[16] || ciphertext[n]` envelopes. There is no
//! authentication tag; see [`crypto`] for what that implies.
//!
//! Typical startup sequence:
//! 1. Load and validate [`Config`] from environment variables.
//! 2. Initialise logging with [`telemetry::init`].
//! 3. Build the column with [`Aes256CtrEncrypted::from_config`] and hand it
//!    to the mapping layer.

pub mod column;
pub mod config;
pub mod crypto;
pub mod key;
pub mod telemetry;

pub use column::Aes256CtrEncrypted;
pub use common::{BackendError, ColumnError, ColumnOptions, ConfigError, CryptoError};
pub use config::Config;
pub use crypto::{Aes256Ctr, CipherBackend, Envelope, EnvelopeCipher};
pub use key::{KeyStore, SecretKey};
