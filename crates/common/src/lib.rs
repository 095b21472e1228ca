//! Common types and errors shared across the `aes-ctr-column` crates.

pub mod column;
pub mod error;

pub use column::ColumnOptions;
pub use error::{BackendError, ColumnError, ConfigError, CryptoError};
