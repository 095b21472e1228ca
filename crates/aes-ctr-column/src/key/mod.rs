//! Secret-key handling.
//!
//! The key is held by a [`KeyStore`] owned by each cipher instance instead of
//! living in hidden global state. Clone the store to share one key between
//! several columns.
//!
//! # Security invariants
//!
//! - Key material is zeroed on drop and never appears in `Debug` output,
//!   logs, or error messages.
//! - A key is accepted only if it is exactly [`KEY_LEN`](crate::crypto::KEY_LEN)
//!   bytes. It is never truncated or padded.

pub mod store;

pub use store::{KeyStore, SecretKey};
