//! Structured logging setup.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the host application, which may call [`init`] for the default setup.
//!
//! # Telemetry invariants
//!
//! - **No key material or plaintext** may appear in any event field. Only
//!   lengths and the cipher name are recorded.
//! - Log level is configurable via `AES_CTR_COLUMN_LOG_LEVEL` (default: `info`)
//!   and overridable with `RUST_LOG`.

pub mod init;

pub use init::init;
