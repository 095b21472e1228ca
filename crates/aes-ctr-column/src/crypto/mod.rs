//! AES-256-CTR envelope encryption.
//!
//! # Envelope format
//!
//! ```text
//! IV[16] || ciphertext[n]
//! ```
//!
//! `n` equals the plaintext length: CTR is a stream mode and adds no padding.
//! There is no authentication tag. A tampered or truncated envelope decrypts
//! to garbage instead of failing.

pub mod backend;
pub mod cipher;
pub mod envelope;

pub use backend::{Aes256Ctr, CipherBackend, IV_LEN, KEY_LEN};
pub use cipher::EnvelopeCipher;
pub use envelope::Envelope;
