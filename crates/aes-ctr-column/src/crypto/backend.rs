//! The native primitive behind [`EnvelopeCipher`](super::EnvelopeCipher).

use aes::Aes256;
use common::BackendError;
use ctr::cipher::{KeyIvInit, StreamCipher};
use rand::{rngs::OsRng, RngCore};

/// Byte length of an AES-256 key (32 bytes = 256 bits).
pub const KEY_LEN: usize = 32;

/// Byte length of an AES-CTR IV (one 128-bit counter block).
pub const IV_LEN: usize = 16;

/// Cipher identifier, in OpenSSL naming.
pub const CIPHER_NAME: &str = "aes-256-ctr";

/// Full 128-bit big-endian counter, the same layout OpenSSL uses for
/// `aes-256-ctr`.
type Aes256CtrCore = ctr::Ctr128BE<Aes256>;

/// Operations the envelope cipher needs from a cryptographic backend.
#[cfg_attr(test, mockall::automock)]
pub trait CipherBackend: Send + Sync {
    /// Cipher identifier.
    fn name(&self) -> &'static str;

    /// IV length required by the cipher, or `None` if it cannot be reported.
    fn iv_length(&self) -> Option<usize>;

    /// Fill `buf` from a cryptographically secure random source.
    fn fill_random(&self, buf: &mut [u8]) -> Result<(), BackendError>;

    /// Encrypt `plaintext` into raw, unpadded ciphertext.
    fn encrypt(&self, key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, BackendError>;

    /// Decrypt raw ciphertext produced by [`CipherBackend::encrypt`].
    fn decrypt(&self, key: &[u8], iv: &[u8], ciphertext: &[u8])
        -> Result<Vec<u8>, BackendError>;
}

/// AES-256 in CTR mode via RustCrypto, seeded from the OS CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aes256Ctr;

impl Aes256Ctr {
    fn apply_keystream(key: &[u8], iv: &[u8], input: &[u8]) -> Result<Vec<u8>, BackendError> {
        let mut cipher =
            Aes256CtrCore::new_from_slices(key, iv).map_err(|_| BackendError::InvalidKeyOrIv)?;
        let mut buf = input.to_vec();
        cipher
            .try_apply_keystream(&mut buf)
            .map_err(|_| BackendError::KeystreamExhausted)?;
        Ok(buf)
    }
}

impl CipherBackend for Aes256Ctr {
    fn name(&self) -> &'static str {
        CIPHER_NAME
    }

    fn iv_length(&self) -> Option<usize> {
        Some(IV_LEN)
    }

    fn fill_random(&self, buf: &mut [u8]) -> Result<(), BackendError> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| BackendError::Rng(e.to_string()))
    }

    fn encrypt(&self, key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, BackendError> {
        Self::apply_keystream(key, iv, plaintext)
    }

    fn decrypt(
        &self,
        key: &[u8],
        iv: &[u8],
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, BackendError> {
        Self::apply_keystream(key, iv, ciphertext)
    }
}
