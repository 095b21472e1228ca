//! AES-256-CTR encryption and decryption of individual values.
//!
//! Every [`EnvelopeCipher::encrypt`] call draws a fresh IV from the OS CSPRNG.
//! There is no API that accepts a caller-supplied IV, so IV reuse under one
//! key cannot be expressed.
//!
//! **No integrity protection.** CTR is malleable: flipping a ciphertext bit
//! flips the same plaintext bit, and [`EnvelopeCipher::decrypt`] will not
//! notice.

use common::{ConfigError, CryptoError};
use tracing::debug;

use super::backend::{Aes256Ctr, CipherBackend};
use super::envelope::Envelope;
use crate::key::KeyStore;

/// Encrypts values into `IV || ciphertext` envelopes and back.
pub struct EnvelopeCipher<B = Aes256Ctr> {
    keys: KeyStore,
    backend: B,
}

impl EnvelopeCipher<Aes256Ctr> {
    /// Create a cipher with no key configured.
    pub fn new() -> Self {
        Self::with_backend(Aes256Ctr, KeyStore::new())
    }

    /// Create a cipher that uses `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidKeyLength`] if `key` is not 32 bytes.
    pub fn with_key(key: &[u8]) -> Result<Self, ConfigError> {
        Ok(Self::with_backend(Aes256Ctr, KeyStore::with_key(key)?))
    }
}

impl Default for EnvelopeCipher<Aes256Ctr> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: CipherBackend> EnvelopeCipher<B> {
    /// Create a cipher over an explicit backend and key store.
    pub fn with_backend(backend: B, keys: KeyStore) -> Self {
        Self { keys, backend }
    }

    /// The key store this cipher reads from.
    pub fn key_store(&self) -> &KeyStore {
        &self.keys
    }

    /// Configure (or replace) the secret key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidKeyLength`] if `key` is not 32 bytes.
    pub fn set_secret_key(&self, key: &[u8]) -> Result<(), ConfigError> {
        self.keys.set_secret_key(key)
    }

    /// IV length reported by the backend.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::IvLengthUnavailable`] if the backend reports no
    /// length or zero.
    pub fn iv_length(&self) -> Result<usize, CryptoError> {
        match self.backend.iv_length() {
            Some(len) if len > 0 => Ok(len),
            _ => Err(CryptoError::IvLengthUnavailable),
        }
    }

    /// Size of the envelope produced for a plaintext of `plaintext_len` bytes.
    pub fn envelope_length(&self, plaintext_len: usize) -> Result<usize, CryptoError> {
        Ok(self.iv_length()? + plaintext_len)
    }

    /// Encrypt `plaintext` into `IV || ciphertext`.
    ///
    /// `None` passes through as `None`, but only once a key is configured.
    ///
    /// # Errors
    ///
    /// - [`CryptoError::MissingKey`] if no key is configured.
    /// - [`CryptoError::IvLengthUnavailable`] if the backend reports no IV length.
    /// - [`CryptoError::EncryptionFailed`] if the random source or the cipher fails.
    pub fn encrypt(&self, plaintext: Option<&[u8]>) -> Result<Option<Vec<u8>>, CryptoError> {
        let key = self.keys.current()?;
        let Some(plaintext) = plaintext else {
            return Ok(None);
        };

        let iv_len = self.iv_length()?;
        let mut iv = vec![0u8; iv_len];
        self.backend
            .fill_random(&mut iv)
            .map_err(CryptoError::EncryptionFailed)?;

        let ciphertext = self
            .backend
            .encrypt(key.as_bytes(), &iv, plaintext)
            .map_err(CryptoError::EncryptionFailed)?;

        let envelope = Envelope::new(&iv, &ciphertext).to_vec();
        debug!(
            cipher = self.backend.name(),
            plaintext_len = plaintext.len(),
            envelope_len = envelope.len(),
            "value encrypted"
        );
        Ok(Some(envelope))
    }

    /// Decrypt an envelope produced by [`EnvelopeCipher::encrypt`].
    ///
    /// `None` passes through as `None`, but only once a key is configured.
    ///
    /// # Errors
    ///
    /// - [`CryptoError::MissingKey`] if no key is configured.
    /// - [`CryptoError::IvLengthUnavailable`] if the backend reports no IV length.
    /// - [`CryptoError::DecryptionFailed`] if the cipher rejects the envelope,
    ///   e.g. when it is too short to hold an IV.
    pub fn decrypt(&self, envelope: Option<&[u8]>) -> Result<Option<Vec<u8>>, CryptoError> {
        let key = self.keys.current()?;
        let Some(envelope) = envelope else {
            return Ok(None);
        };

        let iv_len = self.iv_length()?;
        let envelope = Envelope::split(envelope, iv_len);
        let plaintext = self
            .backend
            .decrypt(key.as_bytes(), envelope.iv(), envelope.ciphertext())
            .map_err(CryptoError::DecryptionFailed)?;

        debug!(
            cipher = self.backend.name(),
            envelope_len = envelope.len(),
            plaintext_len = plaintext.len(),
            "value decrypted"
        );
        Ok(Some(plaintext))
    }
}

impl<B: CipherBackend> std::fmt::Debug for EnvelopeCipher<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvelopeCipher")
            .field("cipher", &self.backend.name())
            .field("key_configured", &self.keys.is_configured())
            .finish()
    }
}
