//! Storage column type that keeps string values encrypted at rest.
//!
//! The mapping layer calls [`Aes256CtrEncrypted::to_storage_representation`]
//! before writing a value and
//! [`Aes256CtrEncrypted::from_storage_representation`] after reading one.
//! The stored bytes are an `IV || ciphertext` envelope, so the column must be
//! declared binary and at least [`IV_LEN`](crate::crypto::IV_LEN) bytes
//! longer than the longest value it holds.

use anyhow::Context;
use common::column::DEFAULT_FIELD_LENGTH;
use common::{ColumnError, ColumnOptions, ConfigError, CryptoError};

use crate::config::Config;
use crate::crypto::{Aes256Ctr, CipherBackend, EnvelopeCipher};
use crate::key::KeyStore;

/// AES-256-CTR encrypted string column.
pub struct Aes256CtrEncrypted<B = Aes256Ctr> {
    cipher: EnvelopeCipher<B>,
}

impl Aes256CtrEncrypted<Aes256Ctr> {
    /// Name the column type is registered under.
    pub const NAME: &'static str = "aes_256_ctr_encrypted";

    /// Default declared column length, in bytes.
    pub const DEFAULT_FIELD_LENGTH: u32 = DEFAULT_FIELD_LENGTH;

    /// Column type with no key configured yet.
    pub fn new() -> Self {
        Self::with_cipher(EnvelopeCipher::new())
    }

    /// Column type sharing an existing key store.
    pub fn with_key_store(keys: KeyStore) -> Self {
        Self::with_cipher(EnvelopeCipher::with_backend(Aes256Ctr, keys))
    }

    /// Column type keyed from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured key is not valid base64 or does
    /// not decode to exactly 32 bytes.
    pub fn from_config(cfg: &Config) -> anyhow::Result<Self> {
        let key = cfg.secret_key_bytes()?;
        let keys = KeyStore::with_key(&key).context("configured secret key rejected")?;
        Ok(Self::with_key_store(keys))
    }
}

impl Default for Aes256CtrEncrypted<Aes256Ctr> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: CipherBackend> Aes256CtrEncrypted<B> {
    pub fn with_cipher(cipher: EnvelopeCipher<B>) -> Self {
        Self { cipher }
    }

    pub fn name(&self) -> &'static str {
        <Aes256CtrEncrypted>::NAME
    }

    pub fn cipher(&self) -> &EnvelopeCipher<B> {
        &self.cipher
    }

    /// Configure (or replace) the secret key used by this column.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidKeyLength`] if `key` is not 32 bytes.
    pub fn set_secret_key(&self, key: &[u8]) -> Result<(), ConfigError> {
        self.cipher.set_secret_key(key)
    }

    /// SQL column declaration, e.g. `VARBINARY(255)`.
    pub fn sql_declaration(&self, options: &ColumnOptions) -> String {
        format!("VARBINARY({})", options.length())
    }

    /// Longest plaintext, in bytes, that fits a column declared with `options`.
    pub fn max_plaintext_length(&self, options: &ColumnOptions) -> Result<usize, CryptoError> {
        Ok(options.max_plaintext_length(self.cipher.iv_length()?))
    }

    /// Encrypt a value on its way into storage.
    ///
    /// # Errors
    ///
    /// Propagates [`CryptoError`] from the envelope cipher.
    pub fn to_storage_representation(
        &self,
        value: Option<&str>,
    ) -> Result<Option<Vec<u8>>, ColumnError> {
        Ok(self.cipher.encrypt(value.map(str::as_bytes))?)
    }

    /// Decrypt a value read back from storage.
    ///
    /// # Errors
    ///
    /// Propagates [`CryptoError`] from the envelope cipher, and returns
    /// [`ColumnError::InvalidUtf8`] if the decrypted bytes are not text.
    pub fn from_storage_representation(
        &self,
        value: Option<&[u8]>,
    ) -> Result<Option<String>, ColumnError> {
        self.cipher
            .decrypt(value)?
            .map(String::from_utf8)
            .transpose()
            .map_err(ColumnError::from)
    }
}

impl<B: CipherBackend> std::fmt::Debug for Aes256CtrEncrypted<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Aes256CtrEncrypted")
            .field("cipher", &self.cipher)
            .finish()
    }
}
