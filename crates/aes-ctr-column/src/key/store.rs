//! [`KeyStore`]: shared, swappable holder for the AES-256 secret key.

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use common::{ConfigError, CryptoError};
use tracing::info;
use zeroize::Zeroizing;

use crate::crypto::KEY_LEN;

/// Validated AES-256 key, zeroed when dropped.
pub struct SecretKey(Zeroizing<[u8; KEY_LEN]>);

impl SecretKey {
    /// Copy `bytes` into a new key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidKeyLength`] unless `bytes` is exactly
    /// [`KEY_LEN`] bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ConfigError> {
        if bytes.len() != KEY_LEN {
            return Err(ConfigError::InvalidKeyLength {
                expected: KEY_LEN,
                actual: bytes.len(),
            });
        }
        let mut buf = Zeroizing::new([0u8; KEY_LEN]);
        buf.copy_from_slice(bytes);
        Ok(Self(buf))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0[..]
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretKey([REDACTED])")
    }
}

/// Thread-safe holder for the current secret key.
///
/// Readers take a lock-free snapshot of the key, so a concurrent
/// [`KeyStore::set_secret_key`] is observed either entirely or not at all.
#[derive(Clone, Debug)]
pub struct KeyStore {
    inner: Arc<ArcSwapOption<SecretKey>>,
}

impl KeyStore {
    /// Create a new, empty [`KeyStore`].
    pub fn new() -> Self {
        Self {
            inner: Arc::new(ArcSwapOption::empty()),
        }
    }

    /// Create a store already holding `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidKeyLength`] if `key` has the wrong length.
    pub fn with_key(key: &[u8]) -> Result<Self, ConfigError> {
        let store = Self::new();
        store.set_secret_key(key)?;
        Ok(store)
    }

    /// Returns `true` if a key is currently configured.
    pub fn is_configured(&self) -> bool {
        self.inner.load().is_some()
    }

    /// Store (or replace) the secret key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidKeyLength`] if `key` is not exactly
    /// [`KEY_LEN`] bytes. The previous key, if any, is kept in that case.
    pub fn set_secret_key(&self, key: &[u8]) -> Result<(), ConfigError> {
        let key = SecretKey::from_slice(key)?;
        let replaced = self.inner.swap(Some(Arc::new(key))).is_some();
        info!(replaced, "secret key configured");
        Ok(())
    }

    /// Snapshot of the current key.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::MissingKey`] if no key has been configured.
    pub fn current(&self) -> Result<Arc<SecretKey>, CryptoError> {
        self.inner.load_full().ok_or(CryptoError::MissingKey)
    }
}

impl Default for KeyStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initially_not_configured() {
        let store = KeyStore::new();
        assert!(!store.is_configured());
        assert_eq!(store.current().unwrap_err(), CryptoError::MissingKey);
    }

    #[test]
    fn store_and_retrieve() {
        let store = KeyStore::new();
        let key = vec![0x42u8; KEY_LEN];
        store.set_secret_key(&key).unwrap();
        assert!(store.is_configured());
        assert_eq!(store.current().unwrap().as_bytes(), key.as_slice());
    }

    #[test]
    fn rejects_wrong_length() {
        let store = KeyStore::new();
        for len in [0usize, 16, 31, 33, 64] {
            let err = store.set_secret_key(&vec![0u8; len]).unwrap_err();
            assert_eq!(
                err,
                ConfigError::InvalidKeyLength {
                    expected: KEY_LEN,
                    actual: len,
                }
            );
        }
        assert!(!store.is_configured());
    }

    #[test]
    fn rejected_key_keeps_previous() {
        let store = KeyStore::with_key(&[0x01u8; KEY_LEN]).unwrap();
        assert!(store.set_secret_key(&[0x02u8; 8]).is_err());
        assert_eq!(store.current().unwrap().as_bytes(), &[0x01u8; KEY_LEN]);
    }

    #[test]
    fn set_replaces_key() {
        let store = KeyStore::new();
        store.set_secret_key(&[0x01u8; KEY_LEN]).unwrap();
        store.set_secret_key(&[0x02u8; KEY_LEN]).unwrap();
        assert_eq!(store.current().unwrap().as_bytes(), &[0x02u8; KEY_LEN]);
    }

    #[test]
    fn clones_share_the_key() {
        let store = KeyStore::new();
        let other = store.clone();
        store.set_secret_key(&[0x03u8; KEY_LEN]).unwrap();
        assert!(other.is_configured());
    }

    #[test]
    fn snapshot_survives_replacement() {
        let store = KeyStore::with_key(&[0x01u8; KEY_LEN]).unwrap();
        let snapshot = store.current().unwrap();
        store.set_secret_key(&[0x02u8; KEY_LEN]).unwrap();
        assert_eq!(snapshot.as_bytes(), &[0x01u8; KEY_LEN]);
    }

    #[test]
    fn secret_key_redacted_in_debug() {
        let key = SecretKey::from_slice(&[0xFFu8; KEY_LEN]).unwrap();
        let rendered = format!("{key:?}");
        assert!(rendered.contains("REDACTED"));
        assert!(!rendered.contains("255"));

        let store = KeyStore::with_key(&[0xFFu8; KEY_LEN]).unwrap();
        assert!(!format!("{store:?}").contains("255"));
    }
}
