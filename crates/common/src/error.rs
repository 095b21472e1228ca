//! Error taxonomy shared across crates.

use std::string::FromUtf8Error;

use thiserror::Error;

/// Configuration was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The secret key does not have exactly the length the cipher requires.
    #[error("secret key must be {expected} bytes long, got {actual}")]
    InvalidKeyLength {
        /// Key length required by the cipher.
        expected: usize,
        /// Length of the rejected key.
        actual: usize,
    },
}

/// Failure reported by the underlying cipher primitive or random source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// The key or IV handed to the primitive has the wrong length.
    #[error("invalid key or iv length")]
    InvalidKeyOrIv,

    /// The counter would wrap before the whole input was processed.
    #[error("keystream exhausted")]
    KeystreamExhausted,

    /// The random source could not produce bytes.
    #[error("random source failure: {0}")]
    Rng(String),
}

/// Errors produced by encrypt/decrypt calls.
///
/// None of these are retried internally: retrying with the same input will
/// not change the outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// Encrypt or decrypt was attempted before a secret key was configured.
    #[error("secret key has not been configured")]
    MissingKey,

    /// The cipher backend cannot report a usable IV length.
    #[error("cipher backend could not report an iv length")]
    IvLengthUnavailable,

    /// The backend failed to produce an envelope.
    #[error("encryption failed: {0}")]
    EncryptionFailed(#[source] BackendError),

    /// The backend rejected the envelope.
    #[error("decryption failed: {0}")]
    DecryptionFailed(#[source] BackendError),
}

/// Errors surfaced by the storage column adapter.
#[derive(Debug, Error)]
pub enum ColumnError {
    /// The envelope cipher failed.
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// The decrypted value is not valid UTF-8 text.
    #[error("decrypted value is not valid utf-8")]
    InvalidUtf8(#[from] FromUtf8Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_key_length_states_required_length() {
        let e = ConfigError::InvalidKeyLength {
            expected: 32,
            actual: 16,
        };
        let msg = e.to_string();
        assert!(msg.contains("32 bytes"));
        assert!(msg.contains("16"));
    }

    #[test]
    fn backend_error_is_preserved_as_source() {
        use std::error::Error as _;

        let e = CryptoError::DecryptionFailed(BackendError::InvalidKeyOrIv);
        let source = e.source().expect("source");
        assert_eq!(source.to_string(), "invalid key or iv length");
    }

    #[test]
    fn column_error_wraps_crypto_error_transparently() {
        let e = ColumnError::from(CryptoError::MissingKey);
        assert_eq!(e.to_string(), CryptoError::MissingKey.to_string());
    }

    #[test]
    fn column_error_from_utf8_error() {
        let utf8 = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let e = ColumnError::from(utf8);
        assert!(matches!(e, ColumnError::InvalidUtf8(_)));
    }
}
