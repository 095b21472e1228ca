//! Column declaration options passed in by the mapping layer.

use serde::{Deserialize, Serialize};

/// Column length used when the mapping layer does not specify one.
pub const DEFAULT_FIELD_LENGTH: u32 = 255;

/// Options describing how an encrypted column is declared in storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnOptions {
    /// Declared byte length of the binary column. `None` means
    /// [`DEFAULT_FIELD_LENGTH`].
    #[serde(default)]
    pub length: Option<u32>,
}

impl ColumnOptions {
    /// Options with an explicit column length.
    pub fn with_length(length: u32) -> Self {
        Self {
            length: Some(length),
        }
    }

    /// The effective column length in bytes.
    pub fn length(&self) -> u32 {
        self.length.unwrap_or(DEFAULT_FIELD_LENGTH)
    }

    /// Largest plaintext, in bytes, that fits once `iv_length` bytes of IV
    /// are prepended.
    pub fn max_plaintext_length(&self, iv_length: usize) -> usize {
        (self.length() as usize).saturating_sub(iv_length)
    }
}
