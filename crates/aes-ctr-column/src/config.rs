//! Configuration loading and validation.
//!
//! Values are read from `AES_CTR_COLUMN_*` environment variables at startup.
//! Loading fails with a descriptive error if a required variable is missing
//! or invalid.

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;
use zeroize::Zeroizing;

use crate::crypto::KEY_LEN;

/// Prefix shared by every environment variable this crate reads.
pub const ENV_PREFIX: &str = "AES_CTR_COLUMN";

/// Validated configuration.
#[derive(Clone, Deserialize)]
pub struct Config {
    /// Base64 (standard alphabet) encoding of the 32-byte AES key. **Required.**
    pub secret_key: String,

    /// Declared byte length of encrypted columns.
    #[serde(default = "default_field_length")]
    pub field_length: u32,

    /// Tracing log level (e.g. `"info"`, `"debug"`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_field_length() -> u32 {
    common::column::DEFAULT_FIELD_LENGTH
}
fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if any required variable is absent or cannot be parsed.
    pub fn from_env() -> Result<Self> {
        Self::load(config::Environment::with_prefix(ENV_PREFIX))
    }

    /// Load from an explicit variable map instead of the process environment.
    pub fn from_vars(vars: config::Map<String, String>) -> Result<Self> {
        Self::load(config::Environment::with_prefix(ENV_PREFIX).source(Some(vars)))
    }

    fn load(source: config::Environment) -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(source.try_parsing(true))
            .build()
            .context("failed to build configuration from environment")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise configuration")?;

        c.validate()?;
        Ok(c)
    }

    /// Decode the configured secret key.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not valid base64.
    pub fn secret_key_bytes(&self) -> Result<Zeroizing<Vec<u8>>> {
        STANDARD
            .decode(self.secret_key.trim())
            .map(Zeroizing::new)
            .context("AES_CTR_COLUMN_SECRET_KEY is not valid base64")
    }

    /// Column options matching [`Config::field_length`].
    pub fn column_options(&self) -> common::ColumnOptions {
        common::ColumnOptions::with_length(self.field_length)
    }

    fn validate(&self) -> Result<()> {
        if self.secret_key.trim().is_empty() {
            anyhow::bail!("AES_CTR_COLUMN_SECRET_KEY is required and must not be empty");
        }
        let key = self.secret_key_bytes()?;
        if key.len() != KEY_LEN {
            anyhow::bail!(
                "AES_CTR_COLUMN_SECRET_KEY must decode to {KEY_LEN} bytes, got {}",
                key.len()
            );
        }
        if self.field_length == 0 {
            anyhow::bail!("AES_CTR_COLUMN_FIELD_LENGTH must be > 0");
        }
        Ok(())
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("secret_key", &"[REDACTED]")
            .field("field_length", &self.field_length)
            .field("log_level", &self.log_level)
            .finish()
    }
}
