#[cfg(feature = "cli")]
pub mod cli;
pub mod file;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_range, validate_url, Validate};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://bioscribe-backend.onrender.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_NOTE_BYTES: usize = 512 * 1024;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Fully resolved settings: defaults, overlaid by an optional TOML file,
/// overlaid by CLI flags and environment. Read-only once built.
#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: String,
    pub timeout: Duration,
    pub max_note_bytes: usize,
    pub max_upload_bytes: usize,
    pub local_fallback: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_note_bytes: DEFAULT_MAX_NOTE_BYTES,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            local_fallback: true,
        }
    }
}

impl ConfigProvider for Settings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request_timeout(&self) -> Duration {
        self.timeout
    }

    fn max_note_bytes(&self) -> usize {
        self.max_note_bytes
    }

    fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }

    fn local_fallback(&self) -> bool {
        self.local_fallback
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_range("timeout_seconds", self.timeout.as_secs(), 1, 600)?;
        validate_positive_number("max_note_bytes", self.max_note_bytes, 1)?;
        validate_positive_number("max_upload_bytes", self.max_upload_bytes, 1)?;
        Ok(())
    }
}
