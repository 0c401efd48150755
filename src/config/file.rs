use crate::config::Settings;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Optional TOML configuration file. Every field is optional; anything left
/// out keeps the value the settings already hold.
///
/// ```toml
/// [service]
/// base_url = "http://127.0.0.1:8000"
/// timeout_seconds = 10
///
/// [limits]
/// max_note_bytes = 65536
/// max_upload_bytes = 5242880
///
/// [calculator]
/// local_fallback = false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub service: Option<ServiceSection>,
    pub limits: Option<LimitsSection>,
    pub calculator: Option<CalculatorSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceSection {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LimitsSection {
    pub max_note_bytes: Option<usize>,
    pub max_upload_bytes: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculatorSection {
    pub local_fallback: Option<bool>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    pub fn apply(&self, settings: &mut Settings) {
        if let Some(service) = &self.service {
            if let Some(base_url) = &service.base_url {
                settings.base_url = base_url.clone();
            }
            if let Some(secs) = service.timeout_seconds {
                settings.timeout = Duration::from_secs(secs);
            }
        }
        if let Some(limits) = &self.limits {
            if let Some(bytes) = limits.max_note_bytes {
                settings.max_note_bytes = bytes;
            }
            if let Some(bytes) = limits.max_upload_bytes {
                settings.max_upload_bytes = bytes;
            }
        }
        if let Some(calculator) = &self.calculator {
            if let Some(enabled) = calculator.local_fallback {
                settings.local_fallback = enabled;
            }
        }
    }
}
