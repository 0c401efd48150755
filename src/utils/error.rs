use crate::domain::model::Variable;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LabError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("service unavailable: {reason}")]
    ServiceUnavailable { reason: String },

    #[error("service reply carries neither a payload nor an error: {body}")]
    MalformedResponse { body: String },

    #[error("leave exactly one of c1, v1, c2, v2 at 0 ({zeros} fields were 0)")]
    AmbiguousInputs { zeros: usize },

    #[error("cannot solve for {unknown}: {divisor} is also 0")]
    DegenerateInputs { unknown: Variable, divisor: Variable },

    #[error("{field} must be a finite, non-negative quantity (got {value})")]
    InvalidQuantity { field: Variable, value: f64 },

    #[error("no file selected")]
    NoFileSelected,

    #[error("{field} is {actual} bytes, over the {limit} byte limit")]
    PayloadTooLarge {
        field: &'static str,
        actual: usize,
        limit: usize,
    },

    #[error("invalid value for {field} ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("configuration file error: {0}")]
    ConfigFile(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LabError {
    /// One-line hint printed by the CLI under the error itself.
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LabError::HttpClient(_) => "check the timeout and TLS settings",
            LabError::ServiceUnavailable { .. } => {
                "check the network and the BIOSCRIBE_API_URL address"
            }
            LabError::MalformedResponse { .. } => {
                "the service replied with an unexpected shape; report it upstream"
            }
            LabError::AmbiguousInputs { .. } => {
                "set the field you want solved to 0 and fill in the other three"
            }
            LabError::DegenerateInputs { .. } | LabError::InvalidQuantity { .. } => {
                "check the entered concentrations and volumes"
            }
            LabError::NoFileSelected => "pass the paper to analyze with --file",
            LabError::PayloadTooLarge { .. } => {
                "trim the input or raise the limit in the config file"
            }
            LabError::InvalidConfigValue { .. } | LabError::ConfigFile(_) => {
                "fix the flagged configuration value and retry"
            }
            LabError::Io(_) => "check that the path exists and is readable",
            LabError::Serialization(_) => "check the request payload",
        }
    }

    /// Process exit code for the CLI: 2 for input/config mistakes, 3 when the
    /// remote service cannot be reached, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            LabError::AmbiguousInputs { .. }
            | LabError::DegenerateInputs { .. }
            | LabError::InvalidQuantity { .. }
            | LabError::NoFileSelected
            | LabError::PayloadTooLarge { .. }
            | LabError::InvalidConfigValue { .. }
            | LabError::ConfigFile(_) => 2,
            LabError::ServiceUnavailable { .. } => 3,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, LabError>;
