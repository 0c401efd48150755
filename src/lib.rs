pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use app::transport::HttpTransport;
pub use config::Settings;
pub use crate::core::{solver, Workbench};
pub use utils::error::{LabError, Result};
