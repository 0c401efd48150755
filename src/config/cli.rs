use crate::config::file::FileConfig;
use crate::config::Settings;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "bioscribe")]
#[command(about = "Wet-lab assistant: dilution math, SOP cleanup, paper analysis")]
pub struct CliConfig {
    /// Base address of the assistant service
    #[arg(long, env = "BIOSCRIBE_API_URL")]
    pub api_url: Option<String>,

    /// TOML configuration file (flags still win over file values)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Report "Backend not connected" instead of solving dilutions locally
    /// when the service is unreachable
    #[arg(long)]
    pub no_local_fallback: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: ToolCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum ToolCommand {
    /// Solve the dilution equation; leave exactly one value at 0
    Dilution {
        /// Initial concentration
        #[arg(long, default_value_t = 0.0)]
        c1: f64,
        /// Initial volume
        #[arg(long, default_value_t = 0.0)]
        v1: f64,
        /// Final concentration
        #[arg(long, default_value_t = 0.0)]
        c2: f64,
        /// Final volume
        #[arg(long, default_value_t = 0.0)]
        v2: f64,
    },
    /// Restructure raw lab notes into a Standard Operating Procedure
    Protocol {
        /// Raw notes, inline
        #[arg(long, conflicts_with = "notes_file")]
        notes: Option<String>,
        /// Read the raw notes from a file
        #[arg(long, required_unless_present = "notes")]
        notes_file: Option<PathBuf>,
    },
    /// Upload a research paper for analysis
    Paper {
        /// Path to the paper (PDF expected by the service)
        #[arg(long)]
        file: PathBuf,
    },
}

impl CliConfig {
    /// Defaults, overlaid by the `--config` file, overlaid by flags and the
    /// environment. Validated before use.
    pub fn resolve(&self) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(path) = &self.config {
            FileConfig::from_file(path)?.apply(&mut settings);
        }
        if let Some(url) = &self.api_url {
            settings.base_url = url.clone();
        }
        if let Some(secs) = self.timeout_seconds {
            settings.timeout = Duration::from_secs(secs);
        }
        if self.no_local_fallback {
            settings.local_fallback = false;
        }

        settings.validate()?;
        Ok(settings)
    }
}
