//! Command line argument parsing for the synroot CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::synonym::SynonymConfig;

/// synroot - collapse terms onto their shortest substring roots
#[derive(Parser, Debug, Clone)]
#[command(name = "synroot")]
#[command(about = "Collapse terms onto their shortest substring roots")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SynrootArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SynrootArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the canonical form of every input term
    Transform(InputArgs),

    /// Print each canonical form with the terms that collapse onto it
    Groups(InputArgs),

    /// Print every recorded match and the rule that produced it
    Matches(InputArgs),
}

/// Arguments shared by all commands
#[derive(Parser, Debug, Clone)]
pub struct InputArgs {
    /// Term file: one term per line, or a JSON array if it ends in .json ("-" reads stdin)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Parse the input as a JSON array of strings regardless of its extension
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub resolver: ResolverArgs,
}

/// Matching thresholds; flags override values from `--config`
#[derive(Parser, Debug, Clone, Default)]
pub struct ResolverArgs {
    /// JSON configuration file
    #[arg(short, long, value_name = "CONFIG_FILE", env = "SYNROOT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Maximum length ratio for prefix matches
    #[arg(long)]
    pub startswith_factor: Option<f64>,

    /// Maximum length ratio for containment matches
    #[arg(long)]
    pub contains_factor: Option<f64>,

    /// Terms must be longer than this to be matched
    #[arg(long)]
    pub min_size: Option<usize>,
}

impl ResolverArgs {
    /// Build the effective configuration.
    pub fn to_config(&self) -> Result<SynonymConfig> {
        let mut config = match &self.config {
            Some(path) => SynonymConfig::load_from_file(path)?,
            None => SynonymConfig::default(),
        };

        if let Some(factor) = self.startswith_factor {
            config.startswith_factor = factor;
        }
        if let Some(factor) = self.contains_factor {
            config.contains_factor = factor;
        }
        if let Some(min_size) = self.min_size {
            config.min_size = min_size;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
    /// Tab-separated output
    Tsv,
}
