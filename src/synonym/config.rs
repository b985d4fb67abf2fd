//! Configuration for synonym matching.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SynrootError};

/// Default maximum length ratio for a prefix match.
pub const DEFAULT_STARTSWITH_FACTOR: f64 = 2.0;

/// Default maximum length ratio for a containment match.
pub const DEFAULT_CONTAINS_FACTOR: f64 = 1.3;

/// Default exclusive lower bound on vocabulary term length.
pub const DEFAULT_MIN_SIZE: usize = 6;

/// Thresholds controlling which terms are matched against each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynonymConfig {
    /// Maximum ratio of candidate length to root length when the candidate
    /// starts with the root.
    pub startswith_factor: f64,
    /// Maximum ratio of candidate length to root length when the root occurs
    /// anywhere inside the candidate.
    pub contains_factor: f64,
    /// Terms must be strictly longer than this to enter the vocabulary.
    pub min_size: usize,
}

impl Default for SynonymConfig {
    fn default() -> Self {
        SynonymConfig {
            startswith_factor: DEFAULT_STARTSWITH_FACTOR,
            contains_factor: DEFAULT_CONTAINS_FACTOR,
            min_size: DEFAULT_MIN_SIZE,
        }
    }
}

impl SynonymConfig {
    /// Create a configuration with the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prefix-rule length ratio.
    pub fn with_startswith_factor(mut self, factor: f64) -> Self {
        self.startswith_factor = factor;
        self
    }

    /// Set the containment-rule length ratio.
    pub fn with_contains_factor(mut self, factor: f64) -> Self {
        self.contains_factor = factor;
        self
    }

    /// Set the minimum vocabulary term length (exclusive).
    pub fn with_min_size(mut self, min_size: usize) -> Self {
        self.min_size = min_size;
        self
    }

    /// Check that both factors are usable as length ratios.
    pub fn validate(&self) -> Result<()> {
        check_factor("startswith_factor", self.startswith_factor)?;
        check_factor("contains_factor", self.contains_factor)?;
        Ok(())
    }

    /// Load a configuration from a JSON file.
    ///
    /// Missing keys fall back to their defaults:
    /// ```json
    /// { "startswith_factor": 2.5, "min_size": 4 }
    /// ```
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SynrootError::storage(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: SynonymConfig = serde_json::from_str(&content).map_err(|e| {
            SynrootError::parse(format!(
                "Failed to parse config JSON from '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }
}

fn check_factor(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(SynrootError::invalid_config(format!(
            "{name} must be a finite, non-negative number (got {value})"
        )));
    }
    Ok(())
}
