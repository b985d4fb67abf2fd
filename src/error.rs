//! Error types for the synroot library.
//!
//! All fallible operations return [`SynrootError`] through the crate-wide
//! [`Result`] alias. Matching and fitting never fail; errors come from
//! configuration loading, term input in the CLI, and the cycle guard used
//! during canonical resolution.
//!
//! # Examples
//!
//! ```
//! use synroot::error::{Result, SynrootError};
//!
//! fn check_factor(factor: f64) -> Result<()> {
//!     if factor < 0.0 {
//!         return Err(SynrootError::invalid_config("factor must be non-negative"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_factor(-1.0).is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for synroot operations.
#[derive(Error, Debug)]
pub enum SynrootError {
    /// I/O errors (reading term files, config files, stdin)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration values that cannot drive the matcher
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Malformed input (config JSON, term lists)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Failure to read or write a backing file
    #[error("Storage error: {0}")]
    Storage(String),

    /// Canonical resolution revisited a term.
    #[error("Cycle detected while resolving '{term}': {chain}")]
    CycleDetected { term: String, chain: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with SynrootError.
pub type Result<T> = std::result::Result<T, SynrootError>;

impl SynrootError {
    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SynrootError::InvalidConfig(msg.into())
    }

    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        SynrootError::Parse(msg.into())
    }

    /// Create a new storage error.
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        SynrootError::Storage(msg.into())
    }

    /// Create a cycle error from the term that started resolution and the
    /// chain walked so far.
    pub fn cycle_detected<S: Into<String>>(term: S, chain: &[String]) -> Self {
        SynrootError::CycleDetected {
            term: term.into(),
            chain: chain.join(" -> "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = SynrootError::invalid_config("bad factor");
        assert_eq!(error.to_string(), "Invalid configuration: bad factor");

        let error = SynrootError::parse("not a list");
        assert_eq!(error.to_string(), "Parse error: not a list");

        let error = SynrootError::storage("missing file");
        assert_eq!(error.to_string(), "Storage error: missing file");
    }

    #[test]
    fn test_cycle_error_message() {
        let chain = vec!["alpha beta".to_string(), "beta alpha".to_string()];
        let error = SynrootError::cycle_detected("alpha beta", &chain);
        assert_eq!(
            error.to_string(),
            "Cycle detected while resolving 'alpha beta': alpha beta -> beta alpha"
        );
    }

    #[test]
    fn test_every_variant_has_a_source() {
        let errors = vec![
            SynrootError::from(io::Error::other("read failed")),
            SynrootError::invalid_config("bad factor"),
            SynrootError::parse("not a list"),
            SynrootError::storage("missing file"),
            SynrootError::cycle_detected("a b", &["a b".to_string()]),
            SynrootError::from(serde_json::from_str::<Vec<String>>("{").unwrap_err()),
        ];

        for error in errors {
            let kind = match error {
                SynrootError::Io(_) => "io",
                SynrootError::InvalidConfig(_) => "config",
                SynrootError::Parse(_) => "parse",
                SynrootError::Storage(_) => "storage",
                SynrootError::CycleDetected { .. } => "cycle",
                SynrootError::Json(_) => "json",
            };
            assert!(!kind.is_empty());
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = SynrootError::from(io_error);

        match error {
            SynrootError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
