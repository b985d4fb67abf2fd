//! Substring-based synonym detection and canonicalization.
//!
//! A term is treated as a synonym of a shorter "root" term when it starts
//! with the root, or contains it, and is not too much longer than it.
//! Fitting a term collection produces a [`SynonymIndex`] that maps every
//! matched term to its root; following those links until an unmatched term
//! is reached yields the canonical form.
//!
//! # Components
//!
//! - [`config`] - Matching thresholds and vocabulary size limit
//! - [`matcher`] - The pairwise prefix/containment test
//! - [`vocabulary`] - Filtering and ordering of match candidates
//! - [`index`] - The fitted match map and canonical resolution
//! - [`resolver`] - The fit/transform entry points
//!
//! # Match Chains
//!
//! ```text
//! Input: ["joel", "joel klinger", "joel klinger codes"]
//!
//! Vocabulary (len > 6, not purely alphabetic):
//!   "joel klinger", "joel klinger codes"
//!
//! Match map:
//!   "joel klinger codes" ──> "joel klinger"
//!
//! Canonical forms:
//!   "joel" -> "joel", "joel klinger" -> "joel klinger",
//!   "joel klinger codes" -> "joel klinger"
//! ```
//!
//! # Examples
//!
//! ```
//! use synroot::synonym::SynonymResolver;
//!
//! let resolver = SynonymResolver::new();
//! let index = resolver.fit(&["machine learning", "machine learning engineer"]);
//!
//! assert_eq!(index.root_of("machine learning engineer"), Some("machine learning"));
//! assert_eq!(index.resolve("machine learning engineer").unwrap(), "machine learning");
//! ```

pub mod config;
pub mod index;
pub mod matcher;
pub mod resolver;
pub mod vocabulary;

pub use config::SynonymConfig;
pub use index::{SynonymIndex, SynonymMatch};
pub use matcher::{MatchRule, SubstringMatcher};
pub use resolver::SynonymResolver;
pub use vocabulary::Vocabulary;
