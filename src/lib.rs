//! # synroot
//!
//! Collapse a collection of terms onto canonical representatives by
//! detecting substring relationships. A short term becomes the "synonym
//! root" of longer terms that extend it:
//!
//! ```text
//! "joel klinger"       (root)
//! "joel klinger codes" -> "joel klinger"
//! ```
//!
//! ## Features
//!
//! - Prefix and containment matching under configurable length ratios
//! - Immutable [`synonym::SynonymIndex`] produced by a fit pass
//! - Cycle-guarded canonical resolution
//! - A small CLI for running the resolver over term files
//!
//! ## Example
//!
//! ```
//! use synroot::synonym::SynonymResolver;
//!
//! let terms = vec!["joel", "joel klinger", "joel klinger codes"];
//! let resolver = SynonymResolver::new();
//! let canonical = resolver.fit_transform(&terms).unwrap();
//! assert_eq!(canonical, vec!["joel", "joel klinger", "joel klinger"]);
//! ```

pub mod cli;
pub mod error;
pub mod synonym;

pub mod prelude {
    pub use crate::error::{Result, SynrootError};
    pub use crate::synonym::{
        MatchRule, SubstringMatcher, SynonymConfig, SynonymIndex, SynonymResolver, Vocabulary,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
