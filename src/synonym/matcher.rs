//! Pairwise substring matching under length-ratio thresholds.

use serde::{Deserialize, Serialize};

use crate::synonym::config::SynonymConfig;

/// Which rule accepted a candidate as an expansion of a root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchRule {
    /// The candidate starts with the root.
    Prefix,
    /// The root occurs somewhere inside the candidate.
    Containment,
}

impl std::fmt::Display for MatchRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchRule::Prefix => write!(f, "prefix"),
            MatchRule::Containment => write!(f, "containment"),
        }
    }
}

/// Decides whether one term is a synonym expansion of another.
///
/// Lengths are counted in `char`s. Identity is not excluded here: a term
/// always matches itself, so callers must skip equal pairs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubstringMatcher {
    startswith_factor: f64,
    contains_factor: f64,
}

impl Default for SubstringMatcher {
    fn default() -> Self {
        Self::from_config(&SynonymConfig::default())
    }
}

impl SubstringMatcher {
    /// Create a matcher from explicit factors.
    pub fn new(startswith_factor: f64, contains_factor: f64) -> Self {
        SubstringMatcher {
            startswith_factor,
            contains_factor,
        }
    }

    /// Create a matcher using the factors of a configuration.
    pub fn from_config(config: &SynonymConfig) -> Self {
        Self::new(config.startswith_factor, config.contains_factor)
    }

    /// Is `candidate` an expansion of `root`?
    pub fn is_synonym(&self, root: &str, candidate: &str) -> bool {
        self.match_rule(root, candidate).is_some()
    }

    /// Return the first rule under which `candidate` expands `root`.
    ///
    /// The prefix rule is tried before the containment rule.
    pub fn match_rule(&self, root: &str, candidate: &str) -> Option<MatchRule> {
        let root_len = root.chars().count() as f64;
        let candidate_len = candidate.chars().count() as f64;

        if candidate_len <= self.startswith_factor * root_len && candidate.starts_with(root) {
            return Some(MatchRule::Prefix);
        }
        if candidate_len <= self.contains_factor * root_len && candidate.contains(root) {
            return Some(MatchRule::Containment);
        }
        None
    }
}
