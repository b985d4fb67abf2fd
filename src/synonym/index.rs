//! The fitted synonym index and canonical resolution.

use std::collections::BTreeMap;

use ahash::{AHashMap, AHashSet};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SynrootError};
use crate::synonym::matcher::MatchRule;
use crate::synonym::vocabulary::Vocabulary;

/// A single recorded match: `candidate` was found to expand `root`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymMatch {
    pub candidate: String,
    pub root: String,
    pub rule: MatchRule,
}

/// Immutable result of fitting a term collection.
///
/// Maps each matched (longer) term to the single shorter term it was
/// matched against. Terms absent from the map resolve to themselves.
#[derive(Debug, Clone, Default)]
pub struct SynonymIndex {
    vocabulary: Vocabulary,
    /// candidate -> (root, rule)
    reverse_synonyms: AHashMap<String, (String, MatchRule)>,
}

impl SynonymIndex {
    /// Create an empty index in which every term is its own canonical form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from a vocabulary and explicit `(candidate, root, rule)`
    /// triples. Later duplicates of a candidate are ignored.
    ///
    /// Matches passed here are not checked against any matcher, so this can
    /// describe maps the fit pass would never produce.
    pub fn from_matches<I>(vocabulary: Vocabulary, matches: I) -> Self
    where
        I: IntoIterator<Item = (String, String, MatchRule)>,
    {
        let mut reverse_synonyms = AHashMap::new();
        for (candidate, root, rule) in matches {
            reverse_synonyms.entry(candidate).or_insert((root, rule));
        }
        SynonymIndex {
            vocabulary,
            reverse_synonyms,
        }
    }

    /// The vocabulary the index was fitted on.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// The root `term` was directly matched against, if any.
    pub fn root_of(&self, term: &str) -> Option<&str> {
        self.reverse_synonyms
            .get(term)
            .map(|(root, _)| root.as_str())
    }

    /// The rule under which `term` was matched, if it was.
    pub fn rule_of(&self, term: &str) -> Option<MatchRule> {
        self.reverse_synonyms.get(term).map(|(_, rule)| *rule)
    }

    /// Check if `term` has a recorded root.
    pub fn is_matched(&self, term: &str) -> bool {
        self.reverse_synonyms.contains_key(term)
    }

    /// All recorded matches, in vocabulary order of the candidate.
    pub fn matches(&self) -> Vec<SynonymMatch> {
        self.vocabulary
            .iter()
            .filter_map(|candidate| {
                self.reverse_synonyms
                    .get(candidate)
                    .map(|(root, rule)| SynonymMatch {
                        candidate: candidate.to_string(),
                        root: root.clone(),
                        rule: *rule,
                    })
            })
            .collect()
    }

    /// Get the number of recorded matches.
    pub fn len(&self) -> usize {
        self.reverse_synonyms.len()
    }

    /// Check if no matches were recorded.
    pub fn is_empty(&self) -> bool {
        self.reverse_synonyms.is_empty()
    }

    /// Follow the match chain from `term` to its canonical form.
    ///
    /// Returns [`SynrootError::CycleDetected`] if the chain revisits a term.
    pub fn resolve(&self, term: &str) -> Result<String> {
        let mut visited: AHashSet<&str> = AHashSet::new();
        let mut chain: Vec<String> = vec![term.to_string()];
        let mut current: &str = term;
        visited.insert(current);

        while let Some(root) = self.root_of(current) {
            chain.push(root.to_string());
            if !visited.insert(root) {
                warn!("match chain for '{}' loops back to '{}'", term, root);
                return Err(SynrootError::cycle_detected(term, &chain));
            }
            current = root;
        }

        Ok(current.to_string())
    }

    /// Resolve every term, preserving order and length.
    pub fn transform<S: AsRef<str>>(&self, terms: &[S]) -> Result<Vec<String>> {
        terms.iter().map(|term| self.resolve(term.as_ref())).collect()
    }

    /// Group vocabulary terms under the canonical form they resolve to.
    ///
    /// Only canonical forms with at least one other member are listed; the
    /// members keep vocabulary (ascending length) order.
    pub fn groups(&self) -> Result<BTreeMap<String, Vec<String>>> {
        let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for term in self.vocabulary.iter() {
            let canonical = self.resolve(term)?;
            if canonical != term {
                groups.entry(canonical).or_default().push(term.to_string());
            }
        }
        Ok(groups)
    }
}
