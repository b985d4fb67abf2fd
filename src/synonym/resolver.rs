//! Fit/transform entry points for synonym resolution.

use ahash::AHashSet;
use log::{debug, trace};

use crate::error::Result;
use crate::synonym::config::SynonymConfig;
use crate::synonym::index::SynonymIndex;
use crate::synonym::matcher::SubstringMatcher;
use crate::synonym::vocabulary::Vocabulary;

/// Collapses terms onto their shortest substring roots.
///
/// The resolver only holds configuration. [`fit`](Self::fit) returns a new
/// [`SynonymIndex`] on every call, so one resolver can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct SynonymResolver {
    config: SynonymConfig,
    matcher: SubstringMatcher,
}

impl SynonymResolver {
    /// Create a resolver with the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver with custom configuration.
    pub fn with_config(config: SynonymConfig) -> Self {
        let matcher = SubstringMatcher::from_config(&config);
        SynonymResolver { config, matcher }
    }

    /// Get the current configuration.
    pub fn config(&self) -> &SynonymConfig {
        &self.config
    }

    /// Is `candidate` an expansion of `root` under this resolver's thresholds?
    pub fn is_synonym(&self, root: &str, candidate: &str) -> bool {
        self.matcher.is_synonym(root, candidate)
    }

    /// Find the root of every vocabulary term.
    ///
    /// Every ordered pair of distinct vocabulary positions is tested, shorter
    /// terms first. A candidate keeps the first root it matches.
    pub fn fit<S: AsRef<str>>(&self, terms: &[S]) -> SynonymIndex {
        let vocabulary = Vocabulary::extract(terms, self.config.min_size);
        debug!(
            "fitting {} input terms, {} in vocabulary",
            terms.len(),
            vocabulary.len()
        );

        let vocab = vocabulary.terms();
        let mut matched: AHashSet<&str> = AHashSet::new();
        let mut matches = Vec::new();

        for (i, root) in vocab.iter().enumerate() {
            for (j, candidate) in vocab.iter().enumerate() {
                if i == j || matched.contains(candidate.as_str()) {
                    continue;
                }
                if let Some(rule) = self.matcher.match_rule(root, candidate) {
                    trace!("'{}' -> '{}' ({})", candidate, root, rule);
                    matched.insert(candidate.as_str());
                    matches.push((candidate.clone(), root.clone(), rule));
                }
            }
        }

        debug!("recorded {} matches", matches.len());
        SynonymIndex::from_matches(vocabulary, matches)
    }

    /// Map each term to its canonical form under a fitted index.
    pub fn transform<S: AsRef<str>>(
        &self,
        index: &SynonymIndex,
        terms: &[S],
    ) -> Result<Vec<String>> {
        index.transform(terms)
    }

    /// Fit on `terms` and transform the same terms.
    pub fn fit_transform<S: AsRef<str>>(&self, terms: &[S]) -> Result<Vec<String>> {
        let index = self.fit(terms);
        self.transform(&index, terms)
    }
}
