//! Candidate vocabulary extraction.

use std::sync::LazyLock;

use ahash::AHashSet;
use regex::Regex;

/// Terms made only of Unicode letters (general category L). Marks such as
/// Indic vowel signs and letter-like numerals do not count as letters.
static ALL_LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{L}+$").expect("letter pattern is valid"));

/// The de-duplicated set of terms eligible for matching, ordered by length.
///
/// Ties in length keep the order in which terms first appeared in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Vec<String>,
}

impl Vocabulary {
    /// Create an empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a vocabulary from raw input terms.
    ///
    /// A term is kept when it is longer than `min_size` characters and
    /// contains at least one character that is not a letter.
    pub fn extract<S: AsRef<str>>(terms: &[S], min_size: usize) -> Self {
        let mut seen = AHashSet::with_capacity(terms.len());
        let mut kept: Vec<String> = Vec::new();

        for term in terms {
            let term = term.as_ref();
            if !is_eligible(term, min_size) {
                continue;
            }
            if seen.insert(term) {
                kept.push(term.to_string());
            }
        }

        // sort_by_key is stable, so equal lengths keep input order
        kept.sort_by_key(|term| term.chars().count());

        Vocabulary { terms: kept }
    }

    /// Terms in ascending length order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Iterate over the terms in ascending length order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    /// Check if a term is part of the vocabulary.
    pub fn contains(&self, term: &str) -> bool {
        self.terms.iter().any(|t| t == term)
    }

    /// Get the number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Would `term` pass the vocabulary filter for the given `min_size`?
pub fn is_eligible(term: &str, min_size: usize) -> bool {
    term.chars().count() > min_size && !is_all_letters(term)
}

/// Is `term` non-empty and made only of letters?
pub fn is_all_letters(term: &str) -> bool {
    ALL_LETTERS.is_match(term)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_short_and_alphabetic_terms() {
        let vocab = Vocabulary::extract(&["joel", "joel klinger", "klinger", "xxxxxxxxx"], 6);
        assert_eq!(vocab.terms(), &["joel klinger".to_string()]);
    }

    #[test]
    fn test_min_size_is_exclusive() {
        // "abc def" is 7 chars
        assert!(!is_eligible("abc def", 7));
        assert!(is_eligible("abc def", 6));
        assert!(!is_eligible("abcdef", 5));
    }

    #[test]
    fn test_digits_and_punctuation_are_non_alphabetic() {
        assert!(is_eligible("version2", 6));
        assert!(is_eligible("co-author", 6));
        assert!(!is_eligible("übermäßig", 6));
    }

    #[test]
    fn test_marks_and_letter_numerals_are_not_letters() {
        // contains the vowel sign U+093E (category Mc)
        assert!(!is_all_letters("भारतीयभाषा"));
        assert!(is_eligible("भारतीयभाषा", 6));
        // ROMAN NUMERAL TWELVE is category Nl
        assert!(!is_all_letters("ⅫⅫⅫⅫⅫⅫⅫ"));
        assert!(is_eligible("ⅫⅫⅫⅫⅫⅫⅫ", 6));

        assert!(is_all_letters("日本語の文章です"));
        assert!(!is_eligible("日本語の文章です", 6));
        assert!(!is_all_letters(""));
    }

    #[test]
    fn test_dedup_and_length_order() {
        let vocab = Vocabulary::extract(
            &[
                "machine learning engineer",
                "data-mining",
                "machine learning",
                "data-mining",
                "web-scale",
            ],
            6,
        );
        assert_eq!(
            vocab.terms(),
            &[
                "web-scale".to_string(),
                "data-mining".to_string(),
                "machine learning".to_string(),
                "machine learning engineer".to_string(),
            ]
        );
        assert_eq!(vocab.len(), 4);
        assert!(vocab.contains("data-mining"));
        assert!(!vocab.contains("data mining"));
    }

    #[test]
    fn test_equal_lengths_keep_input_order() {
        let vocab = Vocabulary::extract(&["bbb bbb", "aaa aaa", "ccc ccc"], 6);
        let terms: Vec<&str> = vocab.iter().collect();
        assert_eq!(terms, vec!["bbb bbb", "aaa aaa", "ccc ccc"]);
    }

    #[test]
    fn test_empty_input() {
        let vocab = Vocabulary::extract::<&str>(&[], 6);
        assert!(vocab.is_empty());
    }
}
