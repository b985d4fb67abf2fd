//! Integration tests for fitting and canonicalizing term collections

use std::collections::HashSet;

use synroot::prelude::*;
use synroot::synonym::vocabulary::{is_all_letters, is_eligible};

/// Terms built from a small alphabet so that many of them overlap.
fn overlapping_terms() -> Vec<String> {
    let words = ["data", "data sci", "ml", "ml ops", "net", "a", "b-c"];
    let mut terms = Vec::new();
    for first in &words {
        terms.push(first.to_string());
        for second in &words {
            terms.push(format!("{first} {second}"));
            for third in &words {
                terms.push(format!("{first} {second} {third}"));
            }
        }
    }
    terms
}

fn configs() -> Vec<SynonymConfig> {
    vec![
        SynonymConfig::default(),
        SynonymConfig::new().with_min_size(0),
        SynonymConfig::new()
            .with_min_size(2)
            .with_startswith_factor(5.0)
            .with_contains_factor(5.0),
        SynonymConfig::new()
            .with_min_size(3)
            .with_startswith_factor(1.0)
            .with_contains_factor(3.0),
    ]
}

#[test]
fn test_documented_scenarios() -> Result<()> {
    let resolver = SynonymResolver::new();

    let output = resolver.fit_transform(&["joel", "joel klinger", "joel klinger codes"])?;
    assert_eq!(output, vec!["joel", "joel klinger", "joel klinger"]);

    let output = resolver.fit_transform(&["machine learning", "machine learning engineer"])?;
    assert_eq!(output, vec!["machine learning", "machine learning"]);

    let output = resolver.fit_transform(&["xxxxxxx", "yyyyyyy"])?;
    assert_eq!(output, vec!["xxxxxxx", "yyyyyyy"]);

    Ok(())
}

#[test]
fn test_vocabulary_filtering() {
    let terms = overlapping_terms();
    for config in configs() {
        let index = SynonymResolver::with_config(config.clone()).fit(&terms);
        for term in index.vocabulary().iter() {
            assert!(term.chars().count() > config.min_size);
            assert!(!is_all_letters(term));
        }
        for term in &terms {
            assert_eq!(
                index.vocabulary().contains(term),
                is_eligible(term, config.min_size)
            );
        }
    }
}

#[test]
fn test_at_most_one_root_per_term() {
    let terms = overlapping_terms();
    for config in configs() {
        let index = SynonymResolver::with_config(config).fit(&terms);
        let matches = index.matches();
        let candidates: HashSet<&str> = matches.iter().map(|m| m.candidate.as_str()).collect();
        assert_eq!(candidates.len(), matches.len());
        assert_eq!(matches.len(), index.len());
    }
}

#[test]
fn test_matches_point_to_shorter_terms() {
    let terms = overlapping_terms();
    for config in configs() {
        let resolver = SynonymResolver::with_config(config);
        let index = resolver.fit(&terms);
        for m in index.matches() {
            assert!(resolver.is_synonym(&m.root, &m.candidate));
            assert!(m.candidate.chars().count() > m.root.chars().count());
            assert!(index.vocabulary().contains(&m.root));
        }
    }
}

#[test]
fn test_canonicalization_is_idempotent_and_acyclic() -> Result<()> {
    let terms = overlapping_terms();
    for config in configs() {
        let resolver = SynonymResolver::with_config(config);
        let index = resolver.fit(&terms);
        let canonical = resolver.transform(&index, &terms)?;

        assert_eq!(canonical.len(), terms.len());
        for (term, once) in terms.iter().zip(&canonical) {
            let twice = index.resolve(once)?;
            assert_eq!(&twice, once, "canonical form of '{term}' is not a fixed point");
            assert!(!index.is_matched(once));
        }
    }
    Ok(())
}

#[test]
fn test_transform_preserves_positions_and_duplicates() -> Result<()> {
    let terms = vec![
        "joel klinger codes",
        "joel",
        "joel klinger codes",
        "joel klinger",
        "",
    ];
    let output = SynonymResolver::new().fit_transform(&terms)?;
    assert_eq!(
        output,
        vec!["joel klinger", "joel", "joel klinger", "joel klinger", ""]
    );
    Ok(())
}

#[test]
fn test_index_reused_on_unseen_terms() -> Result<()> {
    let resolver = SynonymResolver::new();
    let index = resolver.fit(&["machine learning", "machine learning engineer"]);
    let output = resolver.transform(&index, &["machine learning engineer", "machine vision"])?;
    assert_eq!(output, vec!["machine learning", "machine vision"]);
    Ok(())
}

#[test]
fn test_groups_collect_members() -> Result<()> {
    let resolver = SynonymResolver::new();
    let index = resolver.fit(&[
        "joel",
        "joel klinger",
        "joel klinger codes",
        "joel klinger codes rust",
        "machine learning",
    ]);
    let groups = index.groups()?;
    assert_eq!(groups.len(), 1);
    assert_eq!(
        groups["joel klinger"],
        vec!["joel klinger codes", "joel klinger codes rust"]
    );
    Ok(())
}
