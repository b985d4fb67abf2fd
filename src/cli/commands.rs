//! Command implementations for the synroot CLI.

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::time::{Duration, Instant};

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{Result, SynrootError};
use crate::synonym::{SynonymIndex, SynonymResolver};

/// Execute a CLI command.
pub fn execute_command(args: SynrootArgs) -> Result<()> {
    match &args.command {
        Command::Transform(input) => transform_terms(input, &args),
        Command::Groups(input) => show_groups(input, &args),
        Command::Matches(input) => show_matches(input, &args),
    }
}

/// Print the canonical form of every input term.
fn transform_terms(input: &InputArgs, cli_args: &SynrootArgs) -> Result<()> {
    let (terms, index, summary) = fit_input(input)?;
    let canonical = index.transform(&terms)?;

    let result = TransformResult {
        summary,
        terms: terms
            .into_iter()
            .zip(canonical)
            .map(|(term, canonical)| Resolution { term, canonical })
            .collect(),
    };
    output_result(&result, cli_args)
}

/// Print canonical forms with their members.
fn show_groups(input: &InputArgs, cli_args: &SynrootArgs) -> Result<()> {
    let (_, index, summary) = fit_input(input)?;
    let result = GroupsResult {
        summary,
        groups: index.groups()?,
    };
    output_result(&result, cli_args)
}

/// Print the raw match map.
fn show_matches(input: &InputArgs, cli_args: &SynrootArgs) -> Result<()> {
    let (_, index, summary) = fit_input(input)?;
    let result = MatchesResult {
        summary,
        matches: index.matches(),
    };
    output_result(&result, cli_args)
}

/// Load terms and fit a resolver configured from the command line.
fn fit_input(input: &InputArgs) -> Result<(Vec<String>, SynonymIndex, FitSummary)> {
    let config = input.resolver.to_config()?;
    let terms = read_terms(&input.input, input.json)?;
    info!(
        "loaded {} terms from {}",
        terms.len(),
        input.input.display()
    );

    let resolver = SynonymResolver::with_config(config);
    let start = Instant::now();
    let index = resolver.fit(&terms);
    let duration = start.elapsed();

    let summary = FitSummary {
        input_terms: terms.len(),
        vocabulary_size: index.vocabulary().len(),
        matches: index.len(),
        duration_ms: elapsed_millis(duration),
    };
    Ok((terms, index, summary))
}

/// Whole milliseconds in `duration`, saturating at `u64::MAX`.
pub fn elapsed_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Read terms from a file, or from stdin when the path is `-`.
///
/// The input is a JSON array when `json` is set or the file name ends in
/// `.json`; otherwise one term per line.
pub fn read_terms(path: &Path, json: bool) -> Result<Vec<String>> {
    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path).map_err(|e| {
            SynrootError::storage(format!(
                "Failed to read term file '{}': {}",
                path.display(),
                e
            ))
        })?
    };

    let is_json = json
        || path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        parse_json_terms(&content)
    } else {
        Ok(parse_line_terms(&content))
    }
}

/// One term per line, kept verbatim apart from the line ending (`\n` or
/// `\r\n`). Empty lines are skipped.
pub fn parse_line_terms(content: &str) -> Vec<String> {
    content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// A JSON array of strings, kept verbatim.
pub fn parse_json_terms(content: &str) -> Result<Vec<String>> {
    serde_json::from_str(content)
        .map_err(|e| SynrootError::parse(format!("Expected a JSON array of strings: {e}")))
}
