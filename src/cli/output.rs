//! Output formatting for CLI commands.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SynrootArgs};
use crate::error::Result;
use crate::synonym::SynonymMatch;

/// Summary of a fit pass, shared by every command's result.
#[derive(Debug, Serialize, Deserialize)]
pub struct FitSummary {
    pub input_terms: usize,
    pub vocabulary_size: usize,
    pub matches: usize,
    pub duration_ms: u64,
}

/// One input term and its canonical form.
#[derive(Debug, Serialize, Deserialize)]
pub struct Resolution {
    pub term: String,
    pub canonical: String,
}

/// Result structure for the transform command.
#[derive(Debug, Serialize, Deserialize)]
pub struct TransformResult {
    pub summary: FitSummary,
    pub terms: Vec<Resolution>,
}

/// Result structure for the groups command.
#[derive(Debug, Serialize, Deserialize)]
pub struct GroupsResult {
    pub summary: FitSummary,
    pub groups: BTreeMap<String, Vec<String>>,
}

/// Result structure for the matches command.
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchesResult {
    pub summary: FitSummary,
    pub matches: Vec<SynonymMatch>,
}

/// Results that know how to print themselves for people and for pipes.
pub trait CommandOutput: Serialize {
    /// Multi-line human-readable rendering.
    fn render_human(&self) -> String;

    /// One record per line, fields separated by tabs.
    fn render_tsv(&self) -> String;

    /// The fit statistics behind this result.
    fn summary(&self) -> &FitSummary;
}

impl CommandOutput for TransformResult {
    fn render_human(&self) -> String {
        let mut out = String::from("Canonical Forms:\n════════════════\n");
        for resolution in &self.terms {
            if resolution.term == resolution.canonical {
                out.push_str(&format!("{}\n", resolution.term));
            } else {
                out.push_str(&format!("{} -> {}\n", resolution.term, resolution.canonical));
            }
        }
        out
    }

    fn render_tsv(&self) -> String {
        self.terms
            .iter()
            .map(|r| format!("{}\t{}\n", r.term, r.canonical))
            .collect()
    }

    fn summary(&self) -> &FitSummary {
        &self.summary
    }
}

impl CommandOutput for GroupsResult {
    fn render_human(&self) -> String {
        let mut out = String::from("Synonym Groups:\n═══════════════\n");
        for (canonical, members) in &self.groups {
            out.push_str(&format!("\n{canonical}\n"));
            for member in members {
                out.push_str(&format!("  {member}\n"));
            }
        }
        out
    }

    fn render_tsv(&self) -> String {
        self.groups
            .iter()
            .flat_map(|(canonical, members)| {
                members
                    .iter()
                    .map(move |member| format!("{canonical}\t{member}\n"))
            })
            .collect()
    }

    fn summary(&self) -> &FitSummary {
        &self.summary
    }
}

impl CommandOutput for MatchesResult {
    fn render_human(&self) -> String {
        let mut out = String::from("Matches:\n════════\n");
        for m in &self.matches {
            out.push_str(&format!("{} -> {} ({})\n", m.candidate, m.root, m.rule));
        }
        out
    }

    fn render_tsv(&self) -> String {
        self.matches
            .iter()
            .map(|m| format!("{}\t{}\t{}\n", m.candidate, m.root, m.rule))
            .collect()
    }

    fn summary(&self) -> &FitSummary {
        &self.summary
    }
}

/// Render a result in the format selected on the command line.
pub fn format_result<T: CommandOutput>(result: &T, args: &SynrootArgs) -> Result<String> {
    match args.output_format {
        OutputFormat::Human => {
            let mut out = result.render_human();
            if args.verbosity() > 1 {
                out.push('\n');
                out.push_str(&format_summary(result.summary()));
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            Ok(format!("{json}\n"))
        }
        OutputFormat::Tsv => Ok(result.render_tsv()),
    }
}

/// Output a result in the specified format.
pub fn output_result<T: CommandOutput>(result: &T, args: &SynrootArgs) -> Result<()> {
    print!("{}", format_result(result, args)?);
    Ok(())
}

fn format_summary(summary: &FitSummary) -> String {
    format!(
        "Input terms: {}\nVocabulary size: {}\nMatches: {}\nFit time: {}ms\n",
        summary.input_terms, summary.vocabulary_size, summary.matches, summary.duration_ms
    )
}
