//! Report formatting and printing utilities.
//!
//! Separate from core logic so the extraction engine can be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::run::RunResult;
use crate::core::MergeOutcome;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the result of a run to stdout, warnings to stderr.
pub fn print(result: &RunResult, verbose: bool) {
    print_parse_failures_to(result, verbose, &mut io::stderr().lock());
    print_to(result, verbose, &mut io::stdout().lock());
}

/// Print the per-locale lines and the summary to a custom writer.
pub fn print_to<W: Write>(result: &RunResult, verbose: bool, writer: &mut W) {
    for (locale, outcome) in &result.report.results {
        match outcome {
            Ok(outcome) => print_outcome(outcome, verbose, writer),
            Err(err) => {
                let _ = writeln!(
                    writer,
                    "{} {} {}",
                    FAILURE_MARK.red(),
                    locale.bold(),
                    err.to_string().red()
                );
            }
        }
    }

    print_summary(result, writer);
}

/// Print files skipped with `--keep-going`.
pub fn print_parse_failures_to<W: Write>(result: &RunResult, verbose: bool, writer: &mut W) {
    if result.parse_failures.is_empty() {
        return;
    }

    if verbose {
        for failure in &result.parse_failures {
            let _ = writeln!(
                writer,
                "{} {}: {}",
                "warning:".bold().yellow(),
                failure.path.display(),
                failure.error
            );
        }
    } else {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            result.parse_failures.len(),
            "-v".cyan()
        );
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_outcome<W: Write>(outcome: &MergeOutcome, verbose: bool, writer: &mut W) {
    let mut details = vec![format!("{} {}", outcome.total, plural(outcome.total, "key"))];
    if outcome.added > 0 {
        details.push(format!("{} added", outcome.added));
    }
    if !outcome.purged.is_empty() {
        details.push(format!("{} purged", outcome.purged.len()));
    }

    let _ = writeln!(
        writer,
        "{} {} {} ({})",
        SUCCESS_MARK.green(),
        "Wrote".green().bold(),
        outcome.path.display(),
        details.join(", ")
    );

    if verbose {
        for key in &outcome.purged {
            let _ = writeln!(writer, "    {} {}", "-".red(), key);
        }
    }
}

fn print_summary<W: Write>(result: &RunResult, writer: &mut W) {
    let total = result.report.results.len();
    let failed = result.report.failure_count();

    let _ = writeln!(writer);
    if failed == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Extracted {} {} from {} {} into {} locale {} in {}",
                result.key_count,
                plural(result.key_count, "key"),
                result.files_parsed,
                plural(result.files_parsed, "file"),
                total,
                plural(total, "file"),
                result.output_directory.display()
            )
            .green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "{} of {} locale {} could not be written",
                failed,
                total,
                plural(total, "file")
            )
            .red()
        );
    }
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
