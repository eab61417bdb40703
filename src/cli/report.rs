//! Console reporting for the stripping run.
//!
//! Separate from the processing loop so output stays testable: every printer
//! has a `_to` variant taking a writer.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use super::run::RunSummary;
use crate::core::FileOutcome;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print one status line for a processed file.
pub fn report_file(path: &Path, outcome: &FileOutcome) {
    report_file_to(path, outcome, &mut io::stdout().lock());
}

pub fn report_file_to<W: Write>(path: &Path, outcome: &FileOutcome, writer: &mut W) {
    let line = match outcome {
        FileOutcome::Cleaned => format!("{} {}", SUCCESS_MARK.green(), path.display()),
        FileOutcome::Unchanged => format!("{} (unchanged)", path.display())
            .dimmed()
            .to_string(),
        FileOutcome::Failed(err) => {
            format!("{} {}: {}", FAILURE_MARK.red(), path.display(), err)
        }
    };
    let _ = writeln!(writer, "{}", line);
}

/// Print the final summary line with the count of modified files.
pub fn print_summary(summary: &RunSummary) {
    print_summary_to(summary, &mut io::stdout().lock());
}

pub fn print_summary_to<W: Write>(summary: &RunSummary, writer: &mut W) {
    let noun = if summary.scanned == 1 { "file" } else { "files" };
    let msg = if summary.cleaned == 0 {
        format!(
            "Checked {} source {} - nothing to clean",
            summary.scanned, noun
        )
    } else if summary.dry_run {
        format!(
            "Would clean {} of {} source {}",
            summary.cleaned, summary.scanned, noun
        )
    } else {
        format!(
            "Cleaned {} of {} source {}",
            summary.cleaned, summary.scanned, noun
        )
    };
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

/// Warn about files that could not be read or written back.
pub fn print_failure_warning(count: usize) {
    print_failure_warning_to(count, &mut io::stderr().lock());
}

pub fn print_failure_warning_to<W: Write>(count: usize, writer: &mut W) {
    if count > 0 {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be processed",
            "warning:".bold().yellow(),
            count
        );
    }
}
