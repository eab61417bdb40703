use std::path::PathBuf;

use anyhow::Result;

use super::{args::Arguments, report};
use crate::{
    config::Config,
    core::{FileOutcome, file_scanner::scan_files, process::process_file},
};

/// Per-run counts for the final summary line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub scanned: usize,
    pub cleaned: usize,
    pub unchanged: usize,
    pub failed: usize,
    pub dry_run: bool,
}

/// Run the stripper over a directory tree.
///
/// Fatal errors (missing root, broken config) are returned before any file
/// is touched; per-file failures are reported and counted but never abort
/// the walk.
pub fn run(args: Arguments) -> Result<RunSummary> {
    let config = Config::load()?;

    let root: PathBuf = args
        .root
        .unwrap_or_else(|| PathBuf::from(&config.source_root));
    if !root.is_dir() {
        anyhow::bail!("root directory not found: {}", root.display());
    }

    let mode = args.mode.unwrap_or(config.mode);
    let extensions = if args.extensions.is_empty() {
        config.extensions
    } else {
        args.extensions
    };

    let files = scan_files(&root, &extensions, &config.ignores, args.verbose);

    let mut summary = RunSummary {
        scanned: files.len(),
        dry_run: args.dry_run,
        ..Default::default()
    };

    for file in &files {
        let outcome = process_file(file, mode, args.dry_run);
        report::report_file(file, &outcome);
        match outcome {
            FileOutcome::Cleaned => summary.cleaned += 1,
            FileOutcome::Unchanged => summary.unchanged += 1,
            FileOutcome::Failed(_) => summary.failed += 1,
        }
    }

    report::print_summary(&summary);
    report::print_failure_warning(summary.failed);

    Ok(summary)
}
