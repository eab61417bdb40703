//! CLI argument definitions using clap.
//!
//! A single verb: scan a directory tree and strip comments from matching
//! files in place. Every option falls back to `.decommentrc.json` and then
//! to built-in defaults.

use std::path::PathBuf;

use clap::Parser;

use crate::core::StripMode;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Root directory to scan (overrides config file)
    pub root: Option<PathBuf>,

    /// Blank-line handling after stripping (overrides config file)
    #[arg(long, value_enum)]
    pub mode: Option<StripMode>,

    /// File extensions to process (overrides config file)
    /// Can be specified multiple times: --ext kt --ext java
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Report files that would change without rewriting them
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
