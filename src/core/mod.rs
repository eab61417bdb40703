//! Core stripping engine: the lexical scanner, the directory walk, and the
//! per-file read/strip/rewrite step.

pub mod file_scanner;
pub mod process;
pub mod strip;

pub use process::FileOutcome;
pub use strip::StripMode;
