//! Decomment - comment stripper for source trees
//!
//! Decomment is a CLI tool and library that removes `//` line comments and
//! `/* */` block comments from source files in place, while leaving string
//! and character literal contents untouched.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: The stripping engine (scanner, directory walk, file rewrite)

pub mod cli;
pub mod config;
pub mod core;
