//! CLI argument definitions using clap.
//!
//! Resweep has a single flat surface: the project tree to scan, the
//! strings.xml file to rewrite, and a couple of output-shaping flags.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Root directory of the project to scan for `@string/` references
    pub project_root: PathBuf,

    /// Path to the strings.xml file to rewrite in place
    pub strings_path: PathBuf,

    /// Report entries that would be removed without rewriting the file
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
