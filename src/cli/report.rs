//! Report formatting and printing utilities.
//!
//! Prints run summaries in a cargo-style voice. Separate from the run
//! logic so output can be exercised against an in-memory writer in tests.

use std::io::{self, Write};

use colored::Colorize;

use super::run::RunSummary;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

pub fn print(summary: &RunSummary, verbose: bool) {
    print_to(summary, verbose, &mut io::stdout().lock());
}

/// Print a run summary to a custom writer.
pub fn print_to<W: Write>(summary: &RunSummary, verbose: bool, writer: &mut W) {
    if verbose && !summary.references.is_empty() {
        let _ = writeln!(
            writer,
            "{} unique {} referenced under the project root:",
            summary.references.len(),
            if summary.references.len() == 1 {
                "identifier"
            } else {
                "identifiers"
            }
        );
        for id in &summary.references {
            let _ = writeln!(writer, "  - {}", id.dimmed());
        }
    }

    if summary.removed.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Scanned {} project {}, {} resource {} - no unused entries found",
                summary.files_scanned,
                if summary.files_scanned == 1 {
                    "file"
                } else {
                    "files"
                },
                summary.entries_total,
                if summary.entries_total == 1 {
                    "entry"
                } else {
                    "entries"
                },
            )
            .green()
        );
        return;
    }

    if summary.is_dry_run {
        let _ = writeln!(
            writer,
            "{} {} unused {} from {}:",
            "Would remove".yellow().bold(),
            summary.removed.len(),
            if summary.removed.len() == 1 {
                "entry"
            } else {
                "entries"
            },
            summary.strings_path
        );
        for name in &summary.removed {
            let _ = writeln!(writer, "  - {}", name);
        }
        let _ = writeln!(
            writer,
            "Run without {} to rewrite the file.",
            "--dry-run".cyan()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} unused {} from {} ({} kept).",
            "Removed".green().bold(),
            summary.removed.len(),
            if summary.removed.len() == 1 {
                "entry"
            } else {
                "entries"
            },
            summary.strings_path,
            summary.kept()
        );
        if verbose {
            for name in &summary.removed {
                let _ = writeln!(writer, "  - {}", name);
            }
        }
    }
}
