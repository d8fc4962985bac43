//! Project-tree reference scanning.
//!
//! Walks a directory tree and collects every `@string/<name>` identifier
//! referenced anywhere under it, across all file types. Files that cannot
//! be read as UTF-8 text are skipped and counted; a single unreadable file
//! never aborts the scan.

use std::{collections::HashSet, fs, path::Path, sync::LazyLock};

use colored::Colorize;
use regex::Regex;
use walkdir::WalkDir;

/// Matches `@string/<identifier>` references in arbitrary file contents.
/// The identifier is one or more word characters (letters, digits, underscore).
static STRING_REF_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@string/(\w+)").unwrap());

/// Deduplicated set of resource identifiers referenced by a project.
#[derive(Debug, Default)]
pub struct ReferenceSet {
    ids: HashSet<String>,
}

impl ReferenceSet {
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Sorted view of the set, for deterministic listings.
    pub fn sorted(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.ids.iter().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    fn collect_from(&mut self, contents: &str) {
        for captures in STRING_REF_REGEX.captures_iter(contents) {
            if let Some(id) = captures.get(1)
                && !self.ids.contains(id.as_str())
            {
                self.ids.insert(id.as_str().to_string());
            }
        }
    }
}

impl<S: Into<String>> FromIterator<S> for ReferenceSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Result of scanning a project tree.
pub struct ScanOutcome {
    pub references: ReferenceSet,
    pub files_scanned: usize,
    pub files_skipped: usize,
}

/// Scan every file under `root` for `@string/` references.
///
/// Traversal order is not guaranteed and does not affect the resulting set.
/// Read failures (binary content, invalid UTF-8, permission errors) are
/// counted and, in verbose mode, reported on stderr.
pub fn scan_references(root: &Path, verbose: bool) -> ScanOutcome {
    let mut references = ReferenceSet::default();
    let mut files_scanned = 0;
    let mut files_skipped = 0;

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                files_skipped += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        match fs::read_to_string(entry.path()) {
            Ok(contents) => {
                references.collect_from(&contents);
                files_scanned += 1;
            }
            Err(e) => {
                files_skipped += 1;
                if verbose {
                    eprintln!(
                        "{} Cannot read {}: {}",
                        "warning:".bold().yellow(),
                        entry.path().display(),
                        e
                    );
                }
            }
        }
    }

    ScanOutcome {
        references,
        files_scanned,
        files_skipped,
    }
}
