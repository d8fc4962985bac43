use anyhow::{Context, Result};

use super::args::Arguments;
use crate::{resources::ResourceDocument, scanner};

/// Result of one scrub run, consumed by the report printer.
pub struct RunSummary {
    /// Number of project files whose contents were scanned.
    pub files_scanned: usize,
    /// Number of paths skipped because they could not be read.
    pub files_skipped: usize,
    /// Sorted unique identifiers referenced under the project root.
    pub references: Vec<String>,
    /// Number of entries in the document before pruning.
    pub entries_total: usize,
    /// Display names of removed entries, in document order.
    pub removed: Vec<String>,
    pub is_dry_run: bool,
    pub strings_path: String,
}

impl RunSummary {
    pub fn kept(&self) -> usize {
        self.entries_total - self.removed.len()
    }
}

/// Scan the project tree, then prune and rewrite the resource document.
///
/// The scan fully completes before pruning begins; per-file read errors
/// are swallowed by the scanner, while parse and write errors propagate
/// and abort the run.
pub fn run(args: &Arguments) -> Result<RunSummary> {
    let scan = scanner::scan_references(&args.project_root, args.verbose);

    if scan.files_skipped > 0 {
        eprintln!(
            "Warning: {} file(s) skipped due to read errors{}",
            scan.files_skipped,
            if args.verbose { "" } else { " (use -v for details)" }
        );
    }

    let mut doc = ResourceDocument::from_path(&args.strings_path)
        .with_context(|| format!("Failed to load {}", args.strings_path.display()))?;
    let entries_total = doc.entry_count();

    let removed = doc.prune(&scan.references);

    if !args.dry_run {
        doc.write_to_path(&args.strings_path)
            .with_context(|| format!("Failed to rewrite {}", args.strings_path.display()))?;
    }

    Ok(RunSummary {
        files_scanned: scan.files_scanned,
        files_skipped: scan.files_skipped,
        references: scan
            .references
            .sorted()
            .into_iter()
            .map(String::from)
            .collect(),
        entries_total,
        removed: removed
            .iter()
            .map(|entry| entry.name().unwrap_or("(unnamed)").to_string())
            .collect(),
        is_dry_run: args.dry_run,
        strings_path: args.strings_path.display().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    fn arguments(project: &std::path::Path, strings: &std::path::Path) -> Arguments {
        Arguments {
            project_root: project.to_path_buf(),
            strings_path: strings.to_path_buf(),
            dry_run: false,
            verbose: false,
        }
    }

    const STRINGS: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
        <resources>\n    \
        <string name=\"used\">Used</string>\n    \
        <string name=\"unused\">Unused</string>\n\
        </resources>\n";

    #[test]
    fn test_run_prunes_and_rewrites_in_place() {
        let dir = tempdir().unwrap();
        let project = dir.path().join("app");
        fs::create_dir(&project).unwrap();
        fs::write(project.join("layout.xml"), "@string/used").unwrap();
        let strings = dir.path().join("strings.xml");
        fs::write(&strings, STRINGS).unwrap();

        let summary = run(&arguments(&project, &strings)).unwrap();

        assert_eq!(summary.entries_total, 2);
        assert_eq!(summary.removed, vec!["unused".to_string()]);
        assert_eq!(summary.kept(), 1);
        assert_eq!(summary.references, vec!["used".to_string()]);

        let rewritten = fs::read_to_string(&strings).unwrap();
        assert!(rewritten.contains("name=\"used\""));
        assert!(!rewritten.contains("name=\"unused\""));
    }

    #[test]
    fn test_run_dry_run_does_not_touch_the_file() {
        let dir = tempdir().unwrap();
        let project = dir.path().join("app");
        fs::create_dir(&project).unwrap();
        let strings = dir.path().join("strings.xml");
        fs::write(&strings, STRINGS).unwrap();

        let mut args = arguments(&project, &strings);
        args.dry_run = true;
        let summary = run(&args).unwrap();

        assert_eq!(summary.removed.len(), 2);
        assert_eq!(fs::read_to_string(&strings).unwrap(), STRINGS);
    }

    #[test]
    fn test_run_fails_on_missing_document() {
        let dir = tempdir().unwrap();
        let strings = dir.path().join("missing.xml");

        let result = run(&arguments(dir.path(), &strings));

        assert!(result.is_err());
    }
}
