use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): Run completed, including runs that removed nothing
/// - `Error` (1): Run failed (unreadable or malformed document, write failure)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Run completed; zero removals still count as success.
    Success,
    /// Run failed due to an error (missing file, parse error, write error).
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(1),
        }
    }
}
