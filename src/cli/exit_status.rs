use std::process::ExitCode;

/// Exit status for the CLI, following common conventions for linter tools.
///
/// - `Success` (0): Scan completed, no annotated comments found
/// - `Failure` (1): Scan completed and found annotated comments
/// - `Error` (2): Scan failed (bad pattern, config error, unreadable file, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Scan completed, no annotated comments found.
    Success,
    /// Scan completed and found annotated comments.
    Failure,
    /// Scan failed (bad pattern, config error, unreadable file, etc.).
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
