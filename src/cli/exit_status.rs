use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): The run completed. Per-file read/write failures are
///   reported but do not change the exit code.
/// - `Error` (2): The run could not start (root directory missing, broken
///   config file).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// The run completed, regardless of individual per-file failures.
    Success,
    /// The run could not start due to an internal error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
