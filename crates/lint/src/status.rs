use std::process::ExitCode;

/// How a run of `lint` ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Nothing to report.
    Success,
    /// Some problems were found.
    Failure,
    /// The run could not complete, or the arguments were invalid.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure | ExitStatus::Error => ExitCode::from(1),
        }
    }
}
