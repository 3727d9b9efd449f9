use std::process::ExitCode;

/// Exit status of an extraction run.
///
/// - `Success` (0): every locale file was written
/// - `Failure` (1): the run finished but some locale or input failed
/// - `Error` (2): the run was aborted (configuration error, parse error, unreadable input)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every locale file was written.
    Success,
    /// The run finished but some locale or input failed.
    Failure,
    /// The run was aborted before writing anything.
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
