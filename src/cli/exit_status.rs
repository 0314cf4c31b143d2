use std::process::ExitCode;

use super::commands::CommandResult;

/// Process exit status of a tsling invocation.
///
/// - `Success` (0): nothing to report, or only warnings / a dry run
/// - `Failure` (1): `check` found errors, `--apply` skipped unparsable catalogs,
///   or `init` found an existing config
/// - `Error` (2): the command could not run (bad config, unreadable input, usage)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    /// Status for a command that ran to completion.
    pub fn of(result: &CommandResult) -> Self {
        if result.exit_on_errors && result.error_count > 0 {
            Self::Failure
        } else {
            Self::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(match status {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        })
    }
}
