/// Outcome of a CLI command: the exit code and an optional message for stderr.
#[derive(Debug)]
pub struct CmdExit {
    pub code: exitcode::ExitCode,
    pub message: Option<String>,
}

impl CmdExit {
    #[must_use]
    pub const fn ok() -> Self {
        Self {
            code: exitcode::OK,
            message: None,
        }
    }
}
