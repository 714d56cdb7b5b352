//! Typed error types for termprint.

use std::time::SystemTimeError;

/// All errors produced by the termprint library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] termprint_core::Error),

    #[error(transparent)]
    SystemTime(#[from] SystemTimeError),

    #[error("{0}")]
    Config(String),

    #[error("{0}")]
    Input(String),
}

impl Error {
    /// Process exit code reported for this error.
    #[must_use]
    pub const fn exit_code(&self) -> exitcode::ExitCode {
        match self {
            Self::Io(_) => exitcode::IOERR,
            Self::Yaml(_) | Self::Config(_) | Self::Core(_) => exitcode::CONFIG,
            Self::Json(_) | Self::Input(_) => exitcode::DATAERR,
            Self::SystemTime(_) => exitcode::SOFTWARE,
        }
    }
}

/// A `Result` alias where the error type is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
