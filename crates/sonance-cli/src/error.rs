//! Error types for the sonance CLI

use sonance::SonanceError;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Result type alias for CLI operations
pub(crate) type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// Bad flag value or unusable combination of flags
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Catalog or scaler file not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Catalog or scaler content that cannot be used
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Seed identifiers absent from the catalog
    #[error("Unknown seed(s): {}", .0.join(", "))]
    UnknownSeed(Vec<String>),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Engine error without a more specific mapping
    #[error("{0}")]
    Engine(SonanceError),
}

impl CliError {
    /// Get exit code for this error
    pub(crate) fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }

    pub(crate) fn code(&self) -> u8 {
        match self {
            Self::InvalidArgument(_) => 2,
            Self::FileNotFound(_) => 3,
            Self::InvalidData(_) => 4,
            Self::UnknownSeed(_) => 5,
            Self::Io(_) | Self::Engine(_) => 1,
        }
    }
}

impl From<SonanceError> for CliError {
    fn from(e: SonanceError) -> Self {
        match e {
            SonanceError::UnknownItem { ids } => Self::UnknownSeed(ids),
            SonanceError::InvalidArgument { .. } => Self::InvalidArgument(e.to_string()),
            SonanceError::DegenerateFeature { .. }
            | SonanceError::EmptyCatalog
            | SonanceError::DimensionMismatch { .. }
            | SonanceError::DuplicateItem { .. }
            | SonanceError::NonFiniteFeature { .. }
            | SonanceError::MissingColumn { .. }
            | SonanceError::Csv(_)
            | SonanceError::Serialization(_)
            | SonanceError::UnsupportedVersion { .. } => Self::InvalidData(e.to_string()),
            SonanceError::Io(io) => Self::Io(io),
            SonanceError::ZeroVector => Self::Engine(e),
        }
    }
}
