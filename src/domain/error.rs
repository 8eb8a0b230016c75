use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why an upward config search gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryStop {
    /// A `.git` marker was reached without a config at or below it.
    RepositoryRoot,
    /// No `.git` marker exists above the start directory, so only the
    /// start directory itself was searched.
    NoRepository,
}

impl fmt::Display for DiscoveryStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscoveryStop::RepositoryRoot => f.write_str("reached the repository root"),
            DiscoveryStop::NoRepository => f.write_str("not inside a git repository"),
        }
    }
}

/// Library-wide error type for config resolution.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Explicit or discovered config file does not exist.
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Config content is not valid YAML or has the wrong shape.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Upward search ended without finding `.apibuilder/config`.
    #[error(
        "Could not find .apibuilder/config searching from {} up to {} ({})",
        .start.display(),
        .stopped_at.display(),
        .reason
    )]
    DiscoveryExhausted { start: PathBuf, stopped_at: PathBuf, reason: DiscoveryStop },

    /// Rendering the config as JSON failed.
    #[error("Failed to serialize output: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn parse_error<W: Into<String>, D: fmt::Display>(what: W, details: D) -> Self {
        AppError::ParseError { what: what.into(), details: details.to_string() }
    }

    /// Provide an `io::ErrorKind`-like view for callers that classify errors that way.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::NotFound(_) | AppError::DiscoveryExhausted { .. } => io::ErrorKind::NotFound,
            AppError::ParseError { .. } => io::ErrorKind::InvalidData,
            AppError::Serialization(_) => io::ErrorKind::Other,
        }
    }

    /// Process exit status the CLI uses for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::DiscoveryExhausted { .. } => 2,
            _ => 1,
        }
    }
}
