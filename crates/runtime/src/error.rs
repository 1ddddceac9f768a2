//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from rule loading, snapshot I/O, and the pipeline so the
//! client can report them with consistent context.
use std::path::PathBuf;

use kye_core::{ErrorSeverity, PatchError, PatchFailure};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Patch(#[from] PatchError),

    /// Rule data could not be loaded; the message names the file.
    #[error(transparent)]
    Content(#[from] anyhow::Error),

    #[error("I/O error on {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no load order snapshot configured; set KYE_LOAD_ORDER")]
    MissingLoadOrder,
}

impl RuntimeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}

impl PatchFailure for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::Patch(err) => err.severity(),
            RuntimeError::MissingLoadOrder => ErrorSeverity::Validation,
            RuntimeError::Content(_) | RuntimeError::Io { .. } | RuntimeError::Json { .. } => {
                ErrorSeverity::Fatal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::Patch(err) => err.error_code(),
            RuntimeError::Content(_) => "RUNTIME_CONTENT",
            RuntimeError::Io { .. } => "RUNTIME_IO",
            RuntimeError::Json { .. } => "RUNTIME_JSON",
            RuntimeError::MissingLoadOrder => "RUNTIME_MISSING_LOAD_ORDER",
        }
    }
}
