//! Error types for scancombine.
//!
//! The combiner core can fail in exactly two ways, both detected before any
//! page is streamed: an input PDF cannot be opened, or the output PDF cannot
//! be created. Each kind carries the offending path so callers can tell the
//! user which location to fix. Cancellation is not an error, and deletion
//! failures while cleaning up a canceled run are deliberately swallowed.

use std::path::{Path, PathBuf};

/// Result type alias for scancombine operations.
pub type Result<T> = std::result::Result<T, CombineError>;

/// The ways a combine operation can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CombineError {
    /// An input PDF could not be opened as a valid document.
    ///
    /// The file may be missing, unreadable, encrypted, or not a PDF at all.
    /// Not retryable without user intervention.
    #[error("Could not open input PDF: {}", path.display())]
    OpenFailed {
        /// Path of the input that could not be opened.
        path: PathBuf,
    },

    /// The output PDF could not be created or persisted at its location.
    ///
    /// Typically a missing parent directory or insufficient permissions.
    /// Not retryable without user intervention.
    #[error("Could not create output PDF: {}", path.display())]
    CreateFailed {
        /// Path of the output that could not be created.
        path: PathBuf,
    },
}

impl CombineError {
    /// Create an OpenFailed error.
    pub fn open_failed(path: impl Into<PathBuf>) -> Self {
        Self::OpenFailed { path: path.into() }
    }

    /// Create a CreateFailed error.
    pub fn create_failed(path: impl Into<PathBuf>) -> Self {
        Self::CreateFailed { path: path.into() }
    }

    /// The location the error is about.
    pub fn path(&self) -> &Path {
        match self {
            Self::OpenFailed { path } | Self::CreateFailed { path } => path,
        }
    }

    /// Get the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::OpenFailed { .. } => 2,
            Self::CreateFailed { .. } => 5,
        }
    }
}
