//! Pre-flight checks for input locations.
//!
//! The CLI validates that each input path points at a reachable regular
//! file before constructing an operation, so a mistyped path is reported
//! without creating an output file. Whether the file actually parses as a
//! PDF is decided later, when the operation opens it.

use std::path::Path;

use crate::error::{CombineError, Result};

/// Validates input locations before a combine is started.
#[derive(Debug, Default)]
pub struct Validator;

impl Validator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self
    }

    /// Check that `path` exists and is a regular file.
    ///
    /// # Errors
    ///
    /// Returns [`CombineError::OpenFailed`] for the path otherwise.
    pub fn validate_input_file(&self, path: &Path) -> Result<()> {
        let metadata = std::fs::metadata(path).map_err(|_| CombineError::open_failed(path))?;
        if !metadata.is_file() {
            return Err(CombineError::open_failed(path));
        }
        Ok(())
    }
}
