//! Content layer error types
//!
//! Errors raised while loading and validating the static fixture.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the content fixture
#[derive(Error, Debug)]
pub enum FixtureError {
    /// Fixture file could not be read
    #[error("Failed to read fixture {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    /// Fixture is not valid JSON of the expected shape
    #[error("Failed to parse fixture: {0}")]
    Parse(String),

    /// Fixture parsed but breaks a content invariant
    #[error("Invalid fixture: {0}")]
    Invalid(String),
}

impl From<serde_json::Error> for FixtureError {
    fn from(err: serde_json::Error) -> Self {
        FixtureError::Parse(err.to_string())
    }
}

/// Result type for fixture operations
pub type FixtureResult<T> = Result<T, FixtureError>;
