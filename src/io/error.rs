//! Error types for fixture generation operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all fixture generation operations
#[derive(Debug)]
pub enum FixtureError {
    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A required source image is absent
    MissingSource {
        /// Path that was expected to hold the source image
        path: PathBuf,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to encode a synthesized placeholder image
    ImageEncode {
        /// Path where the placeholder was being written
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// Numerical computation produced an invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::MissingSource { path } => {
                write!(f, "Source image not found: '{}'", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::ImageEncode { path, source } => {
                write!(
                    f,
                    "Failed to encode placeholder '{}': {source}",
                    path.display()
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for FixtureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::ImageEncode { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for fixture generation results
pub type Result<T> = std::result::Result<T, FixtureError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> FixtureError {
    FixtureError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> FixtureError {
    FixtureError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Create a file system error for a failed operation on a path
pub fn fs_error(operation: &'static str, path: &Path, source: std::io::Error) -> FixtureError {
    FixtureError::FileSystem {
        path: path.to_path_buf(),
        operation,
        source,
    }
}
