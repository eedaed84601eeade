//! Error type definitions for the student lookup service
//!
//! Request-level failures fall into two buckets: validation problems the
//! caller can fix, and data availability problems the caller cannot. The
//! web layer maps each bucket to a status code and a public message; the
//! detailed cause is only ever logged.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed, absent or out-of-bounds request input
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// The record source could not be read or parsed
    #[error("Data unavailable: {0}")]
    DataUnavailable(#[from] SourceError),
}

/// Failures while producing the record table
#[derive(Error, Debug)]
pub enum SourceError {
    /// The data file is missing or unreadable
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data file could not be parsed as a delimited table
    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

impl AppError {
    /// Create a validation error with a custom message
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

impl SourceError {
    pub fn read<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn parse<P: Into<PathBuf>, M: Into<String>>(path: P, message: M) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message() {
        let err = AppError::validation("Query too long");
        assert!(matches!(&err, AppError::Validation { message } if message == "Query too long"));
    }

    #[test]
    fn test_source_error_converts_to_data_unavailable() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: AppError = SourceError::read("/srv/data.csv", io).into();

        assert!(matches!(err, AppError::DataUnavailable(SourceError::Read { .. })));
        assert!(err.to_string().contains("/srv/data.csv"));
    }
}
