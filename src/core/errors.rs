/*!
# Error System for csv-nest

Every failure of a conversion run maps to one `ConvertError` variant.
All of them are fatal: the run stops and nothing is written.
*/

use crate::document::PathError;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Conversion errors
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV has no data rows: found {rows} row(s), need a header and at least one record")]
    EmptyInput { rows: usize },

    #[error("Row {row}: `{key}` column is empty")]
    MissingKey { row: usize, key: String },

    #[error("Header column {column}: {source}")]
    InvalidHeader {
        column: usize,
        #[source]
        source: PathError,
    },

    #[error("Row {row}: {source}")]
    PathConflict {
        row: usize,
        #[source]
        source: PathError,
    },

    #[error("Row {row}: key `{key}` is reserved for document metadata")]
    ReservedKey { row: usize, key: String },

    #[error("Failed to serialize result document: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ConvertError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Short machine-friendly kind, used in log fields
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::Io { .. } => ErrorKind::Io,
            ConvertError::EmptyInput { .. } => ErrorKind::EmptyInput,
            ConvertError::MissingKey { .. } => ErrorKind::MissingKey,
            ConvertError::InvalidHeader { .. } => ErrorKind::InvalidHeader,
            ConvertError::PathConflict { .. } => ErrorKind::PathConflict,
            ConvertError::ReservedKey { .. } => ErrorKind::ReservedKey,
            ConvertError::Serialize(_) => ErrorKind::Serialize,
        }
    }

    /// 1-based CSV row the error points at, if any
    pub fn row(&self) -> Option<usize> {
        match self {
            ConvertError::InvalidHeader { .. } => Some(1),
            ConvertError::MissingKey { row, .. }
            | ConvertError::PathConflict { row, .. }
            | ConvertError::ReservedKey { row, .. } => Some(*row),
            _ => None,
        }
    }
}

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    EmptyInput,
    MissingKey,
    InvalidHeader,
    PathConflict,
    ReservedKey,
    Serialize,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Io => write!(f, "IO"),
            ErrorKind::EmptyInput => write!(f, "EMPTY_INPUT"),
            ErrorKind::MissingKey => write!(f, "MISSING_KEY"),
            ErrorKind::InvalidHeader => write!(f, "INVALID_HEADER"),
            ErrorKind::PathConflict => write!(f, "PATH_CONFLICT"),
            ErrorKind::ReservedKey => write!(f, "RESERVED_KEY"),
            ErrorKind::Serialize => write!(f, "SERIALIZE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_message_has_row() {
        let err = ConvertError::MissingKey {
            row: 3,
            key: "name".to_string(),
        };
        assert_eq!(err.to_string(), "Row 3: `name` column is empty");
        assert_eq!(err.row(), Some(3));
        assert_eq!(err.kind(), ErrorKind::MissingKey);
    }

    #[test]
    fn test_io_error_names_path() {
        let err = ConvertError::io(
            "missing.csv",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert!(err.to_string().contains("missing.csv"));
        assert_eq!(err.row(), None);
        assert_eq!(err.kind().to_string(), "IO");
    }

    #[test]
    fn test_invalid_header_points_at_header_row() {
        let err = ConvertError::InvalidHeader {
            column: 2,
            source: PathError::RootIndex {
                path: "0".to_string(),
                segment: "0".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "Header column 2: `0` starts with index 0, but a record is an object"
        );
        assert_eq!(err.row(), Some(1));
        assert_eq!(err.kind().to_string(), "INVALID_HEADER");
    }
}
