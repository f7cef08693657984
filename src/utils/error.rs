//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading and parsing the ping log
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Cannot read log file {}: {source}", .path.display())]
    MissingFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Row {row}: expected {expected} fields, found {found}")]
    FieldCount {
        row: u64,
        expected: usize,
        found: usize,
    },

    #[error("Row {row}: field '{field}' has invalid value {value:?}")]
    InvalidField {
        row: u64,
        field: &'static str,
        value: String,
    },

    #[error("CSV read failed: {0}")]
    Csv(#[from] csv::Error),
}

impl ParseError {
    /// True for the malformed-row variants (bad field value or field count)
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            ParseError::FieldCount { .. } | ParseError::InvalidField { .. }
        )
    }
}

/// Errors that can occur while aggregating entries
#[derive(Error, Debug, PartialEq)]
pub enum AggregateError {
    #[error(
        "Loss rate undefined for recipient '{recipient}' at {hops} hops: last entry has zero pings sent"
    )]
    Division { recipient: String, hops: u32 },
}

/// Errors that can occur during report output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_classification() {
        let bad_field = ParseError::InvalidField {
            row: 3,
            field: "hops",
            value: "x".to_string(),
        };
        let bad_count = ParseError::FieldCount {
            row: 2,
            expected: 6,
            found: 4,
        };
        let missing = ParseError::MissingFile {
            path: PathBuf::from("nope.csv"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };

        assert!(bad_field.is_format_error());
        assert!(bad_count.is_format_error());
        assert!(!missing.is_format_error());
    }

    #[test]
    fn test_messages_identify_culprit() {
        let err = ParseError::InvalidField {
            row: 7,
            field: "avg_latency",
            value: "fast".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Row 7"));
        assert!(msg.contains("avg_latency"));
        assert!(msg.contains("fast"));

        let err = AggregateError::Division {
            recipient: "alice".to_string(),
            hops: 2,
        };
        assert!(err.to_string().contains("'alice'"));
    }
}
