//! Error types produced while reloading view parameters.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error returned when a reload fails.
///
/// A failed reload never touches the caller's [`DisplayState`](crate::DisplayState),
/// except for [`ReloadError::Report`], which is raised after the state was replaced.
#[derive(Debug, Error)]
pub enum ReloadError {
    /// Returned when the view data file is missing or cannot be read.
    #[error("unable to read view data file {}: {source}", .path.display())]
    FileNotFound {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// Returned when a data record does not have the expected shape.
    #[error("malformed record {record}: {source}")]
    MalformedRecord {
        /// One-based index of the data record in file order.
        record: usize,
        /// Description of what was wrong with the record.
        #[source]
        source: RecordError,
    },
    /// Returned when the coordinate rescale factor cannot be inverted.
    #[error("coordinate rescale factor must be finite and non-zero (received {0})")]
    InvalidRescale(f64),
    /// Returned when the summary report could not be written.
    #[error("failed to write reload report: {0}")]
    Report(#[source] io::Error),
}

impl ReloadError {
    /// Index of the failing record for [`ReloadError::MalformedRecord`].
    ///
    /// # Examples
    ///
    /// ```
    /// use femview::{ReloadError, RecordError};
    ///
    /// let error = ReloadError::MalformedRecord {
    ///     record: 17,
    ///     source: RecordError::Missing,
    /// };
    /// assert_eq!(error.record_index(), Some(17));
    /// ```
    #[must_use]
    pub fn record_index(&self) -> Option<usize> {
        match self {
            Self::MalformedRecord { record, .. } => Some(*record),
            _ => None,
        }
    }
}

/// Reason a single record was rejected.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    /// The file ended before the record (or its header) was found.
    #[error("record is missing")]
    Missing,
    /// The record has the wrong number of whitespace separated fields.
    #[error("expected {expected} fields, found {found}")]
    FieldCount {
        /// Number of fields in the record layout.
        expected: usize,
        /// Number of fields present on the line.
        found: usize,
    },
    /// A numeric field could not be parsed.
    #[error("field {field} is not a valid number: {token:?}")]
    InvalidField {
        /// Zero-based position of the field within the record.
        field: usize,
        /// Offending text.
        token: String,
    },
    /// The record label does not match the component expected at this position.
    #[error("expected label {expected:?}, found {found:?}")]
    LabelMismatch {
        /// Label required at this position.
        expected: String,
        /// Label found in the file.
        found: String,
    },
}
