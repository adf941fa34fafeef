use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning one solver log into one table row
///
/// The short-log case is not an error: it is reported through
/// [`crate::Outcome::ShortLog`].
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A fixed-position field points past the end of the log
    #[error(
        "malformed log {}: field '{field}' expects line {line} but the log has {count} lines",
        .path.display()
    )]
    MissingLine {
        path: PathBuf,
        field: &'static str,
        line: usize,
        count: usize,
    },

    /// The selected line ends before the field's character offset
    #[error(
        "malformed log {}: line {line} is too short for field '{field}' at offset {offset}",
        .path.display()
    )]
    LineTooShort {
        path: PathBuf,
        field: &'static str,
        line: usize,
        offset: usize,
    },

    /// No line carries the marker a required field is located by
    #[error(
        "malformed log {}: no line carries the '{marker}' marker for field '{field}'",
        .path.display()
    )]
    MissingMarker {
        path: PathBuf,
        field: &'static str,
        marker: &'static str,
    },

    #[error("failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write row to {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl ExtractError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        ExtractError::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// True for the malformed-input family. Those never delete the input.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            ExtractError::MissingLine { .. }
                | ExtractError::LineTooShort { .. }
                | ExtractError::MissingMarker { .. }
        )
    }
}
