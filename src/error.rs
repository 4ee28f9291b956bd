//! Error types
//!
//! Input failures (`ParseError`, `ExtractError`, I/O) are scoped to a single
//! corpus file and wrapped in `FileError`, which the corpus walker counts and
//! skips. Output failures (`CheckpointError`) abort the walk.

use std::path::PathBuf;
use thiserror::Error;

/// Error while parsing one XML document
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed markup: {message}")]
    MalformedMarkup { message: String },

    #[error("<{element}> is missing required attribute {attribute}")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    #[error("<{element}> has invalid {attribute} value {value:?}")]
    InvalidAttribute {
        element: &'static str,
        attribute: &'static str,
        value: String,
    },
}

impl From<xml::reader::Error> for ParseError {
    fn from(err: xml::reader::Error) -> Self {
        ParseError::MalformedMarkup {
            message: err.to_string(),
        }
    }
}

/// Error while resolving governors within a parsed document
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// `sentence` and `position` are 1-based
    #[error(
        "sentence {sentence}, word {position}: governor {governor} is outside a sentence of {len} words"
    )]
    GovernorOutOfRange {
        sentence: usize,
        position: usize,
        governor: usize,
        len: usize,
    },
}

/// The four ways a corpus file can fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    Io,
    MalformedMarkup,
    MissingAttribute,
    IndexOutOfRange,
}

impl FailureKind {
    pub const ALL: [FailureKind; 4] = [
        FailureKind::Io,
        FailureKind::MalformedMarkup,
        FailureKind::MissingAttribute,
        FailureKind::IndexOutOfRange,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FailureKind::Io => "io",
            FailureKind::MalformedMarkup => "malformed markup",
            FailureKind::MissingAttribute => "missing attribute",
            FailureKind::IndexOutOfRange => "index out of range",
        }
    }
}

/// Failure of a single corpus file. The file contributes no rows.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("{}: {source}", .path.display())]
    Extract {
        path: PathBuf,
        #[source]
        source: ExtractError,
    },
}

impl FileError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            FileError::Io { path, .. }
            | FileError::Parse { path, .. }
            | FileError::Extract { path, .. } => path,
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            FileError::Io { .. } => FailureKind::Io,
            FileError::Parse {
                source: ParseError::MalformedMarkup { .. },
                ..
            } => FailureKind::MalformedMarkup,
            FileError::Parse { .. } => FailureKind::MissingAttribute,
            FileError::Extract { .. } => FailureKind::IndexOutOfRange,
        }
    }
}

/// Error while writing a checkpoint file
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("failed to write checkpoint {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write checkpoint {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_kind_mapping() {
        let path = PathBuf::from("a.xml");

        let io = FileError::Io {
            path: path.clone(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(io.kind(), FailureKind::Io);

        let markup = FileError::Parse {
            path: path.clone(),
            source: ParseError::MalformedMarkup {
                message: "bad".to_string(),
            },
        };
        assert_eq!(markup.kind(), FailureKind::MalformedMarkup);

        let missing = FileError::Parse {
            path: path.clone(),
            source: ParseError::MissingAttribute {
                element: "W",
                attribute: "DOM",
            },
        };
        assert_eq!(missing.kind(), FailureKind::MissingAttribute);

        let invalid = FileError::Parse {
            path: path.clone(),
            source: ParseError::InvalidAttribute {
                element: "W",
                attribute: "ID",
                value: "x".to_string(),
            },
        };
        assert_eq!(invalid.kind(), FailureKind::MissingAttribute);

        let range = FileError::Extract {
            path,
            source: ExtractError::GovernorOutOfRange {
                sentence: 1,
                position: 2,
                governor: 9,
                len: 2,
            },
        };
        assert_eq!(range.kind(), FailureKind::IndexOutOfRange);
    }

    #[test]
    fn test_file_error_names_path() {
        let err = FileError::Parse {
            path: PathBuf::from("corpus/news/a.tgt"),
            source: ParseError::MissingAttribute {
                element: "W",
                attribute: "DOM",
            },
        };
        let message = err.to_string();
        assert!(message.starts_with("corpus/news/a.tgt: "));
        assert!(message.contains("DOM"));
        assert_eq!(err.path(), std::path::Path::new("corpus/news/a.tgt"));
    }
}
