//! Error types for MAINTAINERS file parsing.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// An error that aborted a parse.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A line contains spaces but matches neither maintainer layout.
    #[error("malformed maintainer in {} at line {line_number}: {line}", .path.display())]
    Malformed {
        /// The file (or named source) being parsed.
        path: PathBuf,
        /// The line number (1-based).
        line_number: usize,
        /// The raw line, without its line terminator.
        line: String,
    },

    /// The input could not be opened or read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// Creates a malformed maintainer error.
    pub fn malformed(
        path: impl Into<PathBuf>,
        line_number: usize,
        line: impl Into<String>,
    ) -> Self {
        Self::Malformed {
            path: path.into(),
            line_number,
            line: line.into(),
        }
    }

    /// Returns true if this is a malformed maintainer error.
    pub fn is_malformed(&self) -> bool {
        matches!(self, ParseError::Malformed { .. })
    }

    /// The source path of a malformed line.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ParseError::Malformed { path, .. } => Some(path),
            ParseError::Io(_) => None,
        }
    }

    /// The raw text of a malformed line.
    pub fn line(&self) -> Option<&str> {
        match self {
            ParseError::Malformed { line, .. } => Some(line),
            ParseError::Io(_) => None,
        }
    }

    /// The 1-based number of a malformed line.
    pub fn line_number(&self) -> Option<usize> {
        match self {
            ParseError::Malformed { line_number, .. } => Some(*line_number),
            ParseError::Io(_) => None,
        }
    }
}
