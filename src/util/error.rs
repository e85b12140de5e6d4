// linesift - util/error.rs
//
// Typed error for every file operation the filter performs.
// No string-based error propagation: each variant carries the failing
// path and the underlying io::Error so the causal chain survives to main.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// The single error kind of a filter run.
///
/// Variants are split by the operation that failed so the diagnostic can
/// name both the path and what was being done to it.
#[derive(Debug)]
pub enum FileAccessError {
    /// The input file could not be opened for reading.
    OpenInput { path: PathBuf, source: io::Error },

    /// The output file could not be created or truncated.
    CreateOutput { path: PathBuf, source: io::Error },

    /// Reading a line from the input failed.
    Read {
        path: PathBuf,
        line_number: u64,
        source: io::Error,
    },

    /// Writing a retained line to the output failed.
    Write {
        path: PathBuf,
        line_number: u64,
        source: io::Error,
    },

    /// Flushing buffered output to disk failed.
    Flush { path: PathBuf, source: io::Error },
}

impl FileAccessError {
    /// Path of the file the failed operation was acting on.
    pub fn path(&self) -> &Path {
        match self {
            Self::OpenInput { path, .. }
            | Self::CreateOutput { path, .. }
            | Self::Read { path, .. }
            | Self::Write { path, .. }
            | Self::Flush { path, .. } => path,
        }
    }
}

impl fmt::Display for FileAccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenInput { path, source } => {
                write!(
                    f,
                    "Cannot open input '{}' for reading: {source}",
                    path.display()
                )
            }
            Self::CreateOutput { path, source } => {
                write!(
                    f,
                    "Cannot create output '{}' for writing: {source}",
                    path.display()
                )
            }
            Self::Read {
                path,
                line_number,
                source,
            } => write!(
                f,
                "'{}' line {line_number}: read failed: {source}",
                path.display()
            ),
            Self::Write {
                path,
                line_number,
                source,
            } => write!(
                f,
                "'{}': write of input line {line_number} failed: {source}",
                path.display()
            ),
            Self::Flush { path, source } => {
                write!(f, "'{}': flush failed: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for FileAccessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::OpenInput { source, .. }
            | Self::CreateOutput { source, .. }
            | Self::Read { source, .. }
            | Self::Write { source, .. }
            | Self::Flush { source, .. } => Some(source),
        }
    }
}

/// Convenience type alias for linesift results.
pub type Result<T> = std::result::Result<T, FileAccessError>;
