use std::path::PathBuf;
use thiserror::Error;

/// How a file was being opened when it failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    Read,
    Write,
}

impl std::fmt::Display for OpenMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OpenMode::Read => write!(f, "reading"),
            OpenMode::Write => write!(f, "writing"),
        }
    }
}

/// Error types for SBET conversion
#[derive(Debug, Error)]
pub enum SbetError {
    /// A required positional argument was not supplied
    #[error("Missing {0}")]
    ArgumentMissing(&'static str),

    /// Input or output path could not be opened
    #[error("Can't open {} for {mode}", path.display())]
    FileOpen {
        path: PathBuf,
        mode: OpenMode,
        #[source]
        source: std::io::Error,
    },

    /// I/O failure other than end-of-stream while reading a record
    #[error("Failed to read record {index}")]
    Read {
        index: u64,
        #[source]
        source: std::io::Error,
    },

    /// CSV serialization or output stream failure
    #[error("Failed to write CSV output")]
    Write(#[from] csv::Error),

    /// Other I/O errors (flush, into_inner)
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

impl SbetError {
    pub fn open_failed(path: impl Into<PathBuf>, mode: OpenMode, source: std::io::Error) -> Self {
        SbetError::FileOpen {
            path: path.into(),
            mode,
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SbetError>;
