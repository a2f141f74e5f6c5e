use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReaderError {
    #[error("Failed to open {}: {source}", .path.display())]
    SourceOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading or rewinding an open source failed; the handle is unusable afterwards.
    #[error("Failed to read source: {0}")]
    SourceRead(#[source] io::Error),

    #[error("Failed to create log file {}: {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Terminal error: {0}")]
    Terminal(#[source] io::Error),

    #[error("{0}")]
    Usage(String),
}

impl ReaderError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ReaderError::Usage(_) => 2,
            _ => 1,
        }
    }
}
