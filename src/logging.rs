//! Trace logging to a file.
//!
//! The terminal belongs to the reader screen, so log output never goes to
//! stdout or stderr. Without a log file no subscriber is installed and every
//! event is discarded.

use crate::engine::error::ReaderError;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;

pub fn init_file_logging(path: &Path) -> Result<(), ReaderError> {
    let file = File::create(path).map_err(|source| ReaderError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;

    // A subscriber may already be installed (tests); keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(Level::DEBUG)
        .try_init();

    Ok(())
}
