//! Line-producing text sources.
//!
//! A source is either seekable (a file, which can be rewound to offset 0 and
//! therefore looped) or forward-only (standard input, pipes). The tokenizer
//! branches on the capability, not on the concrete reader type.

use crate::engine::error::ReaderError;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

/// Readers that can be rewound.
pub trait SeekRead: Read + Seek {}

impl<T: Read + Seek> SeekRead for T {}

pub enum Source {
    Seekable {
        name: String,
        reader: BufReader<Box<dyn SeekRead>>,
    },
    Forward {
        name: String,
        reader: Box<dyn BufRead>,
    },
}

impl Source {
    /// Opens `path` as a seekable, loopable source.
    pub fn open(path: &Path) -> Result<Self, ReaderError> {
        let open_error = |source| ReaderError::SourceOpen {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(open_error)?;
        // Directories open fine on Unix but fail on the first read.
        if file.metadata().map_err(open_error)?.is_dir() {
            return Err(open_error(io::Error::other("is a directory")));
        }
        Ok(Self::seekable(path.display().to_string(), file))
    }

    pub fn stdin() -> Self {
        Self::forward("standard input", BufReader::new(io::stdin()))
    }

    pub fn seekable(name: impl Into<String>, reader: impl Read + Seek + 'static) -> Self {
        let reader: Box<dyn SeekRead> = Box::new(reader);
        Source::Seekable {
            name: name.into(),
            reader: BufReader::new(reader),
        }
    }

    pub fn forward(name: impl Into<String>, reader: impl BufRead + 'static) -> Self {
        Source::Forward {
            name: name.into(),
            reader: Box::new(reader),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Source::Seekable { name, .. } | Source::Forward { name, .. } => name,
        }
    }

    pub fn is_seekable(&self) -> bool {
        matches!(self, Source::Seekable { .. })
    }

    /// Next line without its terminator, or `None` at end of input.
    pub fn next_line(&mut self) -> Result<Option<String>, ReaderError> {
        let reader: &mut dyn BufRead = match self {
            Source::Seekable { reader, .. } => reader,
            Source::Forward { reader, .. } => reader,
        };

        let mut buf = Vec::new();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(ReaderError::SourceRead)?;
        if read == 0 {
            return Ok(None);
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    /// Rewinds to the first line. Returns `false` for forward-only sources.
    pub fn rewind(&mut self) -> Result<bool, ReaderError> {
        match self {
            Source::Seekable { reader, .. } => {
                reader
                    .seek(SeekFrom::Start(0))
                    .map_err(ReaderError::SourceRead)?;
                Ok(true)
            }
            Source::Forward { .. } => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_forward_lines_strip_terminators() {
        let mut source = Source::forward("test", Cursor::new(b"one\r\ntwo\nthree".to_vec()));
        assert_eq!(source.next_line().unwrap().as_deref(), Some("one"));
        assert_eq!(source.next_line().unwrap().as_deref(), Some("two"));
        assert_eq!(source.next_line().unwrap().as_deref(), Some("three"));
        assert_eq!(source.next_line().unwrap(), None);
    }

    #[test]
    fn test_empty_line_is_preserved() {
        let mut source = Source::forward("test", Cursor::new(b"a\n\nb\n".to_vec()));
        assert_eq!(source.next_line().unwrap().as_deref(), Some("a"));
        assert_eq!(source.next_line().unwrap().as_deref(), Some(""));
        assert_eq!(source.next_line().unwrap().as_deref(), Some("b"));
        assert_eq!(source.next_line().unwrap(), None);
    }

    #[test]
    fn test_invalid_utf8_is_lossy() {
        let mut source = Source::forward("test", Cursor::new(vec![b'h', 0xff, b'i']));
        assert_eq!(source.next_line().unwrap().as_deref(), Some("h\u{fffd}i"));
    }

    #[test]
    fn test_seekable_rewinds() {
        let mut source = Source::seekable("test", Cursor::new(b"x y\n".to_vec()));
        assert!(source.is_seekable());
        assert_eq!(source.next_line().unwrap().as_deref(), Some("x y"));
        assert_eq!(source.next_line().unwrap(), None);
        assert!(source.rewind().unwrap());
        assert_eq!(source.next_line().unwrap().as_deref(), Some("x y"));
    }

    #[test]
    fn test_forward_cannot_rewind() {
        let mut source = Source::forward("test", Cursor::new(b"x\n".to_vec()));
        assert!(!source.is_seekable());
        assert!(!source.rewind().unwrap());
    }

    #[test]
    fn test_open_missing_file() {
        let result = Source::open(Path::new("nonexistent_file_12345.txt"));
        match result {
            Err(ReaderError::SourceOpen { path, .. }) => {
                assert_eq!(path, Path::new("nonexistent_file_12345.txt"))
            }
            _ => panic!("Expected SourceOpen error"),
        }
    }

    #[test]
    fn test_open_directory_fails_at_open() {
        let dir = tempfile::tempdir().unwrap();
        match Source::open(dir.path()) {
            Err(ReaderError::SourceOpen { path, .. }) => assert_eq!(path, dir.path()),
            _ => panic!("Expected SourceOpen error"),
        }
    }

    #[test]
    fn test_open_file_is_seekable() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"hello world\n").unwrap();

        let mut source = Source::open(file.path()).unwrap();
        assert!(source.is_seekable());
        assert_eq!(source.name(), file.path().display().to_string());
        assert_eq!(source.next_line().unwrap().as_deref(), Some("hello world"));
    }
}
