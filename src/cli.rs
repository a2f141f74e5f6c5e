use crate::engine::error::ReaderError;
use crate::reading::Source;
use std::path::{Path, PathBuf};

pub const USAGE: &str = "\
Usage: flashread [--debug] [--log FILE] [PATH]

Shows PATH (or standard input) one word at a time.

Keys:
  space          pause / resume
  tab            next word (while paused)
  up / down      speed +1 / -1 wpm
  shift+up/down  speed +10 / -10 wpm (also page up / page down)
  q, esc, ctrl+c quit

Options:
  --debug        show the last status message below the speed line
  --log FILE     write a trace log to FILE
  -h, --help     print this help";

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Args {
    /// Text to read; standard input when absent.
    pub path: Option<PathBuf>,
    pub debug: bool,
    pub log: Option<PathBuf>,
    pub help: bool,
}

pub fn parse_args<I>(args: I) -> Result<Args, ReaderError>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => parsed.help = true,
            "--debug" => parsed.debug = true,
            "--log" => {
                let file = args
                    .next()
                    .ok_or_else(|| ReaderError::Usage("--log needs a file name".to_string()))?;
                parsed.log = Some(PathBuf::from(file));
            }
            flag if flag.starts_with('-') && flag != "-" => {
                return Err(ReaderError::Usage(format!("Unknown option: {}", flag)));
            }
            path => {
                if parsed.path.is_some() {
                    return Err(ReaderError::Usage(format!("Unexpected argument: {}", path)));
                }
                // "-" is the conventional name for standard input.
                if path != "-" {
                    parsed.path = Some(PathBuf::from(path));
                }
            }
        }
    }

    Ok(parsed)
}

/// Opens the text to read.
///
/// Standard input is refused when it is the terminal: the reader shares that
/// tty for keys, and raw mode would leave a line read blocked forever.
pub fn open_source(path: Option<&Path>, stdin_is_terminal: bool) -> Result<Source, ReaderError> {
    match path {
        Some(path) => Source::open(path),
        None if stdin_is_terminal => Err(ReaderError::Usage(
            "no PATH given and standard input is a terminal".to_string(),
        )),
        None => Ok(Source::stdin()),
    }
}
