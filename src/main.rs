use flashread::app::App;
use flashread::cli::{open_source, parse_args, USAGE};
use flashread::engine::{PlaybackConfig, ReaderError};
use flashread::logging::init_file_logging;
use flashread::ui::TuiManager;
use std::io::{self, IsTerminal};

fn main() {
    if let Err(err) = run() {
        eprintln!("flashread: {}", err);
        if matches!(err, ReaderError::Usage(_)) {
            eprintln!("{}", USAGE);
        }
        std::process::exit(err.exit_code());
    }
}

fn run() -> Result<(), ReaderError> {
    let args = parse_args(std::env::args().skip(1))?;
    if args.help {
        println!("{}", USAGE);
        return Ok(());
    }

    if let Some(log) = &args.log {
        init_file_logging(log)?;
    }

    let source = open_source(args.path.as_deref(), io::stdin().is_terminal())?;
    tracing::info!(source = source.name(), seekable = source.is_seekable(), "opened source");

    let config = PlaybackConfig {
        show_diagnostics: args.debug,
        ..PlaybackConfig::default()
    };
    let mut app = App::new(source, config);

    // The terminal is restored when `tui` drops, before any error is printed.
    let mut tui = TuiManager::new()?;
    tui.run_event_loop(&mut app)
}
