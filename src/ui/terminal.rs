use crate::app::{App, AppEvent, Command};
use crate::engine::error::ReaderError;
use crate::ui::keymap::map_key;
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::theme::Theme;
use crate::ui::timers::TimerQueue;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, text::Line, widgets::Paragraph, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tracing::debug;

/// Poll interval while no timer is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    theme: Theme,
    // Dropped after `terminal`, restoring the screen last.
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, ReaderError> {
        let guard = TerminalGuard::new().map_err(ReaderError::Terminal)?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend).map_err(ReaderError::Terminal)?;

        Ok(TuiManager {
            terminal,
            theme: Theme::default(),
            _guard: guard,
        })
    }

    /// Feeds terminal and timer events to `app` one at a time until it asks to quit.
    pub fn run_event_loop(&mut self, app: &mut App) -> Result<(), ReaderError> {
        let mut timers = TimerQueue::new();

        let size = self.terminal.size().map_err(ReaderError::Terminal)?;
        if dispatch(app, &mut timers, AppEvent::Resize(size.width))? {
            return Ok(());
        }
        self.render_frame(app)?;

        loop {
            while let Some(tag) = timers.pop_due(Instant::now()) {
                if dispatch(app, &mut timers, AppEvent::TimerFire(tag))? {
                    return Ok(());
                }
                self.render_frame(app)?;
            }

            let timeout = timers
                .time_until_next(Instant::now())
                .unwrap_or(IDLE_POLL);
            if !event::poll(timeout).map_err(ReaderError::Terminal)? {
                continue;
            }

            let app_event = match event::read().map_err(ReaderError::Terminal)? {
                Event::Key(key) if key.kind == KeyEventKind::Press => AppEvent::Key(map_key(key)),
                Event::Resize(width, _) => AppEvent::Resize(width),
                _ => continue,
            };
            if dispatch(app, &mut timers, app_event)? {
                return Ok(());
            }
            self.render_frame(app)?;
        }
    }

    pub fn render_frame(&mut self, app: &App) -> Result<(), ReaderError> {
        let view = app.view();
        let theme = self.theme;

        self.terminal
            .draw(|frame| {
                let lines: Vec<Line> = view
                    .lines()
                    .enumerate()
                    .map(|(i, line)| Line::styled(line.to_string(), theme.line_style(i)))
                    .collect();
                frame.render_widget(Paragraph::new(lines).style(theme.screen()), frame.area());
            })
            .map_err(ReaderError::Terminal)?;

        Ok(())
    }
}

/// Hands one event to the controller. Returns true when it asked to quit.
fn dispatch(
    app: &mut App,
    timers: &mut TimerQueue,
    event: AppEvent,
) -> Result<bool, ReaderError> {
    match app.handle_event(event)? {
        Command::Quit => return Ok(true),
        Command::Schedule(request) => {
            timers.schedule(Instant::now(), request);
            debug!(
                tag = %request.tag,
                after = ?request.after,
                pending = timers.len(),
                "scheduled tick"
            );
        }
        Command::None => {}
    }
    Ok(false)
}
