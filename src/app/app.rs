use super::event::{AppEvent, Command, Key};
use super::mode::PlaybackMode;
use super::render_state::RenderState;
use super::state::Transport;
use crate::engine::config::{AdvancePolicy, PlaybackConfig};
use crate::engine::error::ReaderError;
use crate::engine::timing::Generation;
use crate::reading::{Advance, Source, Tokenizer, END_OF_SOURCE};
use tracing::{debug, info};

/// The playback controller: owns every piece of reader state and is the only
/// thing that mutates it.
pub struct App {
    config: PlaybackConfig,
    tokenizer: Tokenizer,
    transport: Transport,
    width: u16,
    message: String,
}

impl App {
    pub fn new(source: Source, config: PlaybackConfig) -> Self {
        Self {
            transport: Transport::new(config.initial_wpm),
            tokenizer: Tokenizer::new(source),
            config,
            width: 0,
            message: String::new(),
        }
    }

    pub fn mode(&self) -> PlaybackMode {
        self.transport.mode
    }

    pub fn wpm(&self) -> u32 {
        self.transport.wpm
    }

    pub fn generation(&self) -> Generation {
        self.transport.generation()
    }

    pub fn current_word(&self) -> &str {
        self.tokenizer.current_word()
    }

    pub fn current_line(&self) -> &[String] {
        self.tokenizer.current_line()
    }

    pub fn cursor(&self) -> usize {
        self.tokenizer.cursor()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn source_name(&self) -> &str {
        self.tokenizer.source_name()
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    pub fn handle_event(&mut self, event: AppEvent) -> Result<Command, ReaderError> {
        match event {
            AppEvent::Resize(width) => {
                self.width = width;
                self.message = format!("width: {}", width);
                Ok(Command::None)
            }
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::TimerFire(tag) => self.handle_tick(tag),
        }
    }

    pub fn get_render_state(&self) -> RenderState {
        RenderState::from_app(self)
    }

    /// Display string for the current state.
    pub fn view(&self) -> String {
        self.get_render_state().to_string()
    }

    fn handle_key(&mut self, key: Key) -> Result<Command, ReaderError> {
        match key {
            Key::Quit => return Ok(Command::Quit),
            Key::Toggle => return Ok(self.toggle_pause()),
            Key::Advance => {
                if !self.transport.is_running()
                    || self.config.advance_policy == AdvancePolicy::Always
                {
                    self.advance()?;
                }
            }
            Key::SpeedUp => self.transport.speed_up(self.config.step),
            Key::SpeedUpFast => self.transport.speed_up(self.config.fast_step),
            Key::SpeedDown => self.slow_down(self.config.step),
            Key::SpeedDownFast => self.slow_down(self.config.fast_step),
            Key::Other(name) => self.message = name,
        }
        Ok(Command::None)
    }

    fn toggle_pause(&mut self) -> Command {
        match self.transport.mode {
            PlaybackMode::Running => {
                self.transport.pause();
                info!(wpm = self.transport.wpm, "paused");
                Command::None
            }
            PlaybackMode::Paused => {
                let request = self.transport.resume();
                info!(wpm = self.transport.wpm, generation = %request.tag, "resumed");
                Command::Schedule(request)
            }
        }
    }

    fn slow_down(&mut self, step: u32) {
        let clamped = self.transport.slow_down(step, self.config.min_wpm);
        if clamped && self.config.pause_at_floor && self.transport.is_running() {
            self.transport.pause();
            self.message = format!("Paused at minimum speed ({} wpm).", self.transport.wpm);
            info!(wpm = self.transport.wpm, "paused at speed floor");
        }
    }

    fn handle_tick(&mut self, tag: Generation) -> Result<Command, ReaderError> {
        if !self.transport.accepts(tag) {
            debug!(tag = %tag, current = %self.transport.generation(), "dropping stale timer");
            return Ok(Command::None);
        }

        self.advance()?;

        if self.transport.is_running() {
            Ok(Command::Schedule(self.transport.rearm()))
        } else {
            Ok(Command::None)
        }
    }

    fn advance(&mut self) -> Result<(), ReaderError> {
        match self.tokenizer.advance_word()? {
            Advance::Exhausted => {
                self.transport.pause();
                self.message = END_OF_SOURCE.to_string();
                info!(source = self.tokenizer.source_name(), "end of source");
            }
            Advance::Rewound => {
                debug!(source = self.tokenizer.source_name(), "rewound source");
            }
            Advance::Word | Advance::Line => {}
        }
        Ok(())
    }
}
