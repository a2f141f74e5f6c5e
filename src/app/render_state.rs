use super::app::App;
use super::mode::PlaybackMode;
use std::fmt;
use unicode_width::UnicodeWidthStr;

/// Snapshot of everything the reader screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderState {
    pub title: String,
    pub word: String,
    pub padding: usize,
    pub mode: PlaybackMode,
    pub wpm: u32,
    /// Present only when diagnostics are enabled.
    pub message: Option<String>,
}

/// Left padding that centers `word` in a viewport `width` columns wide.
/// Halves are rounded down on both sides, so odd widths sit one column left.
pub fn center_padding(width: u16, word: &str) -> usize {
    (usize::from(width) / 2).saturating_sub(word.width() / 2)
}

impl RenderState {
    pub fn from_app(app: &App) -> Self {
        let word = app.current_word().to_string();
        Self {
            title: app.source_name().to_string(),
            padding: center_padding(app.width(), &word),
            word,
            mode: app.mode(),
            wpm: app.wpm(),
            message: app
                .config()
                .show_diagnostics
                .then(|| app.message().to_string()),
        }
    }

    pub fn status_line(&self) -> String {
        match self.mode {
            PlaybackMode::Paused => format!("Paused (Space to resume at {} wpm)", self.wpm),
            PlaybackMode::Running => format!("Playing at {} wpm (Space to pause)", self.wpm),
        }
    }
}

impl fmt::Display for RenderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reading {}\n\n{:pad$}{}\n\n{}",
            self.title,
            "",
            self.word,
            self.status_line(),
            pad = self.padding
        )?;
        if let Some(message) = &self.message {
            write!(f, "\n{}", message)?;
        }
        Ok(())
    }
}
