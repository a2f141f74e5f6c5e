// Playback configuration. There is no config file: every run starts from these
// defaults, with only the diagnostics line toggled from the command line.

/// What the advance key does while playback is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvancePolicy {
    /// Manual advance only works while paused (default).
    PausedOnly,
    /// Manual advance also skips ahead mid-playback.
    Always,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackConfig {
    /// Pace at startup, in words per minute (default 250)
    pub initial_wpm: u32,

    /// Lowest reachable pace (default 1)
    pub min_wpm: u32,

    /// Speed key increment (default 1)
    pub step: u32,

    /// Fast speed key increment (default 10)
    pub fast_step: u32,

    pub advance_policy: AdvancePolicy,

    /// Force a pause when speed-down hits the floor (default off)
    pub pause_at_floor: bool,

    /// Append the last status message below the speed line
    pub show_diagnostics: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            initial_wpm: 250,
            min_wpm: 1,
            step: 1,
            fast_step: 10,
            advance_policy: AdvancePolicy::PausedOnly,
            pause_at_floor: false,
            show_diagnostics: false,
        }
    }
}
