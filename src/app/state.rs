use super::mode::PlaybackMode;
use crate::engine::timing::{Generation, PacingClock, TimerRequest};

/// Paused/running flag, pace and the timer generation.
#[derive(Debug)]
pub struct Transport {
    pub mode: PlaybackMode,
    pub wpm: u32,
    clock: PacingClock,
}

impl Transport {
    pub fn new(wpm: u32) -> Self {
        Self {
            mode: PlaybackMode::Paused,
            wpm: wpm.max(1),
            clock: PacingClock::new(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.mode.is_running()
    }

    pub fn generation(&self) -> Generation {
        self.clock.generation()
    }

    /// Starts playback under a fresh generation and arms the first tick.
    pub fn resume(&mut self) -> TimerRequest {
        self.mode = PlaybackMode::Running;
        self.clock.bump();
        self.clock.arm(self.wpm)
    }

    pub fn pause(&mut self) {
        self.mode = PlaybackMode::Paused;
    }

    /// Whether a fire tagged `tag` may advance playback.
    pub fn accepts(&self, tag: Generation) -> bool {
        self.is_running() && self.clock.is_current(tag)
    }

    /// Next tick at the current pace.
    pub fn rearm(&self) -> TimerRequest {
        self.clock.arm(self.wpm)
    }

    pub fn speed_up(&mut self, step: u32) {
        self.wpm = self.wpm.saturating_add(step);
    }

    /// Lowers the pace, never below `floor`. Returns true when the step would
    /// have gone below the floor and was clamped.
    pub fn slow_down(&mut self, step: u32, floor: u32) -> bool {
        let floor = floor.max(1);
        match self.wpm.checked_sub(step) {
            Some(wpm) if wpm >= floor => {
                self.wpm = wpm;
                false
            }
            _ => {
                self.wpm = floor;
                true
            }
        }
    }
}
