// Pacing clock - WPM to tick period, generation-tagged timer requests

use std::fmt;
use std::time::Duration;

const NANOS_PER_MINUTE: u64 = 60_000_000_000;

/// Epoch tag carried by every scheduled timer fire.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Instruction for the runtime: deliver `TimerFire(tag)` after `after`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerRequest {
    pub tag: Generation,
    pub after: Duration,
}

/// Time between two words at `wpm`.
///
/// Integer nanosecond division, so sub-nanosecond remainders are dropped.
/// A zero rate is treated as 1 wpm.
pub fn period(wpm: u32) -> Duration {
    Duration::from_nanos(NANOS_PER_MINUTE / u64::from(wpm.max(1)))
}

#[derive(Debug, Default)]
pub struct PacingClock {
    generation: Generation,
}

impl PacingClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Invalidates every timer scheduled so far.
    pub fn bump(&mut self) -> Generation {
        self.generation = self.generation.next();
        self.generation
    }

    pub fn is_current(&self, tag: Generation) -> bool {
        tag == self.generation
    }

    /// Timer request for the next tick, tagged with the current generation.
    pub fn arm(&self, wpm: u32) -> TimerRequest {
        TimerRequest {
            tag: self.generation,
            after: period(wpm),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_period_250() {
        // 60s / 250 = 240ms
        assert_eq!(period(250), Duration::from_millis(240));
    }

    #[test]
    fn test_period_truncates_to_whole_nanoseconds() {
        // 60e9 / 7 = 8571428571.43ns
        assert_eq!(period(7), Duration::from_nanos(8_571_428_571));
    }

    #[test]
    fn test_period_zero_wpm_is_one_minute() {
        assert_eq!(period(0), Duration::from_secs(60));
    }

    #[test]
    fn test_bump_invalidates_previous_tag() {
        let mut clock = PacingClock::new();
        let old = clock.arm(250).tag;
        assert!(clock.is_current(old));
        clock.bump();
        assert!(!clock.is_current(old));
        assert!(clock.is_current(clock.arm(250).tag));
    }

    #[test]
    fn test_arm_uses_current_rate() {
        let clock = PacingClock::new();
        assert_eq!(clock.arm(600).after, Duration::from_millis(100));
        assert_eq!(clock.arm(300).after, Duration::from_millis(200));
    }

    proptest! {
        #[test]
        fn period_is_positive(wpm in 1u32..=u32::MAX) {
            prop_assert!(period(wpm) > Duration::ZERO);
        }

        // Strictly decreasing holds as long as the nanosecond quantization can
        // still tell neighbouring rates apart.
        #[test]
        fn period_strictly_decreases(wpm in 1u32..200_000) {
            prop_assert!(period(wpm + 1) < period(wpm));
        }
    }
}
