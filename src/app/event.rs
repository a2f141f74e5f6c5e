use crate::engine::timing::{Generation, TimerRequest};

/// Logical key names the controller understands.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Key {
    Quit,
    Toggle,
    Advance,
    SpeedUp,
    SpeedUpFast,
    SpeedDown,
    SpeedDownFast,
    /// Anything else, by its printable name.
    Other(String),
}

/// Events delivered to the controller, one at a time.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum AppEvent {
    Resize(u16),
    Key(Key),
    TimerFire(Generation),
}

/// What the runtime should do after handling an event.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Command {
    None,
    Schedule(TimerRequest),
    Quit,
}
