pub mod keymap;
pub mod terminal;
pub mod terminal_guard;
pub mod theme;
pub mod timers;

pub use keymap::map_key;
pub use terminal::TuiManager;
pub use terminal_guard::TerminalGuard;
pub use timers::TimerQueue;
