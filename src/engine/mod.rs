pub mod config;
pub mod error;
pub mod timing;

pub use config::{AdvancePolicy, PlaybackConfig};
pub use error::ReaderError;
pub use timing::{period, Generation, PacingClock, TimerRequest};
