#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackMode {
    Paused,
    Running,
}

impl PlaybackMode {
    pub fn is_running(self) -> bool {
        self == PlaybackMode::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_running() {
        assert!(PlaybackMode::Running.is_running());
        assert!(!PlaybackMode::Paused.is_running());
    }
}
