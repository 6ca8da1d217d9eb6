//! Session-only page controls.
//!
//! None of this is persisted; it resets on every launch.

/// Range shown by the heart-rate chart on the health page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeartRateRange {
    #[default]
    Day,
    Week,
}

impl HeartRateRange {
    pub fn label(self) -> &'static str {
        match self {
            HeartRateRange::Day => "24h",
            HeartRateRange::Week => "7j",
        }
    }
}

/// Local controls of individual pages.
#[derive(Debug, Clone)]
pub struct PageState {
    /// Heart-rate chart range on the health page
    heart_rate_range: HeartRateRange,
    /// Notifications switch on the profile page
    notifications_enabled: bool,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

impl PageState {
    pub fn new() -> Self {
        Self {
            heart_rate_range: HeartRateRange::Day,
            notifications_enabled: true,
        }
    }

    pub fn heart_rate_range(&self) -> HeartRateRange {
        self.heart_rate_range
    }

    pub fn set_heart_rate_range(&mut self, range: HeartRateRange) {
        self.heart_rate_range = range;
    }

    pub fn notifications_enabled(&self) -> bool {
        self.notifications_enabled
    }

    pub fn toggle_notifications(&mut self) {
        self.notifications_enabled = !self.notifications_enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = PageState::new();
        assert_eq!(state.heart_rate_range(), HeartRateRange::Day);
        assert!(state.notifications_enabled());
    }

    #[test]
    fn test_toggle_notifications() {
        let mut state = PageState::new();
        state.toggle_notifications();
        assert!(!state.notifications_enabled());
        state.toggle_notifications();
        assert!(state.notifications_enabled());
    }
}
