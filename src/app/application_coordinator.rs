//! Application coordination for page interactions.
//!
//! Turns what the pages report back into state changes.

use crate::app::{AppState, ThemeCoordinator};
use crate::state::{HeartRateRange, Tab};

/// Interactions reported by the tab bar and pages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageInteraction {
    /// A tab bar entry was clicked
    TabSelected(Tab),
    /// The dark-mode switch on the profile page was flipped
    ThemeToggleRequested,
    /// The notifications switch on the profile page was flipped
    NotificationsToggled,
    /// The heart-rate chart range was changed on the health page
    HeartRateRangeSelected(HeartRateRange),
    /// The error banner was dismissed
    ErrorDismissed,
}

/// Coordinates state changes in response to UI interactions.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Applies one interaction. `now` is the egui input time in seconds.
    pub fn handle_interaction(state: &mut AppState, interaction: PageInteraction, now: f64) {
        match interaction {
            PageInteraction::TabSelected(tab) => {
                if state.navigation.select(tab, now) {
                    tracing::debug!(tab = tab.label(), "tab selected");
                }
            }
            PageInteraction::ThemeToggleRequested => ThemeCoordinator::toggle(state),
            PageInteraction::NotificationsToggled => state.pages.toggle_notifications(),
            PageInteraction::HeartRateRangeSelected(range) => {
                state.pages.set_heart_rate_range(range);
            }
            PageInteraction::ErrorDismissed => state.error_message = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_selection() {
        let mut state = AppState::default();
        ApplicationCoordinator::handle_interaction(&mut state, PageInteraction::TabSelected(Tab::Map), 1.0);
        assert_eq!(state.navigation.active_tab(), Tab::Map);
        assert!(state.navigation.is_transitioning(1.05));
    }

    #[test]
    fn test_page_controls() {
        let mut state = AppState::default();
        ApplicationCoordinator::handle_interaction(&mut state, PageInteraction::NotificationsToggled, 0.0);
        ApplicationCoordinator::handle_interaction(
            &mut state,
            PageInteraction::HeartRateRangeSelected(HeartRateRange::Week),
            0.0,
        );
        assert!(!state.pages.notifications_enabled());
        assert_eq!(state.pages.heart_rate_range(), HeartRateRange::Week);
    }

    #[test]
    fn test_error_dismissed() {
        let mut state = AppState::default();
        ApplicationCoordinator::handle_interaction(&mut state, PageInteraction::ThemeToggleRequested, 0.0);
        assert!(state.error_message.is_some());
        ApplicationCoordinator::handle_interaction(&mut state, PageInteraction::ErrorDismissed, 0.0);
        assert!(state.error_message.is_none());
    }
}
