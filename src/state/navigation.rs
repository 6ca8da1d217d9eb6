//! Tab navigation state.
//!
//! Tracks the active tab and when it last changed, so the page area can fade
//! and slide the new page in.

/// Duration of the page transition after a tab change, in seconds.
pub const PAGE_TRANSITION_SECS: f64 = 0.2;

/// Horizontal distance, in points, the new page slides in from.
pub const PAGE_SLIDE_DISTANCE: f32 = 20.0;

/// The five top-level pages, in tab bar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Health,
    Behavior,
    Map,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Dashboard, Tab::Health, Tab::Behavior, Tab::Map, Tab::Profile];

    /// Label shown under the tab icon.
    pub fn label(self) -> &'static str {
        match self {
            Tab::Dashboard => "Accueil",
            Tab::Health => "Santé",
            Tab::Behavior => "Comportement",
            Tab::Map => "Carte",
            Tab::Profile => "Profil",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tab::Dashboard => "🏠",
            Tab::Health => "❤",
            Tab::Behavior => "🧠",
            Tab::Map => "📍",
            Tab::Profile => "👤",
        }
    }
}

/// State related to which page is shown.
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    /// Currently active tab
    active_tab: Tab,
    /// Input time (seconds) of the last tab change, `None` before any change
    changed_at: Option<f64>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Switches to `tab` at input time `now`. Returns false when `tab` was
    /// already active, in which case no transition restarts.
    pub fn select(&mut self, tab: Tab, now: f64) -> bool {
        if tab == self.active_tab {
            return false;
        }
        self.active_tab = tab;
        self.changed_at = Some(now);
        true
    }

    /// Opacity of the page area at input time `now`, eased in over
    /// [`PAGE_TRANSITION_SECS`].
    pub fn page_opacity(&self, now: f64) -> f32 {
        let Some(changed_at) = self.changed_at else {
            return 1.0;
        };
        let t = ((now - changed_at) / PAGE_TRANSITION_SECS).clamp(0.0, 1.0);
        ease_in_out(t as f32)
    }

    /// Rightward offset of the page area at input time `now`. Follows the
    /// same easing as the opacity and reaches zero with it.
    pub fn page_offset(&self, now: f64) -> f32 {
        (1.0 - self.page_opacity(now)) * PAGE_SLIDE_DISTANCE
    }

    pub fn is_transitioning(&self, now: f64) -> bool {
        self.page_opacity(now) < 1.0
    }
}

/// Cubic ease-in-out on `[0, 1]`.
fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_dashboard_fully_visible() {
        let nav = NavigationState::new();
        assert_eq!(nav.active_tab(), Tab::Dashboard);
        assert_eq!(nav.page_opacity(0.0), 1.0);
        assert_eq!(nav.page_offset(0.0), 0.0);
    }

    #[test]
    fn test_select_same_tab_is_noop() {
        let mut nav = NavigationState::new();
        assert!(!nav.select(Tab::Dashboard, 5.0));
        assert!(!nav.is_transitioning(5.0));
    }

    #[test]
    fn test_transition_fades_in() {
        let mut nav = NavigationState::new();
        assert!(nav.select(Tab::Health, 10.0));
        assert_eq!(nav.active_tab(), Tab::Health);
        assert_eq!(nav.page_opacity(10.0), 0.0);
        assert!((nav.page_opacity(10.1) - 0.5).abs() < 1e-4);
        assert_eq!(nav.page_opacity(10.25), 1.0);
        assert!(!nav.is_transitioning(11.0));
    }

    #[test]
    fn test_transition_slides_in_from_the_right() {
        let mut nav = NavigationState::new();
        nav.select(Tab::Map, 3.0);
        assert_eq!(nav.page_offset(3.0), PAGE_SLIDE_DISTANCE);
        assert!((nav.page_offset(3.1) - PAGE_SLIDE_DISTANCE / 2.0).abs() < 1e-2);
        assert_eq!(nav.page_offset(3.25), 0.0);
    }

    #[test]
    fn test_tab_order_and_labels() {
        let labels: Vec<_> = Tab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, ["Accueil", "Santé", "Comportement", "Carte", "Profil"]);
    }
}
