//! Centralized application state for the PawTrack app.
//!
//! Composes focused state components. The theme lives in a [`ThemeScope`]
//! that stays empty until the first frame installs a manager; pages read it
//! through the scope and never hold the manager themselves.

use pawtrack::{AppConfig, ThemeScope};

use crate::state::{NavigationState, PageState};

/// Main application state composed of focused state components.
pub struct AppState {
    /// Active tab and page transition
    pub navigation: NavigationState,

    /// Theme consumption interface
    pub theme: ThemeScope,

    /// Session-only page controls
    pub pages: PageState,

    /// Loaded configuration
    pub config: AppConfig,

    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl AppState {
    /// Creates the state with an empty theme scope.
    pub fn new(config: AppConfig) -> Self {
        Self {
            navigation: NavigationState::new(),
            theme: ThemeScope::new(),
            pages: PageState::new(),
            config,
            error_message: None,
        }
    }
}
