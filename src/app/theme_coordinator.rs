//! Theme initialization and persistence coordination.
//!
//! Builds the theme manager from the host capabilities once egui can report
//! the system color scheme, and installs it into the application's scope.

use pawtrack::{
    AppConfig, EguiRootStyler, EguiSystemSignal, JsonFilePreferenceStore, ThemeCapabilities,
    ThemeError, ThemePalette, ThemePreferenceManager,
};

use crate::app::AppState;

/// Coordinates theme initialization and access from the pages.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Installs the theme manager on the first frame. Later calls do nothing,
    /// so the system signal is only ever read once.
    pub fn ensure_initialized(ctx: &egui::Context, state: &mut AppState) {
        if state.theme.is_active() {
            return;
        }

        let capabilities = Self::capabilities(ctx, &state.config);
        let manager =
            ThemePreferenceManager::initialize(state.config.theme_options(), capabilities);
        if !manager.is_persistent() {
            tracing::info!("theme preference will not survive a restart");
        }
        state.theme.provide(manager);
    }

    /// Store from the configured path, system signal from egui, and the egui
    /// context as render root.
    fn capabilities(ctx: &egui::Context, config: &AppConfig) -> ThemeCapabilities {
        let mut capabilities = ThemeCapabilities::new(EguiRootStyler::new(ctx.clone()))
            .with_system_signal(EguiSystemSignal::capture(ctx));

        match config.preferences_path() {
            Some(path) => {
                tracing::debug!(path = %path.display(), "using preference store");
                capabilities = capabilities.with_store(JsonFilePreferenceStore::new(path));
            }
            None => tracing::warn!("no config directory; theme preference is session-only"),
        }
        capabilities
    }

    /// Palette for the current frame.
    pub fn palette(state: &AppState) -> Result<ThemePalette, ThemeError> {
        state.theme.palette()
    }

    /// Flips the theme, recording a usage error for display.
    pub fn toggle(state: &mut AppState) {
        match state.theme.toggle_theme() {
            Ok(mode) => tracing::debug!(theme = %mode, "theme toggled"),
            Err(err) => {
                tracing::error!("{err}");
                state.error_message = Some(err.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pawtrack::{ThemeMode, THEME_STORAGE_KEY};
    use pawtrack::PreferenceStore;

    fn state_with_store(dir: &tempfile::TempDir) -> AppState {
        AppState::new(AppConfig {
            preferences_path: Some(dir.path().join("preferences.json")),
            ..AppConfig::default()
        })
    }

    #[test]
    fn test_toggle_before_initialization_reports_usage_error() {
        let mut state = AppState::default();
        ThemeCoordinator::toggle(&mut state);
        assert_eq!(
            state.error_message.as_deref(),
            Some("preference accessed outside provider scope")
        );
        assert!(!state.theme.is_active());
    }

    #[test]
    fn test_initialization_persists_and_toggle_updates_store() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = egui::Context::default();
        let mut state = state_with_store(&dir);

        ThemeCoordinator::ensure_initialized(&ctx, &mut state);
        let initial = state.theme.theme().unwrap();

        ThemeCoordinator::toggle(&mut state);
        assert_eq!(state.theme.theme().unwrap(), initial.opposite());
        assert_eq!(ctx.style().visuals.dark_mode, initial.opposite().is_dark());

        let store = JsonFilePreferenceStore::new(dir.path().join("preferences.json"));
        assert_eq!(
            store.get(THEME_STORAGE_KEY).unwrap().as_deref(),
            Some(initial.opposite().as_str())
        );
    }

    #[test]
    fn test_second_initialization_keeps_manager() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = egui::Context::default();
        let mut state = state_with_store(&dir);

        ThemeCoordinator::ensure_initialized(&ctx, &mut state);
        state.theme.set_theme(ThemeMode::Dark).unwrap();
        ThemeCoordinator::ensure_initialized(&ctx, &mut state);

        assert_eq!(state.theme.theme(), Ok(ThemeMode::Dark));
    }

    #[test]
    fn test_palette_requires_scope() {
        let state = AppState::default();
        assert_eq!(ThemeCoordinator::palette(&state), Err(ThemeError::OutsideScope));
    }
}
