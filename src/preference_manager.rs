//! Theme preference manager.
//!
//! Owns the active [`ThemeMode`], resolves it once at start, and mirrors every
//! change into the render root and the persisted store.
//!
//! Initial resolution, first match wins:
//! 1. a value persisted under [`THEME_STORAGE_KEY`] that parses as a mode
//! 2. the host's dark-mode signal, when it is available and says dark
//! 3. the configured default
//!
//! A store that fails is dropped for the rest of the session; the theme keeps
//! working in memory and the caller never sees the failure.

use std::fmt;

use crate::error::ThemeError;
use crate::theme::{ThemeMode, ThemePalette};
use crate::traits::{PreferenceStore, RenderRootStyler, SystemThemeSignal};

/// Key under which the active mode is persisted.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Resolution settings, usually derived from [`crate::config::AppConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeOptions {
    pub default_theme: ThemeMode,
    pub follow_system_theme: bool,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            default_theme: ThemeMode::Light,
            follow_system_theme: true,
        }
    }
}

/// Which resolution step produced the initial mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    Persisted,
    System,
    Default,
}

/// The host capabilities a manager is built from.
pub struct ThemeCapabilities {
    pub store: Option<Box<dyn PreferenceStore>>,
    pub system_signal: Option<Box<dyn SystemThemeSignal>>,
    pub styler: Box<dyn RenderRootStyler>,
}

impl ThemeCapabilities {
    /// Capabilities with only a render root: no persistence, no system signal.
    pub fn new(styler: impl RenderRootStyler + 'static) -> Self {
        Self {
            store: None,
            system_signal: None,
            styler: Box::new(styler),
        }
    }

    pub fn with_store(mut self, store: impl PreferenceStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    pub fn with_system_signal(mut self, signal: impl SystemThemeSignal + 'static) -> Self {
        self.system_signal = Some(Box::new(signal));
        self
    }
}

/// Single source of truth for the active theme.
///
/// Only [`ThemePreferenceManager::initialize`] constructs one, so a manager
/// always holds a resolved mode that is already applied and persisted.
pub struct ThemePreferenceManager {
    theme: ThemeMode,
    source: ThemeSource,
    store: Option<Box<dyn PreferenceStore>>,
    styler: Box<dyn RenderRootStyler>,
}

impl fmt::Debug for ThemePreferenceManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemePreferenceManager")
            .field("theme", &self.theme)
            .field("source", &self.source)
            .field("persistent", &self.store.is_some())
            .finish_non_exhaustive()
    }
}

impl ThemePreferenceManager {
    /// Resolves the initial mode and runs the first synchronization.
    ///
    /// The system signal is read here and nowhere else.
    pub fn initialize(options: ThemeOptions, capabilities: ThemeCapabilities) -> Self {
        let ThemeCapabilities {
            mut store,
            system_signal,
            styler,
        } = capabilities;

        let signal = if options.follow_system_theme {
            system_signal.as_deref()
        } else {
            None
        };
        let (theme, source) = resolve_initial(&mut store, signal, options.default_theme);
        tracing::info!(theme = %theme, source = ?source, "resolved initial theme");

        let mut manager = Self {
            theme,
            source,
            store,
            styler,
        };
        manager.synchronize();
        manager
    }

    pub fn get_theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn resolved_from(&self) -> ThemeSource {
        self.source
    }

    /// False once the store has failed or when none was provided.
    pub fn is_persistent(&self) -> bool {
        self.store.is_some()
    }

    pub fn palette(&self) -> ThemePalette {
        ThemePalette::for_mode(self.theme)
    }

    /// Sets the mode unconditionally and synchronizes.
    pub fn set_theme(&mut self, value: ThemeMode) {
        tracing::debug!(from = %self.theme, to = %value, "set theme");
        self.theme = value;
        self.synchronize();
    }

    /// Textual variant of [`Self::set_theme`]. Anything other than `"light"`
    /// or `"dark"` is rejected without touching the current mode.
    pub fn set_theme_named(&mut self, value: &str) -> Result<(), ThemeError> {
        let mode = value.parse::<ThemeMode>()?;
        self.set_theme(mode);
        Ok(())
    }

    /// Flips light and dark; returns the new mode.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.set_theme(self.theme.opposite());
        self.theme
    }

    fn synchronize(&mut self) {
        // Both markers go before the active one is added, so the root never
        // carries two.
        for marker in ThemeMode::ALL {
            self.styler.remove_marker(marker);
        }
        self.styler.add_marker(self.theme);

        if let Some(store) = self.store.as_mut() {
            if let Err(err) = store.set(THEME_STORAGE_KEY, self.theme.as_str()) {
                tracing::warn!("{err}; theme preference is now session-only");
                self.store = None;
            }
        }
    }
}

fn resolve_initial(
    store: &mut Option<Box<dyn PreferenceStore>>,
    signal: Option<&dyn SystemThemeSignal>,
    default_theme: ThemeMode,
) -> (ThemeMode, ThemeSource) {
    if let Some(persisted) = read_persisted(store) {
        return (persisted, ThemeSource::Persisted);
    }

    if signal.and_then(|s| s.prefers_dark()) == Some(true) {
        return (ThemeMode::Dark, ThemeSource::System);
    }

    (default_theme, ThemeSource::Default)
}

fn read_persisted(store: &mut Option<Box<dyn PreferenceStore>>) -> Option<ThemeMode> {
    let read = store.as_ref()?.get(THEME_STORAGE_KEY);
    let value = match read {
        Ok(value) => value?,
        Err(err) => {
            tracing::warn!("{err}; theme preference is now session-only");
            *store = None;
            return None;
        }
    };

    match value.parse() {
        Ok(mode) => Some(mode),
        Err(err) => {
            tracing::warn!("ignoring persisted theme: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render_root::{RootMarkers, StaticSystemSignal};
    use crate::stores::MemoryPreferenceStore;

    fn manager_with(
        store: MemoryPreferenceStore,
        signal: Option<bool>,
    ) -> (ThemePreferenceManager, RootMarkers) {
        let markers = RootMarkers::new();
        let capabilities = ThemeCapabilities::new(markers.clone())
            .with_store(store)
            .with_system_signal(StaticSystemSignal(signal));
        (
            ThemePreferenceManager::initialize(ThemeOptions::default(), capabilities),
            markers,
        )
    }

    #[test]
    fn test_persisted_value_wins_over_signal() {
        let store = MemoryPreferenceStore::new().with_value(THEME_STORAGE_KEY, "light");
        let (manager, _) = manager_with(store, Some(true));
        assert_eq!(manager.get_theme(), ThemeMode::Light);
        assert_eq!(manager.resolved_from(), ThemeSource::Persisted);
    }

    #[test]
    fn test_signal_used_when_nothing_persisted() {
        let (manager, _) = manager_with(MemoryPreferenceStore::new(), Some(true));
        assert_eq!(manager.get_theme(), ThemeMode::Dark);
        assert_eq!(manager.resolved_from(), ThemeSource::System);
    }

    #[test]
    fn test_light_signal_falls_through_to_default() {
        let markers = RootMarkers::new();
        let capabilities = ThemeCapabilities::new(markers)
            .with_system_signal(StaticSystemSignal(Some(false)));
        let options = ThemeOptions {
            default_theme: ThemeMode::Dark,
            follow_system_theme: true,
        };
        let manager = ThemePreferenceManager::initialize(options, capabilities);
        assert_eq!(manager.get_theme(), ThemeMode::Dark);
        assert_eq!(manager.resolved_from(), ThemeSource::Default);
    }

    #[test]
    fn test_signal_ignored_when_not_following_system() {
        let capabilities = ThemeCapabilities::new(RootMarkers::new())
            .with_system_signal(StaticSystemSignal(Some(true)));
        let options = ThemeOptions {
            default_theme: ThemeMode::Light,
            follow_system_theme: false,
        };
        let manager = ThemePreferenceManager::initialize(options, capabilities);
        assert_eq!(manager.get_theme(), ThemeMode::Light);
    }

    #[test]
    fn test_garbage_persisted_value_is_ignored() {
        let store = MemoryPreferenceStore::new().with_value(THEME_STORAGE_KEY, "purple");
        let (manager, _) = manager_with(store.clone(), Some(true));
        assert_eq!(manager.get_theme(), ThemeMode::Dark);
        assert_eq!(store.peek(THEME_STORAGE_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn test_initialization_synchronizes() {
        let store = MemoryPreferenceStore::new();
        let (manager, markers) = manager_with(store.clone(), None);
        assert_eq!(markers.active(), vec![manager.get_theme()]);
        assert_eq!(store.peek(THEME_STORAGE_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_toggle_returns_new_mode() {
        let (mut manager, markers) = manager_with(MemoryPreferenceStore::new(), None);
        assert_eq!(manager.toggle_theme(), ThemeMode::Dark);
        assert_eq!(markers.active(), vec![ThemeMode::Dark]);
        assert_eq!(manager.toggle_theme(), ThemeMode::Light);
        assert_eq!(markers.active(), vec![ThemeMode::Light]);
    }

    #[test]
    fn test_set_theme_named_rejects_unknown_value() {
        let store = MemoryPreferenceStore::new();
        let (mut manager, markers) = manager_with(store.clone(), None);

        let err = manager.set_theme_named("auto").unwrap_err();
        assert_eq!(err, ThemeError::InvalidArgument("auto".to_string()));
        assert_eq!(manager.get_theme(), ThemeMode::Light);
        assert_eq!(markers.active(), vec![ThemeMode::Light]);

        manager.set_theme_named("dark").unwrap();
        assert_eq!(manager.get_theme(), ThemeMode::Dark);
        assert_eq!(store.peek(THEME_STORAGE_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn test_unavailable_store_degrades_silently() {
        let (mut manager, markers) = manager_with(MemoryPreferenceStore::unavailable(), Some(true));
        assert_eq!(manager.get_theme(), ThemeMode::Dark);
        assert!(!manager.is_persistent());

        manager.toggle_theme();
        assert_eq!(manager.get_theme(), ThemeMode::Light);
        assert_eq!(markers.active(), vec![ThemeMode::Light]);
    }

    #[test]
    fn test_palette_tracks_mode() {
        let (mut manager, _) = manager_with(MemoryPreferenceStore::new(), None);
        manager.set_theme(ThemeMode::Dark);
        assert_eq!(manager.palette().mode, ThemeMode::Dark);
    }
}
