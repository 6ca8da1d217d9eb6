//! The theme consumption interface.
//!
//! A [`ThemeScope`] is created empty with the rest of the application state
//! and receives its manager once the host capabilities exist (in the GUI, on
//! the first frame). Every accessor returns [`ThemeError::OutsideScope`] until
//! then, and an empty scope is never mutated.

use crate::error::ThemeError;
use crate::preference_manager::ThemePreferenceManager;
use crate::theme::{ThemeMode, ThemePalette};

#[derive(Debug, Default)]
pub struct ThemeScope {
    manager: Option<ThemePreferenceManager>,
}

impl ThemeScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs an initialized manager, replacing any previous one.
    pub fn provide(&mut self, manager: ThemePreferenceManager) {
        self.manager = Some(manager);
    }

    pub fn is_active(&self) -> bool {
        self.manager.is_some()
    }

    pub fn manager(&self) -> Result<&ThemePreferenceManager, ThemeError> {
        self.manager.as_ref().ok_or(ThemeError::OutsideScope)
    }

    fn manager_mut(&mut self) -> Result<&mut ThemePreferenceManager, ThemeError> {
        self.manager.as_mut().ok_or(ThemeError::OutsideScope)
    }

    pub fn theme(&self) -> Result<ThemeMode, ThemeError> {
        Ok(self.manager()?.get_theme())
    }

    pub fn palette(&self) -> Result<ThemePalette, ThemeError> {
        Ok(self.manager()?.palette())
    }

    pub fn set_theme(&mut self, value: ThemeMode) -> Result<(), ThemeError> {
        self.manager_mut()?.set_theme(value);
        Ok(())
    }

    pub fn set_theme_named(&mut self, value: &str) -> Result<(), ThemeError> {
        self.manager_mut()?.set_theme_named(value)
    }

    pub fn toggle_theme(&mut self) -> Result<ThemeMode, ThemeError> {
        Ok(self.manager_mut()?.toggle_theme())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preference_manager::{ThemeCapabilities, ThemeOptions};
    use crate::render_root::RootMarkers;

    #[test]
    fn test_empty_scope_rejects_every_accessor() {
        let mut scope = ThemeScope::new();
        assert!(!scope.is_active());
        assert_eq!(scope.theme(), Err(ThemeError::OutsideScope));
        assert_eq!(scope.palette(), Err(ThemeError::OutsideScope));
        assert_eq!(scope.set_theme(ThemeMode::Dark), Err(ThemeError::OutsideScope));
        assert_eq!(scope.set_theme_named("dark"), Err(ThemeError::OutsideScope));
        assert_eq!(scope.toggle_theme(), Err(ThemeError::OutsideScope));
        assert!(!scope.is_active());
    }

    #[test]
    fn test_outside_scope_message() {
        assert_eq!(
            ThemeError::OutsideScope.to_string(),
            "preference accessed outside provider scope"
        );
    }

    #[test]
    fn test_provided_scope_delegates() {
        let markers = RootMarkers::new();
        let manager = ThemePreferenceManager::initialize(
            ThemeOptions::default(),
            ThemeCapabilities::new(markers.clone()),
        );

        let mut scope = ThemeScope::new();
        scope.provide(manager);

        assert_eq!(scope.theme(), Ok(ThemeMode::Light));
        assert_eq!(scope.toggle_theme(), Ok(ThemeMode::Dark));
        assert_eq!(markers.active(), vec![ThemeMode::Dark]);
        assert_eq!(
            scope.set_theme_named("sepia"),
            Err(ThemeError::InvalidArgument("sepia".to_string()))
        );
        assert_eq!(scope.theme(), Ok(ThemeMode::Dark));
    }
}
