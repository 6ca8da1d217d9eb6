use crate::error::StoreError;
use crate::theme::ThemeMode;

/// Key-value store that survives restarts.
///
/// Implementations may fail at any time (denied, absent, corrupt). Callers in
/// this crate treat a failure as "no persistence" and carry on.
pub trait PreferenceStore {
    /// Reads the value stored under `key`, `Ok(None)` when absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, overwriting any prior value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// One-shot read of the host's "prefers dark color scheme" signal.
pub trait SystemThemeSignal {
    /// `Some(true)` when the host prefers dark, `Some(false)` when it prefers
    /// light, `None` when the host exposes no signal.
    fn prefers_dark(&self) -> Option<bool>;
}

/// The visual root of the rendering surface, carrying theme markers.
///
/// Adding a marker applies its styling; the manager always removes both
/// markers before adding the active one.
pub trait RenderRootStyler {
    fn add_marker(&mut self, marker: ThemeMode);

    fn remove_marker(&mut self, marker: ThemeMode);
}
