pub mod config;
pub mod error;
pub mod logging;
pub mod preference_manager;
pub mod render_root;
pub mod sample_data;
pub mod scope;
pub mod stores;
pub mod theme;
pub mod traits;

// Export capability traits
pub use traits::{PreferenceStore, RenderRootStyler, SystemThemeSignal};

// Export theme preference subsystem
pub use preference_manager::{
    ThemeCapabilities, ThemeOptions, ThemePreferenceManager, ThemeSource, THEME_STORAGE_KEY,
};
pub use scope::ThemeScope;
pub use theme::{hex_to_color32, with_alpha, ThemeMode, ThemePalette};

// Export capability implementations
pub use render_root::{EguiRootStyler, EguiSystemSignal, RootMarkers, StaticSystemSignal};
pub use stores::{JsonFilePreferenceStore, MemoryPreferenceStore};

// Export configuration and errors
pub use config::AppConfig;
pub use error::{ConfigError, StoreError, ThemeError};
