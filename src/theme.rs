//! Theme values and color palettes for the PawTrack companion app.
//!
//! The app knows exactly two themes. [`ThemeMode`] is the value that gets
//! resolved, toggled and persisted; [`ThemePalette`] is the set of colors the
//! rendering surface paints with for a given mode.
//!
//! # Examples
//!
//! ```
//! use pawtrack::theme::{ThemeMode, ThemePalette};
//!
//! let mode: ThemeMode = "dark".parse().unwrap();
//! assert_eq!(mode.opposite(), ThemeMode::Light);
//! let palette = ThemePalette::for_mode(mode);
//! println!("Dark card fill: {:?}", palette.card);
//! ```

use std::fmt;
use std::str::FromStr;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// The active theme. Its textual forms are exactly `"light"` and `"dark"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Both variants, in marker removal order.
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];

    /// The persisted and marker form of this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeError;

    /// Accepts only the exact strings `"light"` and `"dark"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(ThemeError::InvalidArgument(other.to_string())),
        }
    }
}

/// Complete color palette for one theme mode, covering cards, text and the
/// health accent colors used by charts and badges.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemePalette {
    pub mode: ThemeMode,

    // Surfaces
    pub background: Color32,
    pub card: Color32,
    pub secondary: Color32,

    // Foreground
    pub text: Color32,
    pub text_muted: Color32,
    pub border: Color32,

    // Accents
    pub primary: Color32,
    pub red: Color32,
    pub green: Color32,
    pub orange: Color32,
    pub purple: Color32,
    pub teal: Color32,
}

impl ThemePalette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => light_palette(),
            ThemeMode::Dark => dark_palette(),
        }
    }

    /// Builds egui visuals for this palette, starting from egui's own light or
    /// dark defaults.
    pub fn visuals(&self) -> egui::Visuals {
        let mut visuals = if self.mode.is_dark() {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        self.apply_to_visuals(&mut visuals);
        visuals
    }

    /// Overrides the egui visuals that the pages rely on.
    pub fn apply_to_visuals(&self, visuals: &mut egui::Visuals) {
        visuals.panel_fill = self.background;
        visuals.window_fill = self.card;
        visuals.extreme_bg_color = self.secondary;
        visuals.faint_bg_color = self.secondary;

        visuals.override_text_color = Some(self.text);

        visuals.selection.bg_fill = with_alpha(self.primary, 60);
        visuals.selection.stroke.color = self.primary;

        visuals.widgets.noninteractive.bg_fill = self.card;
        visuals.widgets.noninteractive.bg_stroke.color = self.border;
        visuals.widgets.inactive.bg_fill = self.secondary;
        visuals.widgets.inactive.weak_bg_fill = self.secondary;
        visuals.widgets.hovered.bg_fill = self.secondary;
        visuals.widgets.active.bg_fill = self.primary;

        visuals.hyperlink_color = self.primary;
        visuals.error_fg_color = self.red;
        visuals.warn_fg_color = self.orange;
    }
}

/// iOS-style light system colors.
fn light_palette() -> ThemePalette {
    ThemePalette {
        mode: ThemeMode::Light,
        background: hex_to_color32("#F2F2F7"),
        card: hex_to_color32("#FFFFFF"),
        secondary: hex_to_color32("#E5E5EA"),

        text: hex_to_color32("#1C1C1E"),
        text_muted: hex_to_color32("#8E8E93"),
        border: hex_to_color32("#D1D1D6"),

        primary: hex_to_color32("#007AFF"),
        red: hex_to_color32("#FF3B30"),
        green: hex_to_color32("#34C759"),
        orange: hex_to_color32("#FF9500"),
        purple: hex_to_color32("#5856D6"),
        teal: hex_to_color32("#5AC8FA"),
    }
}

/// iOS-style dark system colors.
fn dark_palette() -> ThemePalette {
    ThemePalette {
        mode: ThemeMode::Dark,
        background: hex_to_color32("#000000"),
        card: hex_to_color32("#1C1C1E"),
        secondary: hex_to_color32("#2C2C2E"),

        text: hex_to_color32("#FFFFFF"),
        text_muted: hex_to_color32("#8E8E93"),
        border: hex_to_color32("#38383A"),

        primary: hex_to_color32("#0A84FF"),
        red: hex_to_color32("#FF453A"),
        green: hex_to_color32("#30D158"),
        orange: hex_to_color32("#FF9F0A"),
        purple: hex_to_color32("#5E5CE6"),
        teal: hex_to_color32("#64D2FF"),
    }
}

/// Converts a hex color string (like "#0A84FF") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

/// Returns the color with the given alpha, for tinted badge and icon backgrounds.
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_only_two_literals() {
        assert_eq!("light".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!(
            "Dark".parse::<ThemeMode>(),
            Err(ThemeError::InvalidArgument("Dark".to_string()))
        );
        assert!("".parse::<ThemeMode>().is_err());
        assert!("system".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn test_opposite_flips() {
        assert_eq!(ThemeMode::Light.opposite(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.opposite(), ThemeMode::Light);
    }

    #[test]
    fn test_serde_uses_lowercase_literals() {
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
        let mode: ThemeMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(mode, ThemeMode::Light);
    }

    #[test]
    fn test_palette_visuals_follow_mode() {
        let dark = ThemePalette::for_mode(ThemeMode::Dark);
        assert!(dark.visuals().dark_mode);
        assert_eq!(dark.visuals().panel_fill, dark.background);

        let light = ThemePalette::for_mode(ThemeMode::Light);
        assert!(!light.visuals().dark_mode);
        assert_eq!(light.visuals().override_text_color, Some(light.text));
    }

    #[test]
    fn test_hex_to_color32() {
        assert_eq!(hex_to_color32("#0A84FF"), Color32::from_rgb(10, 132, 255));
        assert_eq!(hex_to_color32("bad"), Color32::from_rgb(0, 0, 0));
    }
}
