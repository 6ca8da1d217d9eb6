//! Color mapping for badges, alerts and behavior log entries.
//!
//! Every mapping reads from the active [`ThemePalette`], so colors follow the
//! theme without the pages knowing which mode is active.

use egui::Color32;
use pawtrack::sample_data::{BehaviorEventKind, PetStatus, Severity};
use pawtrack::{hex_to_color32, ThemePalette};

/// Visual tone of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Success,
    Warning,
    Danger,
    Info,
}

impl BadgeTone {
    pub fn color(self, palette: &ThemePalette) -> Color32 {
        match self {
            BadgeTone::Success => palette.green,
            BadgeTone::Warning => palette.orange,
            BadgeTone::Danger => palette.red,
            BadgeTone::Info => palette.primary,
        }
    }
}

/// Badge tone for the pet's overall status.
pub fn pet_status_tone(status: PetStatus) -> BadgeTone {
    match status {
        PetStatus::Healthy => BadgeTone::Success,
        PetStatus::Alert => BadgeTone::Danger,
        PetStatus::Active | PetStatus::Resting => BadgeTone::Info,
    }
}

pub fn severity_color(severity: Severity, palette: &ThemePalette) -> Color32 {
    match severity {
        Severity::Info => palette.primary,
        Severity::Warning => palette.orange,
        Severity::Critical => palette.red,
    }
}

pub fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "ℹ",
        Severity::Warning => "⚠",
        Severity::Critical => "❗",
    }
}

/// Icon and accent color for an entry in the behavior log.
pub fn behavior_event_style(kind: BehaviorEventKind, palette: &ThemePalette) -> (&'static str, Color32) {
    match kind {
        BehaviorEventKind::Activity => ("⚡", palette.orange),
        BehaviorEventKind::Bark => ("🔊", palette.red),
        BehaviorEventKind::Sleep => ("🌙", palette.purple),
        BehaviorEventKind::Walk => ("🐾", palette.green),
        BehaviorEventKind::Play => ("🎾", palette.teal),
        BehaviorEventKind::Meal => ("🍖", palette.primary),
    }
}

/// Color stored with a fixture (sleep phases, collar color).
pub fn fixture_color(hex: &str) -> Color32 {
    hex_to_color32(hex)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pawtrack::ThemeMode;

    #[test]
    fn test_tones_follow_palette() {
        let dark = ThemePalette::for_mode(ThemeMode::Dark);
        let light = ThemePalette::for_mode(ThemeMode::Light);
        assert_eq!(BadgeTone::Success.color(&dark), dark.green);
        assert_ne!(BadgeTone::Success.color(&dark), BadgeTone::Success.color(&light));
    }

    #[test]
    fn test_pet_status_tone() {
        assert_eq!(pet_status_tone(PetStatus::Healthy), BadgeTone::Success);
        assert_eq!(pet_status_tone(PetStatus::Alert), BadgeTone::Danger);
        assert_eq!(pet_status_tone(PetStatus::Resting), BadgeTone::Info);
    }

    #[test]
    fn test_severity_color() {
        let palette = ThemePalette::for_mode(ThemeMode::Light);
        assert_eq!(severity_color(Severity::Critical, &palette), palette.red);
    }
}
