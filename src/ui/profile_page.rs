//! Profile page: pet card, medical info, collar status and settings.
//!
//! The dark-mode switch here is the only control that mutates the theme.

use eframe::egui;
use egui::RichText;
use pawtrack::sample_data::PET;
use pawtrack::ThemePalette;

use crate::app::PageInteraction;
use crate::presentation::color_mapping::{self, BadgeTone};
use crate::state::PageState;
use crate::ui::widgets::{self, Trailing};

const APP_VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

pub fn render_profile_page(
    ui: &mut egui::Ui,
    palette: &ThemePalette,
    pages: &PageState,
) -> Option<PageInteraction> {
    let mut interaction = None;

    widgets::page_header(ui, palette, "Profil", "Paramètres et informations");

    // Pet card
    widgets::card(ui, palette, |ui| {
        ui.horizontal(|ui| {
            widgets::icon_tile(ui, PET.species.icon(), color_mapping::fixture_color(PET.collar_color), 64.0);
            ui.add_space(8.0);
            ui.vertical(|ui| {
                ui.label(RichText::new(PET.name).size(20.0).strong().color(palette.text));
                ui.label(widgets::muted(PET.breed, palette));
                ui.horizontal(|ui| {
                    ui.label(widgets::muted(format!("{} ans", PET.age_years), palette));
                    ui.label(widgets::muted("·", palette));
                    ui.label(widgets::muted(format!("{} kg", PET.weight_kg), palette));
                });
            });
        });
    });

    // Medical info
    widgets::card(ui, palette, |ui| {
        widgets::section_title(ui, palette, "Informations médicales");
        ui.add_space(8.0);
        medical_row(ui, palette, "💉", palette.purple, "Vaccins", "À jour", Some("Vérifié"));
        medical_row(ui, palette, "⚖", palette.primary, "Poids idéal", "26-30 kg", None);
        medical_row(ui, palette, "🛡", palette.green, "Allergies", "Aucune connue", None);
    });

    // Collar
    widgets::card(ui, palette, |ui| {
        widgets::section_title(ui, palette, "Collier connecté");
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            widgets::icon_tile(ui, "📶", palette.green, 30.0);
            ui.vertical(|ui| {
                ui.label(RichText::new("Connecté").strong().color(palette.text));
                ui.label(widgets::muted("PetCollar Pro v2.1", palette));
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                widgets::status_badge(ui, palette, BadgeTone::Success, "En ligne", true);
            });
        });
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            widgets::icon_tile(ui, "🔋", palette.primary, 30.0);
            ui.vertical(|ui| {
                ui.label(RichText::new("Batterie").strong().color(palette.text));
                ui.label(widgets::muted("Charge depuis la laisse disponible", palette));
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(format!("{}%", PET.collar_battery)).strong().color(palette.text));
            });
        });
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(16.0, 16.0), egui::Sense::hover());
            ui.painter()
                .circle_filled(rect.center(), 8.0, color_mapping::fixture_color(PET.collar_color));
            ui.label(RichText::new("Couleur du collier").color(palette.text));
        });
    });

    // App settings
    widgets::card(ui, palette, |ui| {
        widgets::section_title(ui, palette, "Paramètres");
        ui.add_space(8.0);
        if widgets::setting_row(
            ui,
            palette,
            "🔔",
            palette.red,
            "Notifications",
            Trailing::Toggle(pages.notifications_enabled()),
        ) {
            interaction = Some(PageInteraction::NotificationsToggled);
        }

        let dark = palette.mode.is_dark();
        let icon = if dark { "🌙" } else { "☀" };
        if widgets::setting_row(ui, palette, icon, palette.purple, "Mode sombre", Trailing::Toggle(dark)) {
            interaction = Some(PageInteraction::ThemeToggleRequested);
        }

        widgets::setting_row(ui, palette, "⚙", palette.text_muted, "Unités", Trailing::Value("Métrique"));
        widgets::setting_row(ui, palette, "📱", palette.primary, "Widget iOS", Trailing::Value("Activé"));
    });

    // Data & support
    widgets::card(ui, palette, |ui| {
        widgets::section_title(ui, palette, "Données & Support");
        ui.add_space(8.0);
        widgets::setting_row(ui, palette, "📄", palette.green, "Exporter rapport santé", Trailing::Value("PDF"));
        widgets::setting_row(ui, palette, "🔗", palette.primary, "Partager avec vétérinaire", Trailing::Chevron);
        widgets::setting_row(ui, palette, "❓", palette.orange, "Aide et FAQ", Trailing::Chevron);
        widgets::setting_row(ui, palette, "ℹ", palette.text_muted, "À propos", Trailing::Value(APP_VERSION));
    });

    // Logout
    widgets::card(ui, palette, |ui| {
        ui.horizontal(|ui| {
            widgets::icon_tile(ui, "⎋", palette.red, 30.0);
            ui.label(RichText::new("Déconnexion").strong().color(palette.red));
        });
    });

    interaction
}

fn medical_row(
    ui: &mut egui::Ui,
    palette: &ThemePalette,
    icon: &str,
    color: egui::Color32,
    label: &str,
    value: &str,
    badge: Option<&str>,
) {
    ui.horizontal(|ui| {
        widgets::icon_tile(ui, icon, color, 30.0);
        ui.vertical(|ui| {
            ui.label(widgets::muted(label, palette));
            ui.label(RichText::new(value).strong().color(palette.text));
        });
        if let Some(badge) = badge {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                widgets::status_badge(ui, palette, BadgeTone::Success, badge, false);
            });
        }
    });
    ui.add_space(6.0);
}
