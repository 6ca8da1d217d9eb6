//! Map page: mock map, current position, safe zones and movement history.

use eframe::egui;
use egui::RichText;
use pawtrack::sample_data::{LOCATION_DATA, LOCATION_HISTORY, PET, SAFE_ZONES};
use pawtrack::ThemePalette;

use crate::presentation::color_mapping::BadgeTone;
use crate::rendering::map_renderer;
use crate::ui::widgets;

pub fn render_map_page(ui: &mut egui::Ui, palette: &ThemePalette) {
    widgets::page_header(
        ui,
        palette,
        "Localisation",
        &format!("Suivez {} en temps réel", PET.name),
    );

    map_renderer::render_map(ui, palette, &LOCATION_DATA, SAFE_ZONES, LOCATION_HISTORY, 260.0);
    ui.add_space(6.0);
    let (tone, label) = if LOCATION_DATA.is_in_safe_zone {
        (BadgeTone::Success, "Zone sécurisée")
    } else {
        (BadgeTone::Warning, "Hors zone")
    };
    widgets::status_badge(ui, palette, tone, label, true);
    ui.add_space(12.0);

    // Current position
    widgets::card(ui, palette, |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                widgets::section_title(ui, palette, "Position actuelle");
                ui.label(widgets::muted(LOCATION_DATA.address, palette));
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.vertical(|ui| {
                    ui.label(widgets::muted("Mise à jour", palette));
                    ui.label(RichText::new(LOCATION_DATA.last_update).strong().color(palette.text));
                });
            });
        });
        ui.add_space(6.0);
        ui.label(widgets::muted(
            format!("{:.4}, {:.4}", LOCATION_DATA.latitude, LOCATION_DATA.longitude),
            palette,
        ));
    });

    // Directions
    widgets::card(ui, palette, |ui| {
        ui.horizontal(|ui| {
            widgets::icon_tile(ui, "🧭", palette.primary, 36.0);
            ui.vertical(|ui| {
                widgets::section_title(ui, palette, &format!("Trouver {}", PET.name));
                ui.label(widgets::muted("Obtenir l'itinéraire vers sa position", palette));
            });
        });
    });

    // Safe zones
    widgets::card(ui, palette, |ui| {
        widgets::section_title(ui, palette, "Zones sécurisées");
        ui.add_space(8.0);
        for zone in SAFE_ZONES {
            let color = if zone.active { palette.green } else { palette.text_muted };
            ui.horizontal(|ui| {
                widgets::icon_tile(ui, "🛡", color, 30.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(zone.name).strong().color(palette.text));
                    ui.label(widgets::muted(format!("Rayon: {}m", zone.radius_m), palette));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let (tone, label) = if zone.active {
                        (BadgeTone::Success, "Active")
                    } else {
                        (BadgeTone::Warning, "Inactive")
                    };
                    widgets::status_badge(ui, palette, tone, label, false);
                });
            });
            ui.add_space(4.0);
        }
    });

    // Movement history
    widgets::card(ui, palette, |ui| {
        widgets::section_title(ui, palette, "Historique des déplacements");
        ui.add_space(8.0);
        for point in LOCATION_HISTORY {
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 4.0, palette.primary);
                ui.label(RichText::new(point.time).strong().color(palette.text));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(widgets::muted(format!("{:.4}, {:.4}", point.lat, point.lng), palette));
                });
            });
        }
    });
}
