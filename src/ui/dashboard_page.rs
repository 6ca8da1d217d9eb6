//! Dashboard page: greeting, alerts, pet card, activity rings, metrics and
//! current location.

use eframe::egui;
use egui::RichText;
use pawtrack::sample_data::{self, HEALTH_METRICS, LOCATION_DATA, PET};
use pawtrack::ThemePalette;

use crate::presentation::color_mapping::{self, BadgeTone};
use crate::rendering::chart_renderer::{self, Ring};
use crate::rendering::map_renderer;
use crate::ui::widgets::{self, Metric};
use crate::utils::format_grouped;

pub fn render_dashboard_page(ui: &mut egui::Ui, palette: &ThemePalette) {
    let unread: Vec<_> = sample_data::unread_alerts().collect();

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            widgets::page_header(ui, palette, "Tableau de bord", "Bonjour 👋");
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let bell = RichText::new("🔔").size(20.0).color(palette.text);
            let response = ui.add(egui::Button::new(bell).corner_radius(20.0));
            if !unread.is_empty() {
                ui.painter()
                    .circle_filled(response.rect.right_top() + egui::vec2(-4.0, 4.0), 4.0, palette.red);
            }
        });
    });

    for alert in &unread {
        widgets::alert_card(ui, palette, alert);
    }
    if !unread.is_empty() {
        ui.add_space(4.0);
    }

    // Pet card
    widgets::card(ui, palette, |ui| {
        ui.horizontal(|ui| {
            widgets::icon_tile(ui, PET.species.icon(), color_mapping::fixture_color(PET.collar_color), 56.0);
            ui.add_space(8.0);
            ui.vertical(|ui| {
                ui.label(RichText::new(PET.name).size(20.0).strong().color(palette.text));
                ui.label(widgets::muted(PET.breed, palette));
                widgets::status_badge(
                    ui,
                    palette,
                    color_mapping::pet_status_tone(PET.status),
                    PET.status.label(),
                    true,
                );
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                ui.label(widgets::muted(format!("🔋 {}%", PET.collar_battery), palette));
            });
        });
    });

    // Activity rings
    widgets::card(ui, palette, |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.set_width((ui.available_width() - 140.0).max(0.0));
                widgets::section_title(ui, palette, "Activité du jour");
                ui.add_space(8.0);
                legend_row(ui, palette, palette.red, "Calories", format!("{}/{}", HEALTH_METRICS.calories, HEALTH_METRICS.calories_goal));
                legend_row(
                    ui,
                    palette,
                    palette.green,
                    "Activité",
                    format!("{}/{} min", HEALTH_METRICS.active_minutes, HEALTH_METRICS.active_minutes_goal),
                );
                legend_row(
                    ui,
                    palette,
                    palette.primary,
                    "Pas",
                    format!("{}/{}", format_grouped(HEALTH_METRICS.steps), format_grouped(HEALTH_METRICS.steps_goal)),
                );
            });
            let rings = [
                Ring {
                    value: HEALTH_METRICS.calories as f32,
                    goal: HEALTH_METRICS.calories_goal as f32,
                    color: palette.red,
                },
                Ring {
                    value: HEALTH_METRICS.active_minutes as f32,
                    goal: HEALTH_METRICS.active_minutes_goal as f32,
                    color: palette.green,
                },
                Ring {
                    value: HEALTH_METRICS.steps as f32,
                    goal: HEALTH_METRICS.steps_goal as f32,
                    color: palette.primary,
                },
            ];
            chart_renderer::render_activity_rings(ui, palette, &rings, 130.0, 10.0);
        });
    });

    // Metrics grid
    ui.columns(2, |columns| {
        widgets::metric_card(
            &mut columns[0],
            palette,
            Metric {
                icon: "❤",
                color: palette.red,
                label: "Fréquence cardiaque",
                value: HEALTH_METRICS.heart_rate.to_string(),
                unit: Some("BPM"),
                subtitle: Some(format!(
                    "{}-{} aujourd'hui",
                    HEALTH_METRICS.heart_rate_min, HEALTH_METRICS.heart_rate_max
                )),
            },
        );
        widgets::metric_card(
            &mut columns[1],
            palette,
            Metric {
                icon: "🐾",
                color: palette.green,
                label: "Distance",
                value: HEALTH_METRICS.distance_km.to_string(),
                unit: Some("km"),
                subtitle: Some("Parcourue aujourd'hui".to_string()),
            },
        );
        widgets::metric_card(
            &mut columns[0],
            palette,
            Metric {
                icon: "🌙",
                color: palette.purple,
                label: "Sommeil",
                value: HEALTH_METRICS.sleep_hours.to_string(),
                unit: Some("h"),
                subtitle: Some(format!("Qualité: {}%", HEALTH_METRICS.sleep_quality)),
            },
        );
        widgets::metric_card(
            &mut columns[1],
            palette,
            Metric {
                icon: "📍",
                color: palette.primary,
                label: "Position",
                value: "Maison".to_string(),
                unit: None,
                subtitle: Some(LOCATION_DATA.last_update.to_string()),
            },
        );
    });

    // Location card
    widgets::card(ui, palette, |ui| {
        widgets::section_title(ui, palette, "Localisation actuelle");
        ui.add_space(8.0);
        map_renderer::render_map(ui, palette, &LOCATION_DATA, &[], &[], 128.0);
        ui.add_space(8.0);
        ui.label(RichText::new(LOCATION_DATA.address).strong().color(palette.text));
        let (tone, label) = if LOCATION_DATA.is_in_safe_zone {
            (BadgeTone::Success, "Dans la zone sécurisée")
        } else {
            (BadgeTone::Warning, "Hors zone")
        };
        widgets::status_badge(ui, palette, tone, label, false);
    });
}

fn legend_row(ui: &mut egui::Ui, palette: &ThemePalette, color: egui::Color32, label: &str, value: String) {
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
        ui.painter().circle_filled(rect.center(), 5.0, color);
        ui.label(widgets::muted(label, palette));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(value).size(13.0).strong().color(palette.text));
        });
    });
}
