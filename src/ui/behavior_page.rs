//! Behavior page: mood, stress, barking, insights and the daily log.

use eframe::egui;
use egui::RichText;
use pawtrack::sample_data::{BEHAVIOR_DATA, BEHAVIOR_EVENTS, PET, STRESS_HISTORY};
use pawtrack::ThemePalette;

use crate::presentation::color_mapping::{self, BadgeTone};
use crate::presentation::geometry;
use crate::rendering::chart_renderer;
use crate::ui::widgets;

/// Stress levels at or below this read as "low".
const LOW_STRESS_THRESHOLD: u32 = 30;

pub fn render_behavior_page(ui: &mut egui::Ui, palette: &ThemePalette) {
    widgets::page_header(
        ui,
        palette,
        "Comportement",
        &format!("Analyse émotionnelle de {}", PET.name),
    );

    // Mood
    widgets::card(ui, palette, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(BEHAVIOR_DATA.mood.emoji()).size(44.0));
            ui.add_space(8.0);
            ui.vertical(|ui| {
                widgets::section_title(ui, palette, "Humeur actuelle");
                ui.label(RichText::new(BEHAVIOR_DATA.mood.label()).size(24.0).strong().color(palette.text));
                let activity = format!("Activité {}", BEHAVIOR_DATA.activity_level.label().to_lowercase());
                widgets::status_badge(ui, palette, BadgeTone::Success, &activity, false);
            });
        });
    });

    // Stress
    widgets::card(ui, palette, |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                widgets::section_title(ui, palette, "Niveau de stress");
                ui.label(widgets::muted("Mesuré en temps réel", palette));
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let color = stress_color(BEHAVIOR_DATA.stress_level, palette);
                ui.label(RichText::new(format!("{}%", BEHAVIOR_DATA.stress_level)).size(24.0).strong().color(color));
            });
        });
        ui.add_space(6.0);
        chart_renderer::render_progress_bar(
            ui,
            palette,
            geometry::ring_progress(BEHAVIOR_DATA.stress_level as f32, 100.0),
            stress_color(BEHAVIOR_DATA.stress_level, palette),
        );
        ui.add_space(10.0);

        let (times, levels): (Vec<&str>, Vec<f32>) =
            STRESS_HISTORY.iter().map(|s| (s.time, s.level as f32)).unzip();
        chart_renderer::render_area_chart(ui, palette, &times, &levels, palette.orange, 120.0);
    });

    // Barking
    widgets::card(ui, palette, |ui| {
        ui.horizontal(|ui| {
            widgets::icon_tile(ui, "🔊", palette.orange, 36.0);
            ui.vertical(|ui| {
                widgets::section_title(ui, palette, "Détection des aboiements");
                ui.label(widgets::muted("Dernières 24 heures", palette));
            });
        });
        ui.add_space(8.0);
        ui.columns(2, |columns| {
            bark_stat(&mut columns[0], palette, "Fréquence", BEHAVIOR_DATA.barking_frequency.to_string(), "aboiements");
            bark_stat(&mut columns[1], palette, "Dernier", BEHAVIOR_DATA.last_bark_time.to_string(), "enregistré");
        });
    });

    // Insights
    widgets::card(ui, palette, |ui| {
        widgets::section_title(ui, palette, "Insights comportementaux");
        ui.add_space(8.0);
        insight(ui, palette, "📈", palette.green, "Tendance positive", "Le niveau de stress a diminué de 20% cette semaine");
        insight(
            ui,
            palette,
            "✔",
            palette.primary,
            "Activité régulière",
            &format!("{} maintient un bon niveau d'activité quotidienne", PET.name),
        );
        if BEHAVIOR_DATA.unusual_behavior {
            insight(
                ui,
                palette,
                "⚠",
                palette.orange,
                "Comportement inhabituel détecté",
                "Une consultation vétérinaire est recommandée",
            );
        }
    });

    // Daily log
    widgets::card(ui, palette, |ui| {
        widgets::section_title(ui, palette, "Journal du jour");
        ui.add_space(8.0);
        for (index, event) in BEHAVIOR_EVENTS.iter().enumerate() {
            let (icon, color) = color_mapping::behavior_event_style(event.kind, palette);
            ui.horizontal(|ui| {
                widgets::icon_tile(ui, icon, color, 30.0);
                ui.label(RichText::new(event.event).color(palette.text));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(widgets::muted(event.time, palette));
                });
            });
            if index + 1 != BEHAVIOR_EVENTS.len() {
                ui.separator();
            }
        }
    });
}

fn stress_color(level: u32, palette: &ThemePalette) -> egui::Color32 {
    if level <= LOW_STRESS_THRESHOLD {
        palette.green
    } else if level <= 60 {
        palette.orange
    } else {
        palette.red
    }
}

fn bark_stat(ui: &mut egui::Ui, palette: &ThemePalette, label: &str, value: String, caption: &str) {
    egui::Frame::new()
        .fill(palette.secondary)
        .corner_radius(12.0)
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(widgets::muted(label, palette));
            ui.label(RichText::new(value).size(20.0).strong().color(palette.text));
            ui.label(widgets::muted(caption, palette));
        });
}

fn insight(ui: &mut egui::Ui, palette: &ThemePalette, icon: &str, color: egui::Color32, title: &str, detail: &str) {
    ui.horizontal(|ui| {
        widgets::icon_tile(ui, icon, color, 30.0);
        ui.vertical(|ui| {
            ui.label(RichText::new(title).size(14.0).strong().color(palette.text));
            ui.label(widgets::muted(detail, palette));
        });
    });
    ui.add_space(6.0);
}
