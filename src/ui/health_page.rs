//! Health page: heart rate with range switch, vitals, sleep, activity and
//! personalized tips.

use eframe::egui;
use egui::RichText;
use pawtrack::sample_data::{
    self, ACTIVITY_HISTORY, HEALTH_METRICS, HEALTH_TIPS, HEART_RATE_HISTORY, PET, SLEEP_DATA,
    WEEKLY_HEART_RATE,
};
use pawtrack::ThemePalette;

use crate::app::PageInteraction;
use crate::presentation::color_mapping;
use crate::presentation::geometry;
use crate::rendering::chart_renderer;
use crate::state::{HeartRateRange, PageState};
use crate::ui::widgets;
use crate::utils::{format_goal, format_grouped, format_percent};

pub fn render_health_page(
    ui: &mut egui::Ui,
    palette: &ThemePalette,
    pages: &PageState,
) -> Option<PageInteraction> {
    let mut interaction = None;

    widgets::page_header(ui, palette, "Santé", &format!("Suivi complet de {}", PET.name));

    // Heart rate
    widgets::card(ui, palette, |ui| {
        ui.horizontal(|ui| {
            widgets::icon_tile(ui, "❤", palette.red, 36.0);
            ui.vertical(|ui| {
                widgets::section_title(ui, palette, "Fréquence cardiaque");
                ui.label(widgets::muted("Dernière mesure", palette));
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(widgets::muted("BPM", palette));
                ui.label(RichText::new(HEALTH_METRICS.heart_rate.to_string()).size(28.0).strong().color(palette.text));
            });
        });
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            for range in [HeartRateRange::Day, HeartRateRange::Week] {
                let selected = pages.heart_rate_range() == range;
                if ui.add(egui::Button::new(range.label()).selected(selected)).clicked() && !selected {
                    interaction = Some(PageInteraction::HeartRateRangeSelected(range));
                }
            }
        });
        ui.add_space(8.0);

        let (labels, values): (Vec<&str>, Vec<f32>) = match pages.heart_rate_range() {
            HeartRateRange::Day => HEART_RATE_HISTORY.iter().map(|s| (s.time, s.value as f32)).unzip(),
            HeartRateRange::Week => WEEKLY_HEART_RATE.iter().map(|d| (d.day, d.avg as f32)).unzip(),
        };
        chart_renderer::render_area_chart(ui, palette, &labels, &values, palette.red, 150.0);

        ui.add_space(8.0);
        ui.columns(3, |columns| {
            stat(&mut columns[0], palette, "Min", format!("{} BPM", HEALTH_METRICS.heart_rate_min));
            stat(&mut columns[1], palette, "Moyenne", format!("{} BPM", HEALTH_METRICS.heart_rate));
            stat(&mut columns[2], palette, "Max", format!("{} BPM", HEALTH_METRICS.heart_rate_max));
        });
    });

    // Vitals
    ui.columns(2, |columns| {
        widgets::card(&mut columns[0], palette, |ui| {
            ui.label(widgets::muted("🫁 Respiration", palette));
            ui.label(RichText::new(HEALTH_METRICS.respiratory_rate.to_string()).size(24.0).strong().color(palette.text));
            ui.label(widgets::muted("resp/min", palette));
        });
        widgets::card(&mut columns[1], palette, |ui| {
            ui.label(widgets::muted("🌡 Température", palette));
            ui.label(RichText::new(format!("{}°", HEALTH_METRICS.temperature)).size(24.0).strong().color(palette.text));
            ui.label(widgets::muted("Normale", palette));
        });
    });

    // Sleep
    widgets::card(ui, palette, |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                widgets::section_title(ui, palette, "Sommeil");
                ui.label(widgets::muted("Cette nuit", palette));
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(format!("{}%", HEALTH_METRICS.sleep_quality)).size(22.0).strong().color(palette.purple));
            });
        });
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            let slices: Vec<_> = SLEEP_DATA
                .iter()
                .map(|phase| (phase.hours, color_mapping::fixture_color(phase.color)))
                .collect();
            let caption = format!("{}h", sample_data::total_sleep_hours());
            chart_renderer::render_donut(ui, palette, &slices, 110.0, 14.0, Some(caption.as_str()));

            ui.add_space(12.0);
            ui.vertical(|ui| {
                for phase in SLEEP_DATA {
                    ui.horizontal(|ui| {
                        let (rect, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
                        ui.painter().circle_filled(rect.center(), 5.0, color_mapping::fixture_color(phase.color));
                        ui.label(widgets::muted(phase.phase, palette));
                        ui.label(RichText::new(format!("{}h", phase.hours)).strong().color(palette.text));
                    });
                }
            });
        });
    });

    // Activity
    widgets::card(ui, palette, |ui| {
        widgets::section_title(ui, palette, "Activité physique");
        ui.add_space(8.0);
        activity_row(ui, palette, palette.red, "Calories", format!("{} / {} kcal", HEALTH_METRICS.calories, HEALTH_METRICS.calories_goal), HEALTH_METRICS.calories, HEALTH_METRICS.calories_goal);
        activity_row(
            ui,
            palette,
            palette.green,
            "Temps actif",
            format!("{} / {} min", HEALTH_METRICS.active_minutes, HEALTH_METRICS.active_minutes_goal),
            HEALTH_METRICS.active_minutes,
            HEALTH_METRICS.active_minutes_goal,
        );
        activity_row(
            ui,
            palette,
            palette.primary,
            "Pas",
            format_goal(HEALTH_METRICS.steps, HEALTH_METRICS.steps_goal),
            HEALTH_METRICS.steps,
            HEALTH_METRICS.steps_goal,
        );
        ui.label(widgets::muted(
            format!(
                "Encore {} pas pour atteindre l'objectif",
                format_grouped(HEALTH_METRICS.steps_remaining())
            ),
            palette,
        ));

        ui.add_space(8.0);
        let (days, steps): (Vec<&str>, Vec<f32>) =
            ACTIVITY_HISTORY.iter().map(|d| (d.day, d.steps as f32)).unzip();
        chart_renderer::render_bar_chart(ui, palette, &days, &steps, palette.primary, 120.0);
    });

    // Tips
    widgets::section_title(ui, palette, "Conseils personnalisés");
    ui.add_space(6.0);
    for tip in HEALTH_TIPS {
        widgets::card(ui, palette, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(tip.icon).size(22.0));
                ui.vertical(|ui| {
                    ui.label(RichText::new(tip.title).strong().color(palette.text));
                    ui.label(RichText::new(tip.tip).size(13.0).color(palette.text_muted));
                });
            });
        });
    }

    interaction
}

fn stat(ui: &mut egui::Ui, palette: &ThemePalette, label: &str, value: String) {
    ui.vertical_centered(|ui| {
        ui.label(widgets::muted(label, palette));
        ui.label(RichText::new(value).strong().color(palette.text));
    });
}

fn activity_row(
    ui: &mut egui::Ui,
    palette: &ThemePalette,
    color: egui::Color32,
    label: &str,
    value: String,
    current: u32,
    goal: u32,
) {
    ui.horizontal(|ui| {
        ui.label(widgets::muted(label, palette));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(widgets::muted(format_percent(current, goal), palette));
            ui.label(RichText::new(value).strong().color(palette.text));
        });
    });
    chart_renderer::render_progress_bar(ui, palette, geometry::ring_progress(current as f32, goal as f32), color);
    ui.add_space(8.0);
}
