//! Shared card widgets
//!
//! Building blocks used across the pages: cards, headers, badges, metric and
//! alert cards, the settings row and its switch.

use eframe::egui;
use egui::{Color32, RichText};
use pawtrack::sample_data::Alert;
use pawtrack::{with_alpha, ThemePalette};

use crate::presentation::color_mapping::{self, BadgeTone};

/// Rounded card filling the available width
pub fn card<R>(
    ui: &mut egui::Ui,
    palette: &ThemePalette,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    let inner = egui::Frame::new()
        .fill(palette.card)
        .corner_radius(16.0)
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
        .inner;
    ui.add_space(12.0);
    inner
}

/// Large page title with a muted subtitle
pub fn page_header(ui: &mut egui::Ui, palette: &ThemePalette, title: &str, subtitle: &str) {
    ui.add_space(8.0);
    ui.label(RichText::new(subtitle).size(13.0).color(palette.text_muted));
    ui.label(RichText::new(title).size(26.0).strong().color(palette.text));
    ui.add_space(12.0);
}

pub fn section_title(ui: &mut egui::Ui, palette: &ThemePalette, title: &str) {
    ui.label(RichText::new(title).size(16.0).strong().color(palette.text));
}

pub fn muted(text: impl Into<String>, palette: &ThemePalette) -> RichText {
    RichText::new(text).size(12.0).color(palette.text_muted)
}

/// Rounded pill with a tinted background; `pulse` adds a leading dot
pub fn status_badge(ui: &mut egui::Ui, palette: &ThemePalette, tone: BadgeTone, label: &str, pulse: bool) {
    let color = tone.color(palette);
    egui::Frame::new()
        .fill(with_alpha(color, 38))
        .corner_radius(12.0)
        .inner_margin(egui::Margin::symmetric(10, 4))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                if pulse {
                    let (rect, _) = ui.allocate_exact_size(egui::vec2(8.0, 8.0), egui::Sense::hover());
                    ui.painter().circle_filled(rect.center(), 4.0, color);
                }
                ui.label(RichText::new(label).size(13.0).strong().color(color));
            });
        });
}

/// Square icon tile with a tinted background
pub fn icon_tile(ui: &mut egui::Ui, icon: &str, color: Color32, size: f32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
    ui.painter().rect_filled(rect, size * 0.3, with_alpha(color, 38));
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        icon,
        egui::FontId::proportional(size * 0.5),
        color,
    );
}

/// Single metric: icon, label, large value with unit, optional subtitle
pub struct Metric<'a> {
    pub icon: &'a str,
    pub color: Color32,
    pub label: &'a str,
    pub value: String,
    pub unit: Option<&'a str>,
    pub subtitle: Option<String>,
}

pub fn metric_card(ui: &mut egui::Ui, palette: &ThemePalette, metric: Metric<'_>) {
    card(ui, palette, |ui| {
        icon_tile(ui, metric.icon, metric.color, 36.0);
        ui.add_space(8.0);
        ui.label(muted(metric.label, palette));
        ui.horizontal(|ui| {
            ui.label(RichText::new(&metric.value).size(24.0).strong().color(palette.text));
            if let Some(unit) = metric.unit {
                ui.label(muted(unit, palette));
            }
        });
        if let Some(subtitle) = &metric.subtitle {
            ui.label(muted(subtitle.as_str(), palette));
        }
    });
}

/// Alert with a severity-colored icon and border
pub fn alert_card(ui: &mut egui::Ui, palette: &ThemePalette, alert: &Alert) {
    let color = color_mapping::severity_color(alert.severity, palette);
    egui::Frame::new()
        .fill(with_alpha(color, 25))
        .stroke(egui::Stroke::new(1.0, with_alpha(color, 60)))
        .corner_radius(16.0)
        .inner_margin(14.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(color_mapping::severity_icon(alert.severity)).size(18.0).color(color));
                ui.vertical(|ui| {
                    ui.label(RichText::new(format!("{} {}", alert.kind.icon(), alert.title)).strong().color(palette.text));
                    ui.label(RichText::new(alert.message).size(13.0).color(palette.text_muted));
                    ui.label(muted(alert.time, palette));
                });
            });
        });
    ui.add_space(8.0);
}

/// Right-hand side of a settings row
pub enum Trailing<'a> {
    Toggle(bool),
    Value(&'a str),
    Chevron,
}

/// Settings list row. Returns true when the row's switch was flipped.
pub fn setting_row(
    ui: &mut egui::Ui,
    palette: &ThemePalette,
    icon: &str,
    icon_color: Color32,
    label: &str,
    trailing: Trailing<'_>,
) -> bool {
    let mut toggled = false;
    ui.horizontal(|ui| {
        icon_tile(ui, icon, icon_color, 30.0);
        ui.add_space(6.0);
        ui.label(RichText::new(label).strong().color(palette.text));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| match trailing {
            Trailing::Toggle(on) => {
                toggled = toggle_switch(ui, palette, on).clicked();
            }
            Trailing::Value(value) => {
                ui.label(RichText::new(value).size(13.0).color(palette.text_muted));
            }
            Trailing::Chevron => {
                ui.label(RichText::new("›").size(18.0).color(palette.text_muted));
            }
        });
    });
    ui.add_space(6.0);
    toggled
}

/// iOS-style switch; the knob slides with egui's bool animation
pub fn toggle_switch(ui: &mut egui::Ui, palette: &ThemePalette, on: bool) -> egui::Response {
    let desired_size = ui.spacing().interact_size.y * egui::vec2(2.0, 1.0);
    let (rect, response) = ui.allocate_exact_size(desired_size, egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let how_on = ui.ctx().animate_bool(response.id, on);
        let radius = 0.5 * rect.height();
        let fill = if on { palette.green } else { palette.secondary };
        ui.painter().rect_filled(rect, radius, fill);

        let knob_x = egui::lerp((rect.left() + radius)..=(rect.right() - radius), how_on);
        ui.painter()
            .circle_filled(egui::pos2(knob_x, rect.center().y), 0.8 * radius, Color32::WHITE);
    }

    response
}
