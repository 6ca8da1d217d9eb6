//! Chart rendering logic
//!
//! Paints the area, bar and donut charts and the activity rings with the
//! active palette. Geometry comes from `presentation::geometry`.

use eframe::egui;
use egui::{pos2, Color32, Rect, Shape, Stroke};
use pawtrack::{with_alpha, ThemePalette};

use crate::presentation::geometry;

/// Height reserved under a chart for the x-axis labels.
const AXIS_LABEL_HEIGHT: f32 = 16.0;

/// One concentric ring: progress toward a goal in a given color.
pub struct Ring {
    pub value: f32,
    pub goal: f32,
    pub color: Color32,
}

/// Renders a filled line chart with one label per sample
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `palette` - Active theme palette
/// * `labels` - X-axis labels, one per value
/// * `values` - Samples, drawn left to right
/// * `color` - Line and fill color
/// * `height` - Total height including the label row
pub fn render_area_chart(
    ui: &mut egui::Ui,
    palette: &ThemePalette,
    labels: &[&str],
    values: &[f32],
    color: Color32,
    height: f32,
) {
    let (response, painter) =
        ui.allocate_painter(egui::vec2(ui.available_width(), height), egui::Sense::hover());
    let rect = response.rect;
    let plot = Rect::from_min_max(rect.min, pos2(rect.right(), rect.bottom() - AXIS_LABEL_HEIGHT));

    let points = geometry::chart_points(values, plot, geometry::value_range(values, 5.0));
    if points.is_empty() {
        return;
    }

    // Fill as one convex quad per segment; the whole area is not convex.
    let fill = with_alpha(color, 40);
    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        painter.add(Shape::convex_polygon(
            vec![a, b, pos2(b.x, plot.bottom()), pos2(a.x, plot.bottom())],
            fill,
            Stroke::NONE,
        ));
    }
    painter.add(Shape::line(points.clone(), Stroke::new(2.5, color)));

    for (point, label) in points.iter().zip(labels) {
        painter.text(
            pos2(point.x, plot.bottom() + 3.0),
            egui::Align2::CENTER_TOP,
            *label,
            egui::FontId::proportional(10.0),
            palette.text_muted,
        );
    }
}

/// Renders a bar chart with one labelled bar per value, scaled to the largest
pub fn render_bar_chart(
    ui: &mut egui::Ui,
    palette: &ThemePalette,
    labels: &[&str],
    values: &[f32],
    color: Color32,
    height: f32,
) {
    let (response, painter) =
        ui.allocate_painter(egui::vec2(ui.available_width(), height), egui::Sense::hover());
    let rect = response.rect;
    if values.is_empty() {
        return;
    }

    let plot_height = rect.height() - AXIS_LABEL_HEIGHT;
    let max = values.iter().copied().fold(0.0_f32, f32::max).max(1.0);
    let slot = rect.width() / values.len() as f32;
    let bar_width = slot * 0.55;

    for (i, (value, label)) in values.iter().zip(labels).enumerate() {
        let center_x = rect.left() + slot * (i as f32 + 0.5);
        let bar_height = plot_height * (value / max);
        let bar = Rect::from_min_max(
            pos2(center_x - bar_width / 2.0, rect.top() + plot_height - bar_height),
            pos2(center_x + bar_width / 2.0, rect.top() + plot_height),
        );
        painter.rect_filled(bar, 4.0, color);
        painter.text(
            pos2(center_x, rect.top() + plot_height + 3.0),
            egui::Align2::CENTER_TOP,
            *label,
            egui::FontId::proportional(10.0),
            palette.text_muted,
        );
    }
}

/// Renders a donut chart with an optional caption in the hole
pub fn render_donut(
    ui: &mut egui::Ui,
    palette: &ThemePalette,
    slices: &[(f32, Color32)],
    size: f32,
    thickness: f32,
    caption: Option<&str>,
) {
    let (response, painter) = ui.allocate_painter(egui::vec2(size, size), egui::Sense::hover());
    let center = response.rect.center();
    let radius = (size - thickness) / 2.0;

    let values: Vec<f32> = slices.iter().map(|(value, _)| *value).collect();
    for ((start, sweep), (_, color)) in geometry::pie_slices(&values).into_iter().zip(slices) {
        painter.add(Shape::line(
            geometry::arc_points(center, radius, start, sweep),
            Stroke::new(thickness, *color),
        ));
    }

    if let Some(caption) = caption {
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            caption,
            egui::FontId::proportional(16.0),
            palette.text,
        );
    }
}

/// Renders concentric progress rings, outermost first
pub fn render_activity_rings(
    ui: &mut egui::Ui,
    palette: &ThemePalette,
    rings: &[Ring],
    size: f32,
    stroke_width: f32,
) {
    let (response, painter) = ui.allocate_painter(egui::vec2(size, size), egui::Sense::hover());
    let center = response.rect.center();

    for (index, ring) in rings.iter().enumerate() {
        let radius = geometry::ring_radius(size, stroke_width, index);
        if radius <= 0.0 {
            break;
        }

        painter.circle_stroke(
            center,
            radius,
            Stroke::new(stroke_width, with_alpha(palette.text_muted, 50)),
        );

        let progress = geometry::ring_progress(ring.value, ring.goal);
        if progress > 0.0 {
            painter.add(Shape::line(
                geometry::arc_points(center, radius, 0.0, progress * std::f32::consts::TAU),
                Stroke::new(stroke_width, ring.color),
            ));
        }
    }
}

/// Renders a horizontal progress bar
pub fn render_progress_bar(ui: &mut egui::Ui, palette: &ThemePalette, progress: f32, color: Color32) {
    let (response, painter) =
        ui.allocate_painter(egui::vec2(ui.available_width(), 6.0), egui::Sense::hover());
    let rect = response.rect;
    painter.rect_filled(rect, 3.0, palette.secondary);

    let filled = Rect::from_min_max(
        rect.min,
        pos2(rect.left() + rect.width() * progress.clamp(0.0, 1.0), rect.bottom()),
    );
    painter.rect_filled(filled, 3.0, color);
}
