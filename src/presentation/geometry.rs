//! Geometry for activity rings and charts.
//!
//! Pure functions: they take sizes and values and return points, so the
//! widgets stay thin and the math is testable without a painter.

use egui::{pos2, Pos2, Rect};
use std::f32::consts::{FRAC_PI_2, TAU};

/// Gap between concentric activity rings, in points.
pub const RING_GAP: f32 = 4.0;

/// Fraction of the goal reached, clamped to `[0, 1]`. A zero goal counts as
/// complete.
pub fn ring_progress(value: f32, goal: f32) -> f32 {
    if goal <= 0.0 {
        return 1.0;
    }
    (value / goal).clamp(0.0, 1.0)
}

/// Radius of ring `index` (0 is outermost) in a square of side `size`.
pub fn ring_radius(size: f32, stroke_width: f32, index: usize) -> f32 {
    let base = (size - stroke_width * 2.0) / 2.0;
    base - index as f32 * (stroke_width + RING_GAP)
}

/// Points along an arc that starts at 12 o'clock and runs clockwise through
/// `sweep` radians.
pub fn arc_points(center: Pos2, radius: f32, start: f32, sweep: f32) -> Vec<Pos2> {
    let segments = ((sweep.abs() / TAU) * 64.0).ceil().max(1.0) as usize;
    (0..=segments)
        .map(|i| {
            let angle = start - FRAC_PI_2 + sweep * i as f32 / segments as f32;
            pos2(center.x + radius * angle.cos(), center.y + radius * angle.sin())
        })
        .collect()
}

/// `(min, max)` of the values, widened by `padding` on both ends.
pub fn value_range(values: &[f32], padding: f32) -> (f32, f32) {
    let min = values.iter().copied().fold(f32::INFINITY, f32::min);
    let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    (min - padding, max + padding)
}

/// Maps values to points spread evenly across `rect`, higher values nearer
/// the top.
pub fn chart_points(values: &[f32], rect: Rect, range: (f32, f32)) -> Vec<Pos2> {
    let (min, max) = range;
    let span = if max > min { max - min } else { 1.0 };
    let step = if values.len() > 1 {
        rect.width() / (values.len() - 1) as f32
    } else {
        0.0
    };

    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let t = ((value - min) / span).clamp(0.0, 1.0);
            pos2(rect.left() + step * i as f32, rect.bottom() - t * rect.height())
        })
        .collect()
}

/// Start angle and sweep of each slice of a pie, in radians, clockwise from
/// 12 o'clock.
pub fn pie_slices(values: &[f32]) -> Vec<(f32, f32)> {
    let total: f32 = values.iter().sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut start = 0.0;
    values
        .iter()
        .map(|value| {
            let sweep = value / total * TAU;
            let slice = (start, sweep);
            start += sweep;
            slice
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_progress_clamps() {
        assert!((ring_progress(245.0, 350.0) - 0.7).abs() < 1e-6);
        assert_eq!(ring_progress(400.0, 350.0), 1.0);
        assert_eq!(ring_progress(-1.0, 10.0), 0.0);
        assert_eq!(ring_progress(5.0, 0.0), 1.0);
    }

    #[test]
    fn test_ring_radius_shrinks_inward() {
        assert_eq!(ring_radius(130.0, 10.0, 0), 55.0);
        assert_eq!(ring_radius(130.0, 10.0, 1), 41.0);
        assert_eq!(ring_radius(130.0, 10.0, 2), 27.0);
    }

    #[test]
    fn test_arc_starts_at_top() {
        let points = arc_points(pos2(0.0, 0.0), 10.0, 0.0, TAU / 4.0);
        let first = points[0];
        let last = points[points.len() - 1];
        assert!(first.x.abs() < 1e-4 && (first.y + 10.0).abs() < 1e-4);
        assert!((last.x - 10.0).abs() < 1e-4 && last.y.abs() < 1e-4);
    }

    #[test]
    fn test_chart_points_span_rect() {
        let rect = Rect::from_min_max(pos2(0.0, 0.0), pos2(100.0, 50.0));
        let points = chart_points(&[10.0, 20.0, 30.0], rect, (10.0, 30.0));
        assert_eq!(points, vec![pos2(0.0, 50.0), pos2(50.0, 25.0), pos2(100.0, 0.0)]);
    }

    #[test]
    fn test_value_range_empty() {
        assert_eq!(value_range(&[], 5.0), (0.0, 1.0));
        assert_eq!(value_range(&[62.0, 95.0], 5.0), (57.0, 100.0));
    }

    #[test]
    fn test_pie_slices_cover_circle() {
        let slices = pie_slices(&[4.5, 4.0, 2.0]);
        assert_eq!(slices.len(), 3);
        let (start, sweep) = slices[2];
        assert!((start + sweep - TAU).abs() < 1e-4);
        assert!(pie_slices(&[0.0]).is_empty());
    }
}
