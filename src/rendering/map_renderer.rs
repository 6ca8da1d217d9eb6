//! Mock map rendering
//!
//! Draws the map placeholder: a grid, the safe zones, the day's trail and the
//! pet's current position. Coordinates are projected linearly; at city scale
//! that is close enough for a mockup.

use eframe::egui;
use egui::{pos2, Pos2, Rect, Shape, Stroke};
use pawtrack::sample_data::{LocationData, LocationPoint, SafeZone};
use pawtrack::{with_alpha, ThemePalette};

/// Meters per degree of latitude.
const METERS_PER_DEGREE: f64 = 111_320.0;

/// Linear projection of a lat/lng bounding box onto a screen rect.
#[derive(Debug, Clone, Copy)]
pub struct MapProjection {
    min_lat: f64,
    max_lat: f64,
    min_lng: f64,
    max_lng: f64,
    rect: Rect,
}

impl MapProjection {
    /// Fits `coords` (lat, lng) into `rect`, leaving `padding` points free on
    /// every side.
    pub fn fit(coords: &[(f64, f64)], rect: Rect, padding: f32) -> Self {
        let mut min_lat = f64::INFINITY;
        let mut max_lat = f64::NEG_INFINITY;
        let mut min_lng = f64::INFINITY;
        let mut max_lng = f64::NEG_INFINITY;
        for &(lat, lng) in coords {
            min_lat = min_lat.min(lat);
            max_lat = max_lat.max(lat);
            min_lng = min_lng.min(lng);
            max_lng = max_lng.max(lng);
        }

        if coords.is_empty() {
            (min_lat, max_lat, min_lng, max_lng) = (0.0, 0.0, 0.0, 0.0);
        }

        Self {
            min_lat,
            max_lat,
            min_lng,
            max_lng,
            rect: rect.shrink(padding),
        }
    }

    pub fn project(&self, lat: f64, lng: f64) -> Pos2 {
        let x = normalize(lng, self.min_lng, self.max_lng);
        let y = normalize(lat, self.min_lat, self.max_lat);
        pos2(
            self.rect.left() + x * self.rect.width(),
            self.rect.bottom() - y * self.rect.height(),
        )
    }

    /// Converts a ground distance to screen points along the latitude axis.
    pub fn meters_to_points(&self, meters: f64) -> f32 {
        let span = self.max_lat - self.min_lat;
        if span <= 0.0 {
            return 0.0;
        }
        (meters / METERS_PER_DEGREE / span) as f32 * self.rect.height()
    }
}

/// Position of `value` within `[min, max]`, centered when the range is empty.
fn normalize(value: f64, min: f64, max: f64) -> f32 {
    if max > min {
        ((value - min) / (max - min)) as f32
    } else {
        0.5
    }
}

/// Renders the mock map into a rect of the given height
pub fn render_map(
    ui: &mut egui::Ui,
    palette: &ThemePalette,
    location: &LocationData,
    zones: &[SafeZone],
    trail: &[LocationPoint],
    height: f32,
) {
    let (response, painter) =
        ui.allocate_painter(egui::vec2(ui.available_width(), height), egui::Sense::hover());
    let rect = response.rect;

    painter.rect_filled(rect, 16.0, with_alpha(palette.primary, 18));

    // Grid
    let grid_stroke = Stroke::new(0.5, with_alpha(palette.primary, 45));
    let mut x = rect.left();
    while x <= rect.right() {
        painter.line_segment([pos2(x, rect.top()), pos2(x, rect.bottom())], grid_stroke);
        x += 20.0;
    }
    let mut y = rect.top();
    while y <= rect.bottom() {
        painter.line_segment([pos2(rect.left(), y), pos2(rect.right(), y)], grid_stroke);
        y += 20.0;
    }

    let mut coords: Vec<(f64, f64)> = trail.iter().map(|p| (p.lat, p.lng)).collect();
    coords.extend(zones.iter().map(|z| (z.latitude, z.longitude)));
    coords.push((location.latitude, location.longitude));
    let projection = MapProjection::fit(&coords, rect, 28.0);

    for zone in zones {
        let center = projection.project(zone.latitude, zone.longitude);
        let radius = projection.meters_to_points(f64::from(zone.radius_m)).max(8.0);
        let color = if zone.active { palette.green } else { palette.text_muted };
        painter.circle(center, radius, with_alpha(color, 30), Stroke::new(1.0, color));
    }

    let trail_points: Vec<Pos2> = trail.iter().map(|p| projection.project(p.lat, p.lng)).collect();
    painter.add(Shape::dashed_line(
        &trail_points,
        Stroke::new(2.0, palette.primary),
        6.0,
        4.0,
    ));

    let pin = projection.project(location.latitude, location.longitude);
    painter.circle_filled(pin, 14.0, with_alpha(palette.primary, 50));
    painter.circle_filled(pin, 7.0, palette.primary);
    painter.circle_stroke(pin, 7.0, Stroke::new(2.0, palette.card));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> Rect {
        Rect::from_min_max(pos2(0.0, 0.0), pos2(100.0, 100.0))
    }

    #[test]
    fn test_projection_corners() {
        let projection = MapProjection::fit(&[(48.0, 2.0), (49.0, 3.0)], rect(), 0.0);
        assert_eq!(projection.project(48.0, 2.0), pos2(0.0, 100.0));
        assert_eq!(projection.project(49.0, 3.0), pos2(100.0, 0.0));
    }

    #[test]
    fn test_single_point_is_centered() {
        let projection = MapProjection::fit(&[(48.8566, 2.3522)], rect(), 10.0);
        assert_eq!(projection.project(48.8566, 2.3522), pos2(50.0, 50.0));
        assert_eq!(projection.meters_to_points(50.0), 0.0);
    }

    #[test]
    fn test_meters_to_points() {
        let projection = MapProjection::fit(&[(48.0, 2.0), (49.0, 3.0)], rect(), 0.0);
        assert!((projection.meters_to_points(METERS_PER_DEGREE / 2.0) - 50.0).abs() < 1e-3);
    }
}
