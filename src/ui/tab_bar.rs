//! Bottom tab bar rendering
//!
//! Five equal columns; the active tab is tinted and marked with a dot.

use eframe::egui;
use egui::RichText;
use pawtrack::ThemePalette;

use crate::state::Tab;

/// Renders the tab bar and returns the tab the user clicked, if any
pub fn render_tab_bar(ui: &mut egui::Ui, palette: &ThemePalette, active: Tab) -> Option<Tab> {
    let mut selected = None;

    ui.columns(Tab::ALL.len(), |columns| {
        for (column, tab) in columns.iter_mut().zip(Tab::ALL) {
            column.vertical_centered(|ui| {
                let is_active = tab == active;
                let color = if is_active { palette.primary } else { palette.text_muted };

                let icon = RichText::new(tab.icon()).size(if is_active { 22.0 } else { 20.0 }).color(color);
                let label = RichText::new(tab.label()).size(10.0).color(color);

                let icon_response = ui.add(egui::Button::new(icon).frame(false));
                let label_response = ui.add(egui::Button::new(label).frame(false));

                if is_active {
                    let below = label_response.rect.center_bottom() + egui::vec2(0.0, 3.0);
                    ui.painter().circle_filled(below, 2.0, palette.primary);
                }

                if icon_response.clicked() || label_response.clicked() {
                    selected = Some(tab);
                }
            });
        }
    });

    selected
}
