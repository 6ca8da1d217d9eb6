//! Page orchestration and layout management.
//!
//! Lays out the bottom tab bar, the error banner and the active page, and
//! forwards whatever the user did to the application coordinator.

use eframe::egui;
use egui::RichText;
use pawtrack::ThemePalette;

use crate::app::{AppState, PageInteraction, ThemeCoordinator};
use crate::state::Tab;
use crate::ui::{behavior_page, dashboard_page, health_page, map_page, profile_page, tab_bar};

/// Manages the layout and rendering of the tab bar and pages.
pub struct PageManager;

impl PageManager {
    /// Renders the whole window.
    ///
    /// Called from `eframe::App::update()` after the theme scope is provided.
    pub fn render_all(ctx: &egui::Context, state: &mut AppState) -> Option<PageInteraction> {
        let palette = match ThemeCoordinator::palette(state) {
            Ok(palette) => palette,
            Err(err) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.colored_label(egui::Color32::RED, err.to_string());
                });
                return None;
            }
        };

        let mut interaction: Option<PageInteraction> = None;
        let now = ctx.input(|i| i.time);

        // Tab bar at the very bottom
        let tab_frame = egui::Frame::new()
            .fill(palette.card)
            .inner_margin(egui::Margin::symmetric(8, 6))
            .stroke(egui::Stroke::new(0.5, palette.border));
        egui::TopBottomPanel::bottom("tab_bar")
            .frame(tab_frame)
            .show(ctx, |ui| {
                if let Some(tab) = tab_bar::render_tab_bar(ui, &palette, state.navigation.active_tab()) {
                    interaction = Some(PageInteraction::TabSelected(tab));
                }
            });

        if let Some(message) = state.error_message.clone() {
            let banner_frame = egui::Frame::new()
                .fill(pawtrack::with_alpha(palette.red, 40))
                .inner_margin(egui::Margin::symmetric(12, 8));
            egui::TopBottomPanel::top("error_banner")
                .frame(banner_frame)
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(format!("⚠ {message}")).color(palette.red));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.small_button("✖").clicked() {
                                interaction = Some(PageInteraction::ErrorDismissed);
                            }
                        });
                    });
                });
        }

        let page_frame = egui::Frame::new()
            .fill(palette.background)
            .inner_margin(egui::Margin::symmetric(16, 0));
        egui::CentralPanel::default()
            .frame(page_frame)
            .show(ctx, |ui| {
                let tab = state.navigation.active_tab();
                ui.multiply_opacity(state.navigation.page_opacity(now));
                if state.navigation.is_transitioning(now) {
                    ctx.request_repaint();
                }

                let offset = egui::vec2(state.navigation.page_offset(now), 0.0);
                let page_rect = ui.max_rect().translate(offset);
                ui.scope_builder(egui::UiBuilder::new().max_rect(page_rect), |ui| {
                    egui::ScrollArea::vertical()
                        .id_salt(tab.label())
                        .auto_shrink([false, false])
                        .show(ui, |ui| {
                            if let Some(page_interaction) = Self::render_page(ui, &palette, state, tab) {
                                interaction = Some(page_interaction);
                            }
                            ui.add_space(16.0);
                        });
                });
            });

        interaction
    }

    fn render_page(
        ui: &mut egui::Ui,
        palette: &ThemePalette,
        state: &AppState,
        tab: Tab,
    ) -> Option<PageInteraction> {
        match tab {
            Tab::Dashboard => {
                dashboard_page::render_dashboard_page(ui, palette);
                None
            }
            Tab::Health => health_page::render_health_page(ui, palette, &state.pages),
            Tab::Behavior => {
                behavior_page::render_behavior_page(ui, palette);
                None
            }
            Tab::Map => {
                map_page::render_map_page(ui, palette);
                None
            }
            Tab::Profile => profile_page::render_profile_page(ui, palette, &state.pages),
        }
    }
}
