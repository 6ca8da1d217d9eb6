//! PawTrack GUI Application
//!
//! Companion app for a connected pet collar, built with egui. The app shows:
//! - A dashboard with activity rings, vital signs and alerts
//! - Health, behavior and location pages fed by sample collar data
//! - A profile page whose dark-mode switch drives the theme preference
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `state/` - Navigation and session-only page state
//! - `presentation/` - Color mapping and chart geometry
//! - `rendering/` - Painter-level chart and map rendering
//! - `ui/` - Pages, widgets and layout
//! - `utils/` - Number formatting

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

mod app;
mod presentation;
mod rendering;
mod state;
mod ui;
mod utils;

use app::{AppState, ApplicationCoordinator, ThemeCoordinator};
use pawtrack::AppConfig;
use ui::page_manager::PageManager;

/// Application entry point.
fn main() -> eframe::Result {
    pawtrack::logging::init();

    let config = AppConfig::load_or_default();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_title("PawTrack"),
        ..Default::default()
    };

    eframe::run_native(
        "PawTrack",
        options,
        Box::new(move |_cc| Ok(Box::new(PawTrackApp::new(config)))),
    )
}

/// The main PawTrack application.
///
/// Delegates to coordinators:
/// - `ThemeCoordinator` installs the theme manager on the first frame
/// - `PageManager` lays out and renders the pages
/// - `ApplicationCoordinator` applies what the user did
struct PawTrackApp {
    /// Centralized application state
    state: AppState,
}

impl PawTrackApp {
    fn new(config: AppConfig) -> Self {
        Self {
            state: AppState::new(config),
        }
    }
}

impl eframe::App for PawTrackApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ThemeCoordinator::ensure_initialized(ctx, &mut self.state);

        if let Some(interaction) = PageManager::render_all(ctx, &mut self.state) {
            let now = ctx.input(|i| i.time);
            ApplicationCoordinator::handle_interaction(&mut self.state, interaction, now);
        }
    }
}
