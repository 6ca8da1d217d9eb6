//! Render-root and system-signal capabilities.
//!
//! [`RootMarkers`] is a plain marker set for hosts without a GUI (CLI, tests).
//! [`EguiRootStyler`] applies the marker to an egui context instead.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use crate::theme::{ThemeMode, ThemePalette};
use crate::traits::{RenderRootStyler, SystemThemeSignal};

/// Set of theme markers currently on the render root.
///
/// Cloning yields a handle to the same set, so an observer can keep a clone
/// while the manager owns the styler.
#[derive(Debug, Clone, Default)]
pub struct RootMarkers {
    markers: Rc<RefCell<BTreeSet<ThemeMode>>>,
}

impl RootMarkers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, marker: ThemeMode) -> bool {
        self.markers.borrow().contains(&marker)
    }

    /// Markers present, in `ThemeMode` order.
    pub fn active(&self) -> Vec<ThemeMode> {
        self.markers.borrow().iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.markers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.borrow().is_empty()
    }
}

impl RenderRootStyler for RootMarkers {
    fn add_marker(&mut self, marker: ThemeMode) {
        self.markers.borrow_mut().insert(marker);
    }

    fn remove_marker(&mut self, marker: ThemeMode) {
        self.markers.borrow_mut().remove(&marker);
    }
}

fn egui_theme(mode: ThemeMode) -> egui::Theme {
    match mode {
        ThemeMode::Light => egui::Theme::Light,
        ThemeMode::Dark => egui::Theme::Dark,
    }
}

/// Render root backed by an egui context: adding a marker installs that
/// mode's palette as the context visuals.
///
/// The context holds a single active theme, so adding a marker replaces the
/// previous one and removal has nothing to undo.
pub struct EguiRootStyler {
    ctx: egui::Context,
}

impl EguiRootStyler {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl RenderRootStyler for EguiRootStyler {
    fn add_marker(&mut self, marker: ThemeMode) {
        let theme = egui_theme(marker);
        self.ctx.set_theme(theme);
        self.ctx.set_visuals_of(theme, ThemePalette::for_mode(marker).visuals());
        self.ctx.request_repaint();
    }

    fn remove_marker(&mut self, _marker: ThemeMode) {}
}

/// System signal captured from egui's view of the host color scheme.
#[derive(Debug, Clone, Copy)]
pub struct EguiSystemSignal {
    theme: Option<egui::Theme>,
}

impl EguiSystemSignal {
    /// Reads the host preference once; later changes are not observed.
    pub fn capture(ctx: &egui::Context) -> Self {
        Self {
            theme: ctx.system_theme(),
        }
    }
}

impl SystemThemeSignal for EguiSystemSignal {
    fn prefers_dark(&self) -> Option<bool> {
        self.theme.map(|theme| theme == egui::Theme::Dark)
    }
}

/// Fixed system signal, for hosts without a color-scheme query.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSystemSignal(pub Option<bool>);

impl SystemThemeSignal for StaticSystemSignal {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}
