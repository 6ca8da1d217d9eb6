//! Rendering subsystem for charts and the mock map
//!
//! This module contains the painter-level rendering for the PawTrack pages:
//! - Chart rendering (area, bar, donut, activity rings, progress bars)
//! - Map rendering (grid, safe zones, trail, position pin)

pub mod chart_renderer;
pub mod map_renderer;
