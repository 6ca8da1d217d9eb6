//! Application-level modules for the PawTrack app.
//!
//! This module contains the application coordinators and centralized state management.

mod app_state;
mod application_coordinator;
mod theme_coordinator;

pub use app_state::AppState;
pub use application_coordinator::{ApplicationCoordinator, PageInteraction};
pub use theme_coordinator::ThemeCoordinator;
