//! State management modules for the PawTrack app.
//!
//! This module contains state-only logic (no UI concerns):
//! - Navigation state (active tab, page transition timing)
//! - Page state (session-only page controls)

mod navigation;
mod page_state;

pub use navigation::{NavigationState, Tab};
pub use page_state::{HeartRateRange, PageState};
