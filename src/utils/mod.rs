//! Utility modules for the PawTrack app.

pub mod formatting;

// Re-export commonly used functions
pub use formatting::{format_goal, format_grouped, format_percent};
