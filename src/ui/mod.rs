//! UI page rendering subsystem
//!
//! - Shared widgets (cards, badges, metric cards, settings rows)
//! - Tab bar (bottom navigation)
//! - Pages (dashboard, health, behavior, map, profile)
//! - Page manager (layout and interaction forwarding)

pub mod widgets;
pub mod tab_bar;
pub mod dashboard_page;
pub mod health_page;
pub mod behavior_page;
pub mod map_page;
pub mod profile_page;
pub mod page_manager;
