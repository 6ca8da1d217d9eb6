//! Presentation layer for visual styling and color mapping.
//!
//! This module contains presentation logic separated from the sample data:
//! - Color mapping for badges, alerts, and log entries
//! - Geometry for the activity rings and charts

pub mod color_mapping;
pub mod geometry;
