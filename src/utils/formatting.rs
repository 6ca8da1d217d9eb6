//! Text formatting utilities for the PawTrack app.
//!
//! Numbers are formatted the way the French interface displays them.

/// Formats an integer with a space between thousands groups.
///
/// # Examples
/// ```ignore
/// assert_eq!(format_grouped(8420), "8 420");
/// assert_eq!(format_grouped(1234567), "1 234 567");
/// ```
pub fn format_grouped(value: u32) -> String {
    let s = value.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();
    for (i, ch) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(' ');
        }
        result.push(*ch);
    }
    result
}

/// Formats `value / goal`, grouping both sides.
pub fn format_goal(value: u32, goal: u32) -> String {
    format!("{} / {}", format_grouped(value), format_grouped(goal))
}

/// Progress toward a goal as a whole percentage, capped at 100.
pub fn format_percent(value: u32, goal: u32) -> String {
    if goal == 0 {
        return "100%".to_string();
    }
    let percent = (u64::from(value) * 100 / u64::from(goal)).min(100);
    format!("{percent}%")
}
