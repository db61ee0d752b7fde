//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::{EventType, Worker};
use ratatui::prelude::Color;

/// Get a ratatui color for a worker based on its type
pub fn get_worker_color(worker: &Worker) -> Color {
    match worker {
        Worker::PageFetcher => Color::Cyan,
        Worker::Dashboard => Color::LightGreen,
    }
}

/// Icon shown in front of an activity log line
pub fn event_icon(event_type: EventType) -> &'static str {
    match event_type {
        EventType::Success => "✅",
        EventType::Error => "❌",
        EventType::Refresh => "🔄",
        EventType::Stale => "⏭",
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some((date_part, time_part)) = timestamp.split_once(' ') {
        // Extract MM-DD from date and HH:MM:SS from time
        if let (Some(month_day), Some(clock)) = (date_part.get(5..10), time_part.get(0..8)) {
            return format!("{} {}", month_day, clock);
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Shorten reqwest and HTTP error messages for the activity log
pub fn clean_http_error_message(msg: &str) -> String {
    if msg.contains("Reqwest error") && msg.contains("timed out") {
        return "Request timed out".to_string();
    }
    if msg.contains("Reqwest error") {
        return "Network error".to_string();
    }
    if let Some(pos) = msg.find("HTTP error with status ") {
        let status = &msg[pos + "HTTP error with status ".len()..];
        let code: String = status.chars().take_while(|c| c.is_ascii_digit()).collect();
        return format!("{}HTTP {}", &msg[..pos], code);
    }
    msg.to_string()
}

/// First line of a multi-line attribute, cut to `width` characters.
pub fn cell_text(value: Option<&str>, width: usize) -> String {
    let line = value.and_then(|v| v.lines().next()).unwrap_or_default();
    truncate(line, width)
}

/// Cut `text` to at most `width` characters, marking the cut with an ellipsis.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

pub fn year_text(year: Option<i32>) -> String {
    year.map(|y| y.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(
            format_compact_timestamp("2026-10-16 09:41:07"),
            "10-16 09:41:07"
        );
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn test_clean_http_error_message() {
        assert_eq!(
            clean_http_error_message(
                "Failed to fetch page 3: HTTP error with status 503: <html>...</html>"
            ),
            "Failed to fetch page 3: HTTP 503"
        );
        assert_eq!(
            clean_http_error_message("Failed to fetch page 3: Reqwest error: operation timed out"),
            "Request timed out"
        );
        assert_eq!(clean_http_error_message("Loaded 12"), "Loaded 12");
    }

    #[test]
    fn test_truncate_and_cells() {
        assert_eq!(truncate("Nocturne", 20), "Nocturne");
        assert_eq!(truncate("Nocturne in Blue", 8), "Nocturn…");
        assert_eq!(truncate("abc", 0), "");
        assert_eq!(
            cell_text(Some("James McNeill Whistler\nAmerican, 1834-1903"), 40),
            "James McNeill Whistler"
        );
        assert_eq!(cell_text(None, 10), "");
        assert_eq!(year_text(Some(-200)), "-200");
        assert_eq!(year_text(None), "");
    }
}
