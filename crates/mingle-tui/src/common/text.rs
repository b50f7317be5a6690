//! Text utilities for TUI rendering.

use chrono::{DateTime, Datelike, Utc};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates a string with ellipsis if it exceeds `max_width` (unicode-aware).
///
/// Uses unicode width for accurate terminal column calculation, handling
/// wide characters (CJK, emoji) correctly.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut truncated = String::new();
    for ch in text.chars() {
        let next_width = truncated.width() + ch.width().unwrap_or(0);
        if next_width + 1 > max_width {
            break;
        }
        truncated.push(ch);
    }
    truncated.push('…');
    truncated
}

/// Formats a timestamp relative to `now` for list rows.
///
/// Same-day timestamps render as a clock time, yesterday as "Yesterday",
/// anything older as a short date.
pub fn format_relative(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let date = at.date_naive();
    let today = now.date_naive();
    if date == today {
        return at.format("%H:%M").to_string();
    }
    if today.pred_opt() == Some(date) {
        return "Yesterday".to_string();
    }
    if date.year() == today.year() {
        return at.format("%b %d").to_string();
    }
    at.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_with_ellipsis("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate_with_ellipsis("hello world", 8), "hello w…");
    }

    #[test]
    fn test_truncate_tiny_width() {
        assert_eq!(truncate_with_ellipsis("hello", 1), "…");
    }

    #[test]
    fn test_format_relative_same_day() {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 18, 0, 0).unwrap();
        let at = Utc.with_ymd_and_hms(2025, 6, 15, 10, 30, 0).unwrap();
        assert_eq!(format_relative(at, now), "10:30");
    }

    #[test]
    fn test_format_relative_yesterday() {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 8, 0, 0).unwrap();
        let at = Utc.with_ymd_and_hms(2025, 6, 14, 23, 0, 0).unwrap();
        assert_eq!(format_relative(at, now), "Yesterday");
    }

    #[test]
    fn test_format_relative_same_year() {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 8, 0, 0).unwrap();
        let at = Utc.with_ymd_and_hms(2025, 3, 2, 12, 0, 0).unwrap();
        assert_eq!(format_relative(at, now), "Mar 02");
    }
}
