//! 表示用フォーマット関数

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::messages::NOT_AVAILABLE;
use crate::types::Job;

/// バイト数をKB表記に（小数2桁）
pub fn format_size_kb(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}

/// 未設定・空文字は "N/A"
pub fn display_or_na(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => NOT_AVAILABLE,
    }
}

/// 市区・州・国を空欄を除いて連結
pub fn job_location(job: &Job) -> String {
    [job.city.as_str(), job.state.as_str(), job.country.as_str()]
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// 説明文を `max_chars` 文字で切り詰め
pub fn description_snippet(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", text[..idx].trim_end()),
        None => text.to_string(),
    }
}

/// 掲載日を YYYY-MM-DD に。解釈できなければそのまま返す
pub fn format_posted_date(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%Y-%m-%d").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_kb() {
        assert_eq!(format_size_kb(2048), "2.00 KB");
        assert_eq!(format_size_kb(1536), "1.50 KB");
        assert_eq!(format_size_kb(1000), "0.98 KB");
        assert_eq!(format_size_kb(0), "0.00 KB");
    }

    #[test]
    fn test_display_or_na() {
        assert_eq!(display_or_na(Some("jane@example.com")), "jane@example.com");
        assert_eq!(display_or_na(Some("  ")), "N/A");
        assert_eq!(display_or_na(None), "N/A");
    }

    #[test]
    fn test_job_location_skips_blanks() {
        let job = Job {
            city: "Austin".to_string(),
            state: "".to_string(),
            country: "United States".to_string(),
            ..Default::default()
        };
        assert_eq!(job_location(&job), "Austin, United States");
        assert_eq!(job_location(&Job::default()), "");
    }

    #[test]
    fn test_description_snippet() {
        assert_eq!(description_snippet("short", 200), "short");
        assert_eq!(description_snippet("abcdef", 3), "abc...");
        // マルチバイト境界で落ちないこと
        assert_eq!(description_snippet("日本語の説明文", 3), "日本語...");
    }

    #[test]
    fn test_format_posted_date() {
        assert_eq!(format_posted_date("2025-03-01T10:00:00Z"), "2025-03-01");
        assert_eq!(format_posted_date("2025-03-01T10:00:00"), "2025-03-01");
        assert_eq!(format_posted_date("2025-03-01"), "2025-03-01");
        assert_eq!(format_posted_date("3 days ago"), "3 days ago");
    }
}
