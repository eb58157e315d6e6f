//! Date helper functions
//!
//! Post dates are free-form strings; these helpers only interpret them for
//! display and for sitemap `<lastmod>` values. Ordering never uses them.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse a front-matter date string in the common formats
pub fn parse_date_string(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    let formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];

    for fmt in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    // RFC 3339 / ISO 8601 with offset; keep the wall-clock time as written
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.naive_local())
}

/// W3C date (`YYYY-MM-DD`) used for sitemap `<lastmod>`
pub fn date_w3c(s: &str) -> Option<String> {
    parse_date_string(s).map(|dt| dt.format("%Y-%m-%d").to_string())
}

/// Format date in full format (like "January 5, 2024")
pub fn full_date(s: &str) -> Option<String> {
    parse_date_string(s).map(|dt| dt.format("%B %-d, %Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formats() {
        for s in [
            "2024-01-15",
            "2024/01/15",
            "2024-01-15 10:30:00",
            "2024-01-15T10:30:00",
            "2024-01-15T10:30:00.123",
            "2024-01-15T10:30:00+02:00",
            "2024-01-15T10:30:00Z",
        ] {
            let dt = parse_date_string(s).unwrap_or_else(|| panic!("failed to parse {}", s));
            assert_eq!(dt.format("%Y-%m-%d").to_string(), "2024-01-15");
        }
    }

    #[test]
    fn test_unparseable() {
        assert!(parse_date_string("").is_none());
        assert!(parse_date_string("last tuesday").is_none());
        assert!(parse_date_string("2024-13-45").is_none());
    }

    #[test]
    fn test_date_w3c() {
        assert_eq!(date_w3c("2024-01-15 10:30:00").as_deref(), Some("2024-01-15"));
        assert_eq!(date_w3c("soon"), None);
    }

    #[test]
    fn test_full_date() {
        assert_eq!(full_date("2024-01-05").as_deref(), Some("January 5, 2024"));
    }
}
