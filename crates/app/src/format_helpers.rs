//! Display formatting for dates coming back from the lending API.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%b %-d, %Y";

/// Format an API date as `"Nov 1, 2025"`.
///
/// Accepts `YYYY-MM-DD`, RFC 3339, or a naive ISO datetime. Missing or
/// empty input shows `"N/A"`; anything else is returned unchanged.
pub fn format_date(value: Option<&str>) -> String {
    let raw = match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => return "N/A".to_string(),
    };

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format(DISPLAY_FORMAT).to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.date_naive().format(DISPLAY_FORMAT).to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return dt.date().format(DISPLAY_FORMAT).to_string();
        }
    }
    raw.to_string()
}

/// `today + days` as `YYYY-MM-DD`, the value format of a date input.
pub fn date_input_value(today: NaiveDate, days: i64) -> String {
    (today + chrono::Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

/// Default expected return date for a new loan: one week out.
pub fn default_return_date() -> String {
    date_input_value(chrono::Local::now().date_naive(), 7)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_date() {
        assert_eq!(format_date(Some("2025-11-01")), "Nov 1, 2025");
        assert_eq!(format_date(Some("2024-02-29")), "Feb 29, 2024");
    }

    #[test]
    fn datetimes_keep_the_date_part() {
        assert_eq!(format_date(Some("2026-01-20T21:35:00Z")), "Jan 20, 2026");
        assert_eq!(format_date(Some("2026-01-20T21:35:00")), "Jan 20, 2026");
        assert_eq!(format_date(Some("2026-01-20 08:00:00.123")), "Jan 20, 2026");
    }

    #[test]
    fn missing_is_not_available() {
        assert_eq!(format_date(None), "N/A");
        assert_eq!(format_date(Some("")), "N/A");
        assert_eq!(format_date(Some("   ")), "N/A");
    }

    #[test]
    fn unparsable_input_is_unchanged() {
        assert_eq!(format_date(Some("next tuesday")), "next tuesday");
        assert_eq!(format_date(Some("2025-13-45")), "2025-13-45");
    }

    #[test]
    fn return_date_offsets_across_month_end() {
        let today = NaiveDate::from_ymd_opt(2025, 11, 28).unwrap();
        assert_eq!(date_input_value(today, 7), "2025-12-05");
    }
}
