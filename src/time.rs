use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Formats a server timestamp as "Jan 2, 2025". Values in an unknown format
/// are returned as they are.
pub fn format_date(s: &str) -> String {
    const FORMAT: &str = "%b %-d, %Y";

    if s.is_empty() {
        return String::from("-");
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(s) {
        return datetime.format(FORMAT).to_string();
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return datetime.format(FORMAT).to_string();
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return datetime.format(FORMAT).to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.format(FORMAT).to_string();
    }
    s.to_string()
}
