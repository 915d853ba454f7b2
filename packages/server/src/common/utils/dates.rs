use chrono::{DateTime, NaiveDate, Utc};

/// Parse a catalog `addedOn` value into a UTC timestamp.
///
/// Accepts plain dates (`2024-01-31`, taken as midnight UTC) and RFC 3339
/// timestamps. Returns `None` for anything else.
pub fn parse_added_on(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }

    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
