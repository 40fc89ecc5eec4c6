//! Date normalization between user input, the list API and display output.
//!
//! The speeches dataset originates in Philippine Time (fixed UTC+8, no
//! daylight saving). Query bounds are normalized to UTC instants for the
//! API; API instants are converted back to UTC+8 for display.

use chrono::{
    DateTime, Datelike, Duration, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime,
    TimeZone, Utc,
};

use crate::error::{Error, Result};

/// Instant format the list API expects in `$filter` bounds.
const API_INSTANT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.000Z";

/// Lower bound used when no start date is given.
pub const EPOCH_FLOOR: &str = "2000-01-01T00:00:00.000Z";

/// Philippine timezone (UTC+8)
pub fn ph_timezone() -> FixedOffset {
    FixedOffset::east_opt(8 * 3600).expect("UTC+8 is a valid fixed offset")
}

/// A parsed free-form date, with or without an explicit timezone.
enum Parsed {
    Zoned(DateTime<FixedOffset>),
    Naive(NaiveDateTime),
}

/// Parse a date string in various formats, trying RFC 3339 and RFC 2822
/// first, then a fixed list of common date and datetime formats.
fn parse_flexible(input: &str) -> Result<Parsed> {
    let s = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(Parsed::Zoned(dt));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Ok(Parsed::Zoned(dt));
    }

    const DATETIME_FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%m/%d/%Y %H:%M:%S",
    ];
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(Parsed::Naive(dt));
        }
    }

    const DATE_FORMATS: &[&str] = &[
        "%m/%d/%Y",
        "%Y-%m-%d",
        "%B %d, %Y",
        "%b %d, %Y",
        "%B %d %Y",
        "%d %B %Y",
        "%Y/%m/%d",
    ];
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Ok(Parsed::Naive(date.and_time(NaiveTime::MIN)));
        }
    }

    Err(Error::DateParse {
        input: input.to_string(),
        reason: "unrecognized date format".to_string(),
    })
}

/// Normalize a user-supplied date bound to a UTC instant string for the API.
///
/// `None` means "no bound": start bounds fall back to [`EPOCH_FLOOR`], end
/// bounds to the current instant. A partial `"M/D"` input is interpreted as
/// midnight Philippine Time in the current calendar year. Any other input is
/// parsed free-form; if it carries no timezone it is assumed to be
/// Philippine Time.
pub fn to_query_instant(input: Option<&str>, end_of_range: bool) -> Result<String> {
    let date_str = match input {
        Some(s) => s,
        None => {
            return Ok(if end_of_range {
                Utc::now().format(API_INSTANT_FORMAT).to_string()
            } else {
                EPOCH_FLOOR.to_string()
            });
        }
    };

    // Input like '6/29': assume current year, midnight Philippine Time
    let parts: Vec<&str> = date_str.split('/').collect();
    if parts.len() == 2 {
        let month: u32 = parts[0].trim().parse().map_err(|e| Error::DateParse {
            input: date_str.to_string(),
            reason: format!("invalid month: {}", e),
        })?;
        let day: u32 = parts[1].trim().parse().map_err(|e| Error::DateParse {
            input: date_str.to_string(),
            reason: format!("invalid day: {}", e),
        })?;

        let current_year = Local::now().year();
        let ph_midnight = NaiveDate::from_ymd_opt(current_year, month, day)
            .ok_or_else(|| Error::DateParse {
                input: date_str.to_string(),
                reason: format!("no such date: {}/{}/{}", month, day, current_year),
            })?
            .and_time(NaiveTime::MIN);

        // Convert to UTC for the API (subtract 8 hours)
        let utc_time = ph_midnight - Duration::hours(8);
        return Ok(utc_time.format(API_INSTANT_FORMAT).to_string());
    }

    let utc_date = match parse_flexible(date_str)? {
        Parsed::Zoned(dt) => dt.with_timezone(&Utc),
        // No timezone info: assume Philippine Time
        Parsed::Naive(naive) => Utc.from_utc_datetime(&(naive - Duration::hours(8))),
    };
    Ok(utc_date.format(API_INSTANT_FORMAT).to_string())
}

/// Convert a UTC instant string from the API to a Philippine Time datetime.
///
/// A `Z`-suffixed input must match `%Y-%m-%dT%H:%M:%SZ` exactly. Anything
/// else is parsed free-form, and a missing timezone is assumed to be UTC
/// (not Philippine Time; kept asymmetric with [`to_query_instant`] for
/// compatibility with existing output). Returns `None` on any parse
/// failure, logging a diagnostic instead of propagating.
pub fn to_display_local(utc_date_str: Option<&str>) -> Option<DateTime<FixedOffset>> {
    let s = utc_date_str?.trim();
    if s.is_empty() {
        return None;
    }

    let parsed: std::result::Result<DateTime<Utc>, String> = if s.ends_with('Z') {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%SZ")
            .map(|naive| Utc.from_utc_datetime(&naive))
            .map_err(|e| e.to_string())
    } else {
        parse_flexible(s)
            .map(|parsed| match parsed {
                Parsed::Zoned(dt) => dt.with_timezone(&Utc),
                Parsed::Naive(naive) => Utc.from_utc_datetime(&naive),
            })
            .map_err(|e| e.to_string())
    };

    match parsed {
        Ok(utc_date) => Some(utc_date.with_timezone(&ph_timezone())),
        Err(e) => {
            eprintln!("Error converting UTC to PHT: {}", e);
            None
        }
    }
}

/// Format a Philippine Time datetime for display, e.g. "January 01, 2023".
pub fn format_display(date: &DateTime<FixedOffset>) -> String {
    date.format("%B %d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_start_bound_is_epoch_floor() {
        let instant = to_query_instant(None, false).unwrap();
        assert_eq!(instant, "2000-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_missing_end_bound_is_now() {
        let instant = to_query_instant(None, true).unwrap();
        let expected_prefix = Utc::now().format("%Y-%m-%d").to_string();
        assert!(instant.starts_with(&expected_prefix));
        assert!(instant.ends_with(".000Z"));
    }

    #[test]
    fn test_partial_date_uses_current_year_and_ph_offset() {
        let instant = to_query_instant(Some("6/29"), false).unwrap();
        let year = Local::now().year();
        // Midnight PHT on June 29 is 16:00 UTC the day before
        assert_eq!(instant, format!("{}-06-28T16:00:00.000Z", year));
    }

    #[test]
    fn test_full_date_assumes_philippine_time() {
        let instant = to_query_instant(Some("01/01/2023"), false).unwrap();
        assert_eq!(instant, "2022-12-31T16:00:00.000Z");

        let instant = to_query_instant(Some("January 1, 2023"), false).unwrap();
        assert_eq!(instant, "2022-12-31T16:00:00.000Z");
    }

    #[test]
    fn test_explicit_timezone_is_respected() {
        let instant = to_query_instant(Some("2023-06-29T00:00:00+08:00"), false).unwrap();
        assert_eq!(instant, "2023-06-28T16:00:00.000Z");
    }

    #[test]
    fn test_unparseable_date_errors_with_input() {
        let err = to_query_instant(Some("not a date"), false).unwrap_err();
        assert!(err.to_string().contains("not a date"));
    }

    #[test]
    fn test_display_converts_utc_midnight_to_ph_morning() {
        let date = to_display_local(Some("2023-01-01T00:00:00Z")).unwrap();
        assert_eq!(format_display(&date), "January 01, 2023");
        assert_eq!(date.format("%H:%M").to_string(), "08:00");
    }

    #[test]
    fn test_display_z_suffix_is_strict() {
        // Fractional seconds don't match the strict Z pattern
        assert!(to_display_local(Some("2023-01-01T00:00:00.000Z")).is_none());
    }

    #[test]
    fn test_display_naive_input_assumes_utc() {
        // Asymmetric with to_query_instant: naive display input is UTC
        let date = to_display_local(Some("2023-01-01T00:00:00")).unwrap();
        assert_eq!(date.format("%H:%M").to_string(), "08:00");
    }

    #[test]
    fn test_display_absent_or_empty_is_none() {
        assert!(to_display_local(None).is_none());
        assert!(to_display_local(Some("")).is_none());
        assert!(to_display_local(Some("garbage")).is_none());
    }

    #[test]
    fn test_display_preserves_day_rollover() {
        // 17:00 UTC is 01:00 PHT the next day
        let date = to_display_local(Some("2023-01-01T17:00:00Z")).unwrap();
        assert_eq!(format_display(&date), "January 02, 2023");
    }
}
