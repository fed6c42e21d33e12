use chrono::{DateTime, NaiveDateTime};

/// Textual timestamp encodings seen in the logs, tried in order. Field
/// loggers have written both the space-separated and the `T`-separated form.
const TEXT_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parses a raw timestamp cell into an instant.
///
/// Tries the known textual formats first, then falls back to interpreting the
/// value as a floating-point Unix epoch in seconds. Returns `None` when no
/// interpretation succeeds; callers drop the row and keep going.
pub fn parse_instant(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    for fmt in TEXT_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    let epoch: f64 = s.parse().ok()?;
    if !epoch.is_finite() {
        return None;
    }
    let secs = epoch.floor();
    let nanos = ((epoch - secs) * 1e9) as u32;
    // Out-of-range epochs yield None from chrono rather than panicking
    DateTime::from_timestamp(secs as i64, nanos).map(|dt| dt.naive_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_space_separated_datetime() {
        let dt = parse_instant("2024-06-01 13:45:30").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 6, 1));
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (13, 45, 30));
    }

    #[test]
    fn parses_iso_t_separated_datetime() {
        let dt = parse_instant("2024-06-01T13:45:30").unwrap();
        assert_eq!(dt, parse_instant("2024-06-01 13:45:30").unwrap());
    }

    #[test]
    fn parses_numeric_epoch_seconds() {
        let dt = parse_instant("1700000000").unwrap();
        assert_eq!(dt, DateTime::from_timestamp(1_700_000_000, 0).unwrap().naive_utc());
    }

    #[test]
    fn parses_fractional_epoch() {
        let dt = parse_instant("1700000000.5").unwrap();
        assert_eq!(dt.and_utc().timestamp(), 1_700_000_000);
        assert_eq!(dt.and_utc().timestamp_subsec_millis(), 500);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_instant("not-a-time").is_none());
        assert!(parse_instant("").is_none());
        assert!(parse_instant("   ").is_none());
        assert!(parse_instant("2024-13-99 99:99:99").is_none());
        assert!(parse_instant("inf").is_none());
        assert!(parse_instant("NaN").is_none());
    }

    #[test]
    fn rejects_out_of_range_epoch() {
        assert!(parse_instant("1e30").is_none());
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert!(parse_instant("  2024-06-01 13:45:30  ").is_some());
    }
}
