//! Wall-clock interval arithmetic for reservation windows.

pub const MINUTES_PER_DAY: i64 = 24 * 60;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TimeError {
    #[error("Invalid time format: '{0}'. Expected 'HH:MM'")]
    InvalidFormat(String),
}

/// Parse a strict "HH:MM" string into minutes since midnight (0-1439).
pub fn time_to_minutes(t: &str) -> Result<i64, TimeError> {
    let invalid = || TimeError::InvalidFormat(t.to_string());

    let (hh, mm) = t.split_once(':').ok_or_else(invalid)?;
    if hh.len() != 2 || mm.len() != 2 {
        return Err(invalid());
    }
    if !hh.bytes().all(|b| b.is_ascii_digit()) || !mm.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let hours: i64 = hh.parse().map_err(|_| invalid())?;
    let minutes: i64 = mm.parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    Ok(hours * 60 + minutes)
}

/// Normalize an interval so comparisons stay valid across midnight.
///
/// An end at or before the start is taken to be on the next day, so the
/// returned end is always strictly greater than the start.
pub fn normalize_interval(start_min: i64, end_min: i64) -> (i64, i64) {
    if end_min <= start_min {
        (start_min, end_min + MINUTES_PER_DAY)
    } else {
        (start_min, end_min)
    }
}

/// Billable duration in whole hours, rounded up, minimum 1.
pub fn duration_hours(start_time: &str, end_time: &str) -> Result<i64, TimeError> {
    let s_min = time_to_minutes(start_time)?;
    let e_min = time_to_minutes(end_time)?;
    let (s_min, e_min) = normalize_interval(s_min, e_min);

    let total_minutes = e_min - s_min;
    let hours = (total_minutes + 59) / 60;
    Ok(hours.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_to_minutes() {
        assert_eq!(time_to_minutes("00:00").unwrap(), 0);
        assert_eq!(time_to_minutes("09:30").unwrap(), 570);
        assert_eq!(time_to_minutes("23:59").unwrap(), 1439);
    }

    #[test]
    fn test_time_to_minutes_rejects_bad_input() {
        for bad in ["24:00", "12:60", "9:30", "09:3", "ab:cd", "0930", "", "+1:30", "09:30:00"] {
            let err = time_to_minutes(bad).unwrap_err();
            assert_eq!(err, TimeError::InvalidFormat(bad.to_string()));
            // message carries the offending literal
            assert!(err.to_string().contains(bad));
        }
    }

    #[test]
    fn test_normalize_interval_always_forward() {
        // same-day interval untouched
        assert_eq!(normalize_interval(540, 720), (540, 720));
        // midnight wrap
        assert_eq!(normalize_interval(1380, 120), (1380, 1560));
        // zero-length treated as a full-day wrap
        assert_eq!(normalize_interval(600, 600), (600, 2040));

        for start in (0..MINUTES_PER_DAY).step_by(97) {
            for end in (0..MINUTES_PER_DAY).step_by(89) {
                let (s, e) = normalize_interval(start, end);
                assert!(e > s, "normalize({}, {}) yielded ({}, {})", start, end, s, e);
            }
        }
    }

    #[test]
    fn test_duration_hours() {
        assert_eq!(duration_hours("09:00", "12:00").unwrap(), 3);
        // rounded up
        assert_eq!(duration_hours("09:00", "09:31").unwrap(), 1);
        assert_eq!(duration_hours("09:00", "10:01").unwrap(), 2);
        // minimum clamp
        assert_eq!(duration_hours("10:00", "10:30").unwrap(), 1);
        // midnight wrap
        assert_eq!(duration_hours("23:00", "02:00").unwrap(), 3);
    }

    #[test]
    fn test_duration_hours_propagates_format_errors() {
        assert!(duration_hours("25:00", "12:00").is_err());
        assert!(duration_hours("09:00", "12-00").is_err());
    }
}
