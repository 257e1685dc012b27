//! Time and date text for the clock face.
//!
//! Formatting writes into fixed-capacity strings so the per-second redraw
//! does not allocate for text.

use std::fmt::Write;

use arrayvec::ArrayString;
use chrono::NaiveDateTime;

/// Formatted clock time, e.g. `13:05` or `01:05:09`.
pub type TimeText = ArrayString<16>;

/// Formatted date line, e.g. `2024-03-01` or `2024-03-01 [PM]`.
pub type DateText = ArrayString<32>;

/// chrono format string for the time.
pub fn time_format(twelve_hour: bool, seconds: bool) -> &'static str {
    match (twelve_hour, seconds) {
        (true, true) => "%I:%M:%S",
        (true, false) => "%I:%M",
        (false, true) => "%H:%M:%S",
        (false, false) => "%H:%M",
    }
}

/// chrono format string for the date line.
pub fn date_format(twelve_hour: bool) -> &'static str {
    if twelve_hour {
        "%Y-%m-%d [%p]"
    } else {
        "%Y-%m-%d"
    }
}

pub fn format_time(now: &NaiveDateTime, twelve_hour: bool, seconds: bool) -> TimeText {
    let mut out = TimeText::new();
    // Capacity covers every format above; a failed write leaves a prefix.
    let _ = write!(out, "{}", now.format(time_format(twelve_hour, seconds)));
    out
}

pub fn format_date(now: &NaiveDateTime, twelve_hour: bool) -> DateText {
    let mut out = DateText::new();
    let _ = write!(out, "{}", now.format(date_format(twelve_hour)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn twelve_hour_with_seconds() {
        assert_eq!(format_time(&at(13, 5, 9), true, true).as_str(), "01:05:09");
    }

    #[test]
    fn twenty_four_hour_without_seconds() {
        assert_eq!(format_time(&at(13, 5, 9), false, false).as_str(), "13:05");
    }

    #[test]
    fn midnight_in_twelve_hour_is_twelve() {
        assert_eq!(format_time(&at(0, 0, 0), true, false).as_str(), "12:00");
        assert_eq!(format_time(&at(0, 0, 0), false, true).as_str(), "00:00:00");
    }

    #[test]
    fn date_line_formats() {
        assert_eq!(format_date(&at(13, 5, 9), false).as_str(), "2024-03-01");
        assert_eq!(format_date(&at(13, 5, 9), true).as_str(), "2024-03-01 [PM]");
        assert_eq!(format_date(&at(9, 0, 0), true).as_str(), "2024-03-01 [AM]");
    }
}
