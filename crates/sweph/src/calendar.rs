//! Julian day conversion

use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{Deserialize, Serialize};
use sweph_sys as ffi;

use crate::context::with_library;
use crate::types::Calendar;

/// A calendar date with the time of day as fractional hours (UT)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalendarDate {
    /// Astronomical year numbering: 1 BCE is year 0
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: f64,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32, hour: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }
}

/// Convert a calendar date to a Julian day number
///
/// The library does not validate the date; out-of-range months or days are
/// normalized arithmetically.
pub fn julian_day(date: &CalendarDate, calendar: Calendar) -> f64 {
    with_library(|| unsafe {
        ffi::swe_julday(
            date.year,
            date.month as i32,
            date.day as i32,
            date.hour,
            calendar.into(),
        )
    })
}

/// Convert a Julian day number back to a calendar date
pub fn reverse_julian_day(jd: f64, calendar: Calendar) -> CalendarDate {
    let mut year = 0;
    let mut month = 0;
    let mut day = 0;
    let mut hour = 0.0;
    with_library(|| unsafe {
        ffi::swe_revjul(jd, calendar.into(), &mut year, &mut month, &mut day, &mut hour)
    });
    CalendarDate {
        year,
        month: month as u32,
        day: day as u32,
        hour,
    }
}

/// Julian day (UT) of a wall-clock instant, on the Gregorian calendar
pub fn julian_day_from_datetime(dt: DateTime<Utc>) -> f64 {
    let hour = dt.hour() as f64
        + dt.minute() as f64 / 60.0
        + (dt.second() as f64 + dt.nanosecond() as f64 / 1e9) / 3600.0;
    julian_day(
        &CalendarDate::new(dt.year(), dt.month(), dt.day(), hour),
        Calendar::Gregorian,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::TimeZone;

    #[test]
    fn test_reference_julday() {
        let jd = julian_day(&CalendarDate::new(1981, 8, 22, 11.35), Calendar::Gregorian);
        assert_abs_diff_eq!(jd, 2444838.972916667, epsilon = 1e-9);
    }

    #[test]
    fn test_j2000_epoch() {
        let jd = julian_day(&CalendarDate::new(2000, 1, 1, 12.0), Calendar::Gregorian);
        assert_abs_diff_eq!(jd, 2451545.0, epsilon = 1e-12);
    }

    #[test]
    fn test_calendar_cutover_is_continuous() {
        // 4 Oct 1582 (Julian) is followed by 15 Oct 1582 (Gregorian)
        let last_julian = julian_day(&CalendarDate::new(1582, 10, 4, 0.0), Calendar::Julian);
        let first_gregorian =
            julian_day(&CalendarDate::new(1582, 10, 15, 0.0), Calendar::Gregorian);
        assert_abs_diff_eq!(first_gregorian - last_julian, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_reverse_recovers_date() {
        let date = reverse_julian_day(2444838.972916667, Calendar::Gregorian);
        assert_eq!((date.year, date.month, date.day), (1981, 8, 22));
        assert_abs_diff_eq!(date.hour, 11.35, epsilon = 1e-6);
    }

    #[test]
    fn test_negative_year_survives_reverse() {
        let jd = julian_day(&CalendarDate::new(-500, 3, 1, 6.0), Calendar::Julian);
        let date = reverse_julian_day(jd, Calendar::Julian);
        assert_eq!((date.year, date.month, date.day), (-500, 3, 1));
    }

    #[test]
    fn test_from_datetime() {
        let dt = Utc.with_ymd_and_hms(1981, 8, 22, 11, 21, 0).unwrap();
        assert_abs_diff_eq!(julian_day_from_datetime(dt), 2444838.972916667, epsilon = 1e-8);
    }
}
