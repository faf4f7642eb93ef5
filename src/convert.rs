//! Conversion between Julian Date and the proleptic Gregorian calendar.
//!
//! Both directions follow the classic Meeus algorithm with the constants
//! `365.25`, `30.6001` and `1524.5`. Julian days start at noon, civil days
//! at midnight, hence the half-day shifts.

use crate::civil::{CivilDate, CivilDateTime, TimeOfDay, Weekday};
use crate::error::CalendarError;
use crate::julian::JulianDate;

const SECONDS_PER_DAY: f64 = 86400.0;

/// Computes the Julian Date of a Gregorian date and time.
///
/// All components are validated first; the year may be zero or negative
/// (astronomical numbering).
///
/// # Example
///
/// ```
/// use julian_tzolkin::convert::to_julian_date;
///
/// let jd = to_julian_date(2000, 1, 1, 12, 0, 0).unwrap();
/// assert_eq!(2451545.0, jd.value());
/// ```
pub fn to_julian_date(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> Result<JulianDate, CalendarError> {
    let civil = CivilDateTime::new(year, month, day, hour, minute, second)?;
    Ok(civil_to_julian_date(&civil))
}

/// Computes the Julian Date of an already validated date-time.
pub fn civil_to_julian_date(civil: &CivilDateTime) -> JulianDate {
    let (year, month, day, hour, minute, second) = civil.components();
    JulianDate::from_finite(raw_julian_date(year, month, day, hour, minute, second))
}

fn raw_julian_date(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> f64 {
    let (year, month) = if month < 3 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };

    let century = (year / 100.0).floor();
    let leap_correction = 2.0 - century + (century / 4.0).floor();

    let day_fraction =
        hour as f64 / 24.0 + minute as f64 / 1440.0 + second as f64 / SECONDS_PER_DAY;

    let year_days = (365.25 * (year + 4716.0)).floor();
    let month_days = (30.6001 * (month + 1.0)).floor();

    year_days + month_days + day as f64 + leap_correction - 1524.5 + day_fraction
}

/// Computes the Gregorian date and time of a Julian Date.
///
/// The time is rounded to the nearest second; rounding up to a full day
/// moves the result to midnight of the following day.
///
/// Julian Dates whose noon-shifted integer part is negative go through a
/// separate branch without the century correction, so the result there
/// does not round-trip through [`to_julian_date`] and February 29 follows
/// the Julian leap rule. Their time is read from the floor fraction, not
/// through [`time_from_fraction`]: `-100.25` reads `06:00:00`, where
/// truncation would give `18:00:00`.
///
/// Returns `Err` if the year does not fit in an `i32`.
///
/// # Example
///
/// ```
/// use julian_tzolkin::{JulianDate, convert::from_julian_date};
///
/// let dt = from_julian_date(JulianDate::new(2460449.78).unwrap()).unwrap();
/// assert_eq!("2024-05-19T06:43:12", dt.to_string());
///
/// assert!(from_julian_date(JulianDate::new(1e300).unwrap()).is_err());
/// ```
pub fn from_julian_date(jd: JulianDate) -> Result<CivilDateTime, CalendarError> {
    let shifted = jd.value() + 0.5;
    let mut z = shifted.floor();
    let mut seconds = ((shifted - z) * SECONDS_PER_DAY).round();
    if seconds >= SECONDS_PER_DAY {
        z += 1.0;
        seconds -= SECONDS_PER_DAY;
    }

    let pre_epoch = z < 0.0;
    let a = if pre_epoch {
        z + 1.0 + 1524.0
    } else {
        let century = ((z - 1867216.25) / 36524.25).floor();
        z + 1.0 + century - (century / 4.0).floor()
    };

    let b = a + 1524.0;
    let year_component = ((b - 122.1) / 365.25).floor();
    let year_days = (365.25 * year_component).floor();
    let month_component = ((b - year_days) / 30.6001).floor();
    let day = b - year_days - (30.6001 * month_component).floor();

    let (month, year) = if month_component < 14.0 {
        (month_component - 1.0, year_component - 4716.0)
    } else {
        (month_component - 13.0, year_component - 4715.0)
    };

    if !(f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&year) {
        return Err(CalendarError::YearOutOfRange { value: jd.value() });
    }
    let (year, month, day) = (year as i32, month as u32, day as u32);
    let date = if pre_epoch && (month, day) == (2, 29) && year % 4 == 0 {
        CivilDate::from_parts_unchecked(year, month, day)
    } else {
        CivilDate::new(year, month, day)?
    };

    Ok(CivilDateTime {
        date,
        time: TimeOfDay::from_seconds(seconds as u32),
    })
}

/// Reads the fractional part of `value` as a time of day.
///
/// The fraction is taken after truncation toward zero and its absolute
/// value is used, so negative inputs yield the same clock reading as their
/// positive counterpart. The total is rounded to whole seconds before it is
/// split; a fraction that rounds up to a whole day reads `00:00:00`.
///
/// Note that no half-day shift is applied: `0.25` reads `06:00:00`.
///
/// # Example
///
/// ```
/// use julian_tzolkin::convert::time_from_fraction;
///
/// assert_eq!("06:43:12", time_from_fraction(2460450.28).to_string());
/// assert_eq!("06:00:00", time_from_fraction(-0.25).to_string());
/// ```
pub fn time_from_fraction(value: f64) -> TimeOfDay {
    let fraction = (value - value.trunc()).abs();
    let seconds = (fraction * SECONDS_PER_DAY).round();
    TimeOfDay::from_seconds(seconds as u32)
}

/// Returns the day of week of a Julian Date.
///
/// Julian Date 0 (noon) falls on a Monday.
///
/// # Example
///
/// ```
/// use julian_tzolkin::{JulianDate, Weekday, convert::day_of_week};
///
/// assert_eq!(Weekday::Saturday, day_of_week(JulianDate::new(2451545.0).unwrap()));
/// ```
pub fn day_of_week(jd: JulianDate) -> Weekday {
    let days = (jd.value() + 1.5).floor();
    Weekday::from_index(days.rem_euclid(7.0) as u32)
}
