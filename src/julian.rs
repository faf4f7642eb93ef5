//! The Julian Date (JD), a continuous count of days.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::civil::{CivilDate, CivilDateTime, TimeOfDay, Weekday};
use crate::convert;
use crate::error::CalendarError;

/// [Julian date](https://en.wikipedia.org/wiki/Julian_day): days elapsed
/// since noon UT of January 1, 4713 BC, proleptic Julian calendar.
///
/// The value is always finite and may be fractional or negative. Equality
/// and ordering compare the exact values, without tolerance.
///
/// # Example
///
/// ```
/// use julian_tzolkin::{JulianDate, Weekday};
///
/// let jd: JulianDate = "2451545.0".parse().unwrap();
/// assert_eq!(Weekday::Saturday, jd.weekday());
/// assert_eq!("2000-01-01T12:00:00", jd.to_civil().unwrap().to_string());
/// ```
#[derive(Debug, Copy, Clone)]
pub struct JulianDate(f64);

impl JulianDate {
    /// Creates a Julian Date from a real number of days.
    ///
    /// Returns `Err` for NaN and infinities.
    pub fn new(value: f64) -> Result<Self, CalendarError> {
        if !value.is_finite() {
            return Err(CalendarError::NonFinite { value });
        }
        Ok(Self::from_finite(value))
    }

    /// Wraps a value known to be finite. Negative zero becomes zero so that
    /// `Eq`, `Ord` and `Hash` agree.
    pub(crate) fn from_finite(value: f64) -> Self {
        debug_assert!(value.is_finite());
        Self(value + 0.0)
    }

    /// Creates a Julian Date from a whole number of days.
    pub fn from_days(days: i64) -> Self {
        Self::from_finite(days as f64)
    }

    /// Creates a Julian Date from a Gregorian date and time.
    ///
    /// ```
    /// use julian_tzolkin::{CivilDateTime, JulianDate};
    ///
    /// let civil = CivilDateTime::new(1970, 1, 1, 0, 0, 0).unwrap();
    /// assert_eq!(2440587.5, JulianDate::from_civil(&civil).value());
    /// ```
    pub fn from_civil(civil: &CivilDateTime) -> Self {
        convert::civil_to_julian_date(civil)
    }

    /// Returns the number of days.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Represents the time point in proleptic Gregorian calendar, rounded to
    /// whole seconds.
    ///
    /// Returns `Err` if the year does not fit in an `i32`.
    pub fn to_civil(&self) -> Result<CivilDateTime, CalendarError> {
        convert::from_julian_date(*self)
    }

    /// Returns the day of week.
    pub fn weekday(&self) -> Weekday {
        convert::day_of_week(*self)
    }

    /// The epoch (JD 0) as a proleptic Gregorian date-time:
    /// `-4713-11-24T12:00:00`.
    pub fn epoch() -> CivilDateTime {
        CivilDateTime {
            date: CivilDate::from_parts_unchecked(-4713, 11, 24),
            time: TimeOfDay::from_seconds(12 * 3600),
        }
    }

    /// Moves forward (or backward, for negative `days`) in time.
    ///
    /// ```
    /// use julian_tzolkin::JulianDate;
    ///
    /// let jd = JulianDate::from_days(2451545).add_days(-0.5).unwrap();
    /// assert_eq!("2000-01-01T00:00:00", jd.to_civil().unwrap().to_string());
    /// ```
    pub fn add_days(&self, days: f64) -> Result<Self, CalendarError> {
        Self::new(self.0 + days)
    }

    /// Days elapsed from `earlier` to `self`, negative if `earlier` is later.
    pub fn days_since(&self, earlier: JulianDate) -> f64 {
        self.0 - earlier.0
    }
}

impl PartialEq for JulianDate {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for JulianDate {}

impl PartialOrd for JulianDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for JulianDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for JulianDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for JulianDate {
    type Err = CalendarError;

    /// Parses a decimal real number, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s.trim().parse().map_err(|e: std::num::ParseFloatError| {
            CalendarError::Parse {
                input: s.to_owned(),
                reason: e.to_string(),
            }
        })?;
        Self::new(value)
    }
}

impl From<JulianDate> for f64 {
    fn from(jd: JulianDate) -> f64 {
        jd.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn constructors_agree() {
        let from_real = JulianDate::new(2451545.0).unwrap();
        let from_int = JulianDate::from_days(2451545);
        let from_text: JulianDate = "2451545".parse().unwrap();
        assert_eq!(from_real, from_int);
        assert_eq!(from_real, from_text);
    }

    #[test]
    fn rejects_non_finite() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                JulianDate::new(value),
                Err(CalendarError::NonFinite { .. })
            ));
        }
        assert!(JulianDate::from_days(0).add_days(f64::INFINITY).is_err());
    }

    #[test]
    fn parse() {
        assert_eq!(
            2460449.78,
            " 2460449.78\n".parse::<JulianDate>().unwrap().value()
        );
        assert_eq!(-12.5, "-12.5".parse::<JulianDate>().unwrap().value());
        assert_eq!(
            Err(CalendarError::Parse {
                input: "12,5".into(),
                reason: "invalid float literal".into()
            }),
            "12,5".parse::<JulianDate>()
        );
        assert!("".parse::<JulianDate>().is_err());
        assert!(matches!(
            "NaN".parse::<JulianDate>(),
            Err(CalendarError::NonFinite { .. })
        ));
    }

    #[test]
    fn ordering() {
        let a = JulianDate::new(-0.5).unwrap();
        let b = JulianDate::new(0.0).unwrap();
        let c = JulianDate::new(2451545.25).unwrap();
        assert!(a < b && b < c);
        assert_eq!(Some(c), [b, c, a].into_iter().max());
        assert_ne!(c, JulianDate::new(2451545.2500001).unwrap());
    }

    #[test]
    fn signed_zero() {
        let neg = JulianDate::new(-0.0).unwrap();
        let pos = JulianDate::new(0.0).unwrap();
        assert_eq!(Ordering::Equal, neg.cmp(&pos));
        let set: HashSet<_> = [neg, pos].into_iter().collect();
        assert_eq!(1, set.len());
    }

    #[test]
    fn differences() {
        let a = JulianDate::new(2451545.0).unwrap();
        let b = a.add_days(366.25).unwrap();
        assert_eq!(366.25, b.days_since(a));
        assert_eq!(-366.25, a.days_since(b));
    }

    #[test]
    fn display() {
        assert_eq!("2451545", JulianDate::from_days(2451545).to_string());
        assert_eq!("2460449.78", JulianDate::new(2460449.78).unwrap().to_string());
    }

    #[test]
    fn epoch() {
        assert_eq!("-4713-11-24T12:00:00", JulianDate::epoch().to_string());
        assert_eq!(Ok(JulianDate::epoch()), JulianDate::from_days(0).to_civil());
    }

    #[test]
    fn to_civil_out_of_range() {
        let jd = JulianDate::new(-1e12).unwrap();
        assert_eq!(
            Err(CalendarError::YearOutOfRange { value: -1e12 }),
            jd.to_civil()
        );
    }
}
