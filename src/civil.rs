//! Civil dates and times in the proleptic Gregorian calendar.

use std::fmt;

use crate::error::CalendarError;

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in Gregorian calendar.
    ///
    /// # Example
    ///
    /// ```
    /// use julian_tzolkin::YearType;
    ///
    /// assert!(!YearType::from_gregorian(1900).is_leap());
    /// assert!(YearType::from_gregorian(2000).is_leap());
    /// ```
    pub fn from_gregorian(year: i32) -> Self {
        if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
}

/// Shorthand for `YearType::from_gregorian(year).is_leap()`.
pub fn is_leap_year(year: i32) -> bool {
    YearType::from_gregorian(year).is_leap()
}

/// Number of days of `month` in `year`.
///
/// Returns `None` if `month` is not in `1..=12`.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    Some(match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => 28 + YearType::from_gregorian(year).is_leap() as u32,
        _ => return None,
    })
}

fn ordinal_day_number(month: u32, day: u32, year_type: YearType) -> u32 {
    day + match month {
        1 => 0,
        2 => 31,
        _ => 59 + (153 * (month - 3) + 2) / 5 + year_type.is_leap() as u32,
    }
}

/// A validated date in the proleptic Gregorian calendar.
///
/// `year` is an astronomical year number, i.e. 1 BC is `0`, 2 BC is `-1`,
/// etc. Dates order chronologically.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct CivilDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CivilDate {
    /// Creates a date, checking that the day exists.
    ///
    /// # Example
    ///
    /// ```
    /// use julian_tzolkin::CivilDate;
    ///
    /// assert!(CivilDate::new(2024, 2, 29).is_ok());
    /// assert!(CivilDate::new(2023, 2, 29).is_err());
    /// ```
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        let max_day = days_in_month(year, month).ok_or(CalendarError::InvalidMonth { month })?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                year,
                month,
                day,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Builds a date from values the conversion engine produced.
    pub(crate) fn from_parts_unchecked(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    pub fn year(&self) -> i32 {
        self.year
    }
    pub fn month(&self) -> u32 {
        self.month
    }
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Returns the date as `(year, month, day)`.
    pub fn ymd(&self) -> (i32, u32, u32) {
        (self.year, self.month, self.day)
    }

    /// Day of the year, `1..=366`.
    ///
    /// # Example
    ///
    /// ```
    /// use julian_tzolkin::CivilDate;
    ///
    /// assert_eq!(256, CivilDate::new(2023, 9, 13).unwrap().ordinal());
    /// ```
    pub fn ordinal(&self) -> u32 {
        ordinal_day_number(self.month, self.day, YearType::from_gregorian(self.year))
    }

    /// Returns the following day, or `None` after December 31 of
    /// `i32::MAX`.
    pub fn next(&self) -> Option<Self> {
        let max_day = days_in_month(self.year, self.month).unwrap_or(31);
        Some(if self.day < max_day {
            Self {
                day: self.day + 1,
                ..*self
            }
        } else if self.month < 12 {
            Self {
                month: self.month + 1,
                day: 1,
                ..*self
            }
        } else {
            Self {
                year: self.year.checked_add(1)?,
                month: 1,
                day: 1,
            }
        })
    }
}

impl fmt::Display for CivilDate {
    /// ISO 8601, e.g. `2000-01-01`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Every date of one Gregorian year, from January 1 to December 31.
///
/// # Example
///
/// ```
/// use julian_tzolkin::YearDays;
///
/// assert_eq!(366, YearDays::new(2024).count());
/// assert_eq!(365, YearDays::new(1900).count());
/// ```
#[derive(Debug, Clone)]
pub struct YearDays {
    year: i32,
    next: Option<CivilDate>,
}

impl YearDays {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            next: Some(CivilDate {
                year,
                month: 1,
                day: 1,
            }),
        }
    }
}

impl Iterator for YearDays {
    type Item = CivilDate;

    fn next(&mut self) -> Option<Self::Item> {
        let date = self.next?;
        self.next = date.next().filter(|following| following.year == self.year);
        Some(date)
    }
}

/// A time of day with whole seconds.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Default)]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
    second: u32,
}

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// Creates a time of day, checking each component.
    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self, CalendarError> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(CalendarError::InvalidTime {
                hour,
                minute,
                second,
            });
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Splits a count of seconds since midnight. Whole days wrap around.
    ///
    /// # Example
    ///
    /// ```
    /// use julian_tzolkin::TimeOfDay;
    ///
    /// assert_eq!("06:43:12", TimeOfDay::from_seconds(24192).to_string());
    /// assert_eq!(TimeOfDay::MIDNIGHT, TimeOfDay::from_seconds(86400));
    /// ```
    pub fn from_seconds(seconds: u32) -> Self {
        let seconds = seconds % 86400;
        Self {
            hour: seconds / 3600,
            minute: seconds % 3600 / 60,
            second: seconds % 60,
        }
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }
    pub fn minute(&self) -> u32 {
        self.minute
    }
    pub fn second(&self) -> u32 {
        self.second
    }

    /// Seconds elapsed since midnight.
    pub fn seconds_of_day(&self) -> u32 {
        self.hour * 3600 + self.minute * 60 + self.second
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// A civil date with a time of day.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct CivilDateTime {
    pub date: CivilDate,
    pub time: TimeOfDay,
}

impl CivilDateTime {
    /// Creates a date-time from its six components, validating all of them.
    ///
    /// # Example
    ///
    /// ```
    /// use julian_tzolkin::CivilDateTime;
    ///
    /// let dt = CivilDateTime::new(2000, 1, 1, 12, 0, 0).unwrap();
    /// assert_eq!("2000-01-01T12:00:00", dt.to_string());
    /// ```
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, CalendarError> {
        Ok(Self {
            date: CivilDate::new(year, month, day)?,
            time: TimeOfDay::new(hour, minute, second)?,
        })
    }

    /// Returns `(year, month, day, hour, minute, second)`.
    pub fn components(&self) -> (i32, u32, u32, u32, u32, u32) {
        let (y, m, d) = self.date.ymd();
        (y, m, d, self.time.hour, self.time.minute, self.time.second)
    }
}

impl From<CivilDate> for CivilDateTime {
    /// The date at midnight.
    fn from(date: CivilDate) -> Self {
        Self {
            date,
            time: TimeOfDay::MIDNIGHT,
        }
    }
}

impl fmt::Display for CivilDateTime {
    /// ISO 8601, e.g. `2000-01-01T12:00:00`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.date, self.time)
    }
}

/// Day of the week.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Maps `0..=6` to Sunday through Saturday. Larger values wrap.
    pub fn from_index(index: u32) -> Self {
        Self::ALL[(index % 7) as usize]
    }
    /// `0` for Sunday through `6` for Saturday.
    pub fn index(&self) -> u32 {
        *self as u32
    }
    /// ISO 8601 numbering, `1..=7` for Monday through Sunday.
    pub fn iso_number(&self) -> u32 {
        (self.index() + 6) % 7 + 1
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        for (year, leap) in [
            (1900, false),
            (2000, true),
            (2023, false),
            (2024, true),
            (2100, false),
            (0, true),
            (-4, true),
            (-100, false),
        ] {
            assert_eq!(leap, is_leap_year(year), "{year}");
        }
    }

    #[test]
    fn month_lengths() {
        assert_eq!(Some(29), days_in_month(2024, 2));
        assert_eq!(Some(28), days_in_month(1900, 2));
        assert_eq!(Some(30), days_in_month(2024, 11));
        assert_eq!(None, days_in_month(2024, 0));
        assert_eq!(None, days_in_month(2024, 13));
    }

    #[test]
    fn new_date_rejects_bad_components() {
        assert_eq!(
            Err(CalendarError::InvalidMonth { month: 13 }),
            CivilDate::new(2024, 13, 1)
        );
        assert_eq!(
            Err(CalendarError::InvalidDay {
                year: 2024,
                month: 4,
                day: 31,
                max_day: 30
            }),
            CivilDate::new(2024, 4, 31)
        );
        assert!(CivilDate::new(2024, 1, 0).is_err());
    }

    #[test]
    fn new_time_rejects_bad_components() {
        for (h, m, s) in [(24, 0, 0), (0, 60, 0), (0, 0, 60)] {
            assert!(TimeOfDay::new(h, m, s).is_err(), "{h}:{m}:{s}");
        }
        assert!(TimeOfDay::new(23, 59, 59).is_ok());
    }

    #[test]
    fn next_day() {
        for ((y, m, d), std) in [
            ((2024, 2, 28), (2024, 2, 29)),
            ((2024, 2, 29), (2024, 3, 1)),
            ((2023, 2, 28), (2023, 3, 1)),
            ((2023, 12, 31), (2024, 1, 1)),
            ((-1, 12, 31), (0, 1, 1)),
        ] {
            assert_eq!(Some(std), CivilDate::new(y, m, d).unwrap().next().map(|n| n.ymd()));
        }
        assert_eq!(None, CivilDate::new(i32::MAX, 12, 31).unwrap().next());
        assert_eq!(
            Some((i32::MIN, 1, 2)),
            CivilDate::new(i32::MIN, 1, 1).unwrap().next().map(|n| n.ymd())
        );
    }

    #[test]
    fn year_days_are_ordered() {
        let days: Vec<_> = YearDays::new(2023).collect();
        assert_eq!(365, days.len());
        assert_eq!((2023, 1, 1), days[0].ymd());
        assert_eq!((2023, 12, 31), days[364].ymd());
        assert!(days.windows(2).all(|w| w[0] < w[1]));
        for (i, day) in days.iter().enumerate() {
            assert_eq!(i as u32 + 1, day.ordinal());
        }
    }

    #[test]
    fn year_days_at_the_year_limits() {
        assert_eq!(365, YearDays::new(i32::MAX).count());
        assert_eq!(
            Some((i32::MAX, 12, 31)),
            YearDays::new(i32::MAX).last().map(|d| d.ymd())
        );
        // i32::MIN is divisible by 4 but not by 100
        assert_eq!(366, YearDays::new(i32::MIN).count());
    }

    #[test]
    fn iso_format() {
        let dt = CivilDateTime::new(-44, 3, 15, 9, 5, 0).unwrap();
        assert_eq!("-044-03-15T09:05:00", dt.to_string());
        assert_eq!("2021-09-08", CivilDate::new(2021, 9, 8).unwrap().to_string());
    }

    #[test]
    fn weekday_numbering() {
        assert_eq!(Weekday::Saturday, Weekday::from_index(6));
        assert_eq!(Weekday::Sunday, Weekday::from_index(7));
        assert_eq!(6, Weekday::Saturday.iso_number());
        assert_eq!(7, Weekday::Sunday.iso_number());
        assert_eq!(1, Weekday::Monday.iso_number());
        assert_eq!("Wednesday", Weekday::Wednesday.to_string());
    }
}
