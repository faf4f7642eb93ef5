//! Tzolkin, the 260-day ritual count.
//!
//! Each civil date gets a kin number in `1..=260`, computed from a per-year
//! offset ([`YearTable`]), a per-month offset ([`table::MONTH_OFFSETS`]) and
//! the day of month, wrapped around the 260-day cycle. This is the lookup
//! method of the Dreamspell count: it is independent of the Julian Date, and
//! February 29 shares the kin of February 28.
//!
//! # Example
//!
//! ```
//! use julian_tzolkin::tzolkin;
//!
//! let kin = tzolkin::kin_number(2000, 1, 1).unwrap();
//! assert_eq!(258, kin.number());
//! assert_eq!("Kin 258: White Spectral Mirror", kin.to_string());
//! ```

use crate::civil::{CivilDate, YearType};
use crate::error::CalendarError;

pub mod fmt;
pub mod portal;
pub mod table;

pub use portal::{PORTAL_KINS, PortalDay, is_portal_day, is_portal_day_on, portal_days};
pub use table::YearTable;

/// Number of days in the ritual cycle.
pub const CYCLE_DAYS: u32 = 260;

/// A kin number, `1..=260`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Kin(u32);

impl Kin {
    /// Returns `None` unless `number` is in `1..=260`.
    pub fn new(number: u32) -> Option<Self> {
        (1..=CYCLE_DAYS).contains(&number).then_some(Self(number))
    }
    pub fn number(&self) -> u32 {
        self.0
    }
    /// Galactic tone, `1..=13`.
    pub fn tone(&self) -> u32 {
        (self.0 - 1) % 13 + 1
    }
    /// Solar seal, `1..=20`.
    pub fn seal(&self) -> u32 {
        (self.0 - 1) % 20 + 1
    }
    /// Whether this kin marks a portal day.
    pub fn is_portal(&self) -> bool {
        portal::is_portal_kin(self.0)
    }
}

/// Computes kin numbers with a given year table.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct KinCalculator {
    years: YearTable,
}

impl KinCalculator {
    /// Calculator using [`YearTable::STANDARD`].
    pub const STANDARD: KinCalculator = KinCalculator::new(YearTable::STANDARD);

    pub const fn new(years: YearTable) -> Self {
        Self { years }
    }

    pub fn year_table(&self) -> &YearTable {
        &self.years
    }

    /// Returns the kin number of a Gregorian date.
    ///
    /// Fails if the date does not exist or the year table has no entry for
    /// `year`.
    pub fn kin_number(&self, year: i32, month: u32, day: u32) -> Result<Kin, CalendarError> {
        self.kin_number_on(&CivilDate::new(year, month, day)?)
    }

    /// Returns the kin number of a validated date.
    pub fn kin_number_on(&self, date: &CivilDate) -> Result<Kin, CalendarError> {
        let (year, month, day) = date.ymd();
        let year_offset = self.years.offset(year)?;
        let month_offset = table::month_offset(month)?;
        // February 29 collapses onto February 28
        let day = if YearType::from_gregorian(year).is_leap() && (month, day) == (2, 29) {
            day - 1
        } else {
            day
        };

        let mut kin = i64::from(year_offset) + i64::from(month_offset) + i64::from(day);
        while kin > i64::from(CYCLE_DAYS) {
            kin -= i64::from(CYCLE_DAYS);
        }
        u32::try_from(kin)
            .ok()
            .and_then(Kin::new)
            .ok_or(CalendarError::KinOutOfRange { kin })
    }
}

impl Default for KinCalculator {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Returns the kin number of a Gregorian date with the standard table.
///
/// # Example
///
/// ```
/// use julian_tzolkin::tzolkin::kin_number;
///
/// assert_eq!(kin_number(2024, 2, 28), kin_number(2024, 2, 29));
/// assert!(kin_number(2024, 13, 1).is_err());
/// ```
pub fn kin_number(year: i32, month: u32, day: u32) -> Result<Kin, CalendarError> {
    KinCalculator::STANDARD.kin_number(year, month, day)
}

/// Returns the kin number of a validated date with the standard table.
pub fn kin_number_on(date: &CivilDate) -> Result<Kin, CalendarError> {
    KinCalculator::STANDARD.kin_number_on(date)
}
