//! Portal days: dates whose kin belongs to a fixed set of 52 kin numbers.

use tracing::debug;

use super::{Kin, KinCalculator};
use crate::civil::{CivilDate, YearDays};
use crate::error::CalendarError;

/// Kin numbers of portal days, ascending.
#[rustfmt::skip]
pub const PORTAL_KINS: [u32; 52] = [
    1, 20, 22, 39, 43, 50, 51, 58, 64, 69, 72, 77, 85,
    88, 93, 96, 106, 107, 108, 109, 110, 111, 112, 113, 114, 115,
    146, 147, 148, 149, 150, 151, 152, 153, 154, 155, 165, 168, 173,
    176, 184, 189, 192, 197, 203, 210, 211, 218, 222, 239, 241, 260,
];

pub(super) fn is_portal_kin(number: u32) -> bool {
    PORTAL_KINS.binary_search(&number).is_ok()
}

/// A portal day with its kin.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct PortalDay {
    pub date: CivilDate,
    pub kin: Kin,
}

impl KinCalculator {
    /// Whether the given Gregorian date is a portal day.
    pub fn is_portal_day(&self, year: i32, month: u32, day: u32) -> Result<bool, CalendarError> {
        self.is_portal_day_on(&CivilDate::new(year, month, day)?)
    }

    /// Whether a validated date is a portal day.
    pub fn is_portal_day_on(&self, date: &CivilDate) -> Result<bool, CalendarError> {
        Ok(self.kin_number_on(date)?.is_portal())
    }

    /// Lists every portal day of `year` in date order.
    #[tracing::instrument(skip(self))]
    pub fn portal_days(&self, year: i32) -> Result<Vec<PortalDay>, CalendarError> {
        let mut days = Vec::new();
        for date in YearDays::new(year) {
            let kin = self.kin_number_on(&date)?;
            if kin.is_portal() {
                days.push(PortalDay { date, kin });
            }
        }
        debug!(year, count = days.len(), "portal days collected");
        Ok(days)
    }
}

/// Whether `year-month-day` is a portal day, using the standard table.
///
/// # Example
///
/// ```
/// use julian_tzolkin::tzolkin::is_portal_day;
///
/// assert_eq!(Ok(true), is_portal_day(2025, 3, 25)); // kin 1
/// assert_eq!(Ok(false), is_portal_day(2025, 1, 1)); // kin 178
/// ```
pub fn is_portal_day(year: i32, month: u32, day: u32) -> Result<bool, CalendarError> {
    KinCalculator::STANDARD.is_portal_day(year, month, day)
}

/// Whether a validated date is a portal day, using the standard table.
pub fn is_portal_day_on(date: &CivilDate) -> Result<bool, CalendarError> {
    KinCalculator::STANDARD.is_portal_day_on(date)
}

/// Lists every portal day of `year` in date order, using the standard table.
///
/// # Example
///
/// ```
/// use julian_tzolkin::tzolkin::portal_days;
///
/// let days = portal_days(2025).unwrap();
/// assert_eq!(67, days.len());
/// assert_eq!("2025-01-07", days[0].date.to_string());
/// assert_eq!(184, days[0].kin.number());
/// ```
pub fn portal_days(year: i32) -> Result<Vec<PortalDay>, CalendarError> {
    KinCalculator::STANDARD.portal_days(year)
}
