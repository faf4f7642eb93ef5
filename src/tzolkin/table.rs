//! Lookup tables for the kin calculation.
//!
//! The year offsets repeat every 52 years (one calendar round of a ritual
//! year against the 365-day year), so only one cycle is stored. The
//! published table lists the cycle three times, for 1910 to 2065.

use tracing::trace;

use crate::error::CalendarError;

/// Length of the cycle after which the year offsets repeat.
pub const CYCLE_YEARS: i32 = 52;

/// Day offset of the first day of each month, January first.
pub const MONTH_OFFSETS: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 13, 44, 74];

#[rustfmt::skip]
const STANDARD_VALUES: [u32; 52] = [
    // 1910 ..= 1935
    62, 167, 12, 117, 222, 67, 172, 17, 122, 227, 72, 177, 152,
    127, 232, 77, 182, 157, 132, 237, 82, 187, 32, 112, 87, 257,
    // 1936 ..= 1961
    192, 37, 142, 247, 92, 197, 42, 147, 252, 97, 202, 47, 257,
    7, 102, 207, 52, 2, 107, 212, 57, 162, 7, 217, 197, 112,
];

/// Year offsets for consecutive years starting at `first_year`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct YearTable {
    first_year: i32,
    values: &'static [u32],
}

impl YearTable {
    /// The standard table, one full cycle from 1910.
    pub const STANDARD: YearTable = YearTable {
        first_year: 1910,
        values: &STANDARD_VALUES,
    };

    /// Creates a table covering `first_year..first_year + values.len()`.
    pub const fn new(first_year: i32, values: &'static [u32]) -> Self {
        Self { first_year, values }
    }

    pub fn first_year(&self) -> i32 {
        self.first_year
    }

    /// First year after the table.
    pub fn end_year(&self) -> i32 {
        self.first_year + self.values.len() as i32
    }

    /// Looks up the offset for `year`, stepping by whole cycles into the
    /// table first when `year` is outside of it.
    ///
    /// # Example
    ///
    /// ```
    /// use julian_tzolkin::tzolkin::YearTable;
    ///
    /// assert_eq!(Ok(257), YearTable::STANDARD.offset(2000));
    /// assert_eq!(Ok(257), YearTable::STANDARD.offset(1948));
    /// ```
    pub fn offset(&self, year: i32) -> Result<u32, CalendarError> {
        let resolved = self.normalize(year);
        if resolved != i64::from(year) {
            trace!(year, resolved, "year shifted into table");
        }
        usize::try_from(resolved - i64::from(self.first_year))
            .ok()
            .and_then(|i| self.values.get(i))
            .copied()
            .ok_or(CalendarError::YearNotInTable { year })
    }

    fn normalize(&self, year: i32) -> i64 {
        let (year, first, end) = (
            i64::from(year),
            i64::from(self.first_year),
            i64::from(self.first_year) + self.values.len() as i64,
        );
        let cycle = i64::from(CYCLE_YEARS);
        if year < first {
            let cycles = (first - year + cycle - 1) / cycle;
            year + cycles * cycle
        } else if year >= end {
            let cycles = (year - end) / cycle + 1;
            year - cycles * cycle
        } else {
            year
        }
    }
}

/// Offset of the first day of `month` (`1..=12`).
pub fn month_offset(month: u32) -> Result<u32, CalendarError> {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_OFFSETS.get(i as usize))
        .copied()
        .ok_or(CalendarError::InvalidMonth { month })
}
