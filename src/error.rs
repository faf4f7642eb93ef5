//! Error type shared by every fallible operation of the crate.

/// Error type for calendar conversions and kin computations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside `1..=12`.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The month that was provided.
        month: u32,
    },

    /// Returned when a day does not exist in the given month.
    #[error("invalid day: {day} for {year:04}-{month:02} (max {max_day})")]
    InvalidDay {
        year: i32,
        month: u32,
        day: u32,
        /// Number of days of that month in that year.
        max_day: u32,
    },

    /// Returned when an hour, minute or second is out of range.
    #[error("invalid time of day: {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u32, minute: u32, second: u32 },

    /// Returned when a Julian Date would be NaN or infinite.
    #[error("julian date must be finite, got {value}")]
    NonFinite { value: f64 },

    /// Returned when a Julian Date lies outside the years an `i32` can hold.
    #[error("julian date {value} is outside the supported year range")]
    YearOutOfRange { value: f64 },

    /// Returned when a string is not a real number.
    #[error("cannot parse {input:?} as a julian date: {reason}")]
    Parse {
        /// The rejected text.
        input: String,
        /// Message of the underlying float parser.
        reason: String,
    },

    /// The year table has no entry for `year`, even after stepping by whole
    /// 52-year cycles. Only an incomplete table can cause this.
    #[error("no year table entry for {year}")]
    YearNotInTable { year: i32 },

    /// A kin sum ended up outside `1..=260`.
    #[error("kin number {kin} outside 1..=260")]
    KinOutOfRange { kin: i64 },
}
