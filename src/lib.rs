//! Conversion between Julian Date, the proleptic Gregorian calendar and the
//! Tzolkin ritual count.
//!
//! All computations are pure: no clock, no locale, no time zone. Lookup
//! tables are compile-time constants.
//!
//! # Examples
//!
//! Julian Date and Gregorian calendar with [`JulianDate`]:
//!
//! ```
//! use julian_tzolkin::{JulianDate, Weekday, convert};
//!
//! let jd = convert::to_julian_date(2000, 1, 1, 12, 0, 0).unwrap();
//! assert_eq!(2451545.0, jd.value());
//! assert_eq!(Weekday::Saturday, jd.weekday());
//!
//! let jd: JulianDate = "2460449.78".parse().unwrap();
//! assert_eq!("2024-05-19T06:43:12", jd.to_civil().unwrap().to_string());
//! ```
//!
//! Kin numbers and portal days:
//!
//! ```
//! use julian_tzolkin::tzolkin;
//!
//! assert_eq!(258, tzolkin::kin_number(2000, 1, 1).unwrap().number());
//! assert_eq!(Ok(true), tzolkin::is_portal_day(2025, 3, 25));
//!
//! for day in tzolkin::portal_days(2025).unwrap().iter().take(3) {
//!     println!("{}: {}", day.date, day.kin);
//! }
//! ```

pub mod civil;
pub mod convert;
pub mod error;
pub mod julian;
pub mod tzolkin;

pub use civil::{CivilDate, CivilDateTime, TimeOfDay, Weekday, YearDays, YearType, is_leap_year};
pub use error::CalendarError;
pub use julian::JulianDate;
