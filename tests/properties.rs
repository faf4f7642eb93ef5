use std::collections::HashSet;

use julian_tzolkin::civil::days_in_month;
use julian_tzolkin::convert::{from_julian_date, to_julian_date};
use julian_tzolkin::tzolkin::{self, PORTAL_KINS};
use julian_tzolkin::{CivilDateTime, YearDays, is_leap_year};
use proptest::prelude::*;

/// Date-times whose Julian Date is positive, with whole seconds.
fn civil_date_time() -> impl Strategy<Value = CivilDateTime> {
    (-4000i32..=4000, 1u32..=12, 1u32..=31, 0u32..24, 0u32..60, 0u32..60).prop_map(
        |(y, m, d, h, mi, s)| {
            let d = d.min(days_in_month(y, m).unwrap_or(28));
            CivilDateTime::new(y, m, d, h, mi, s).unwrap()
        },
    )
}

proptest! {
    #[test]
    fn round_trip(civil in civil_date_time()) {
        let (y, m, d, h, mi, s) = civil.components();
        let jd = to_julian_date(y, m, d, h, mi, s).unwrap();
        prop_assert_eq!(Ok(civil), from_julian_date(jd));
    }

    #[test]
    fn chronological_order_is_preserved(a in civil_date_time(), b in civil_date_time()) {
        let (ja, jb) = (
            julian_tzolkin::JulianDate::from_civil(&a),
            julian_tzolkin::JulianDate::from_civil(&b),
        );
        prop_assert_eq!(a.cmp(&b), ja.cmp(&jb));
    }

    #[test]
    fn kin_repeats_every_52_years(y in -5000i32..5000, m in 1u32..=12, d in 1u32..=28) {
        prop_assert_eq!(
            tzolkin::kin_number(y, m, d).unwrap(),
            tzolkin::kin_number(y + 52, m, d).unwrap()
        );
    }

    #[test]
    fn kin_is_in_range(civil in civil_date_time()) {
        let kin = tzolkin::kin_number_on(&civil.date).unwrap().number();
        prop_assert!((1..=260).contains(&kin));
    }

    #[test]
    fn leap_day_shares_kin(k in -1000i32..1000) {
        let y = k * 4;
        prop_assume!(is_leap_year(y));
        prop_assert_eq!(
            tzolkin::kin_number(y, 2, 29).unwrap(),
            tzolkin::kin_number(y, 2, 28).unwrap()
        );
    }

    #[test]
    fn portal_days_match_classifier(year in 1800i32..2300) {
        let days = tzolkin::portal_days(year).unwrap();
        prop_assert!(days.windows(2).all(|w| w[0].date < w[1].date));
        let listed: HashSet<_> = days.iter().map(|p| p.date).collect();
        for date in YearDays::new(year) {
            let kin = tzolkin::kin_number_on(&date).unwrap();
            prop_assert_eq!(listed.contains(&date), PORTAL_KINS.contains(&kin.number()));
            prop_assert_eq!(Ok(listed.contains(&date)), tzolkin::is_portal_day_on(&date));
        }
    }
}
