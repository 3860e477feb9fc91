use chrono::{DateTime, Utc};
use holochron::{
    cgt_to_swet, cgt_to_utc, swet_to_cgt, swet_to_utc, utc_to_cgt, utc_to_swet, CalendarSystem,
    Cgt, EpochMode,
};
use proptest::prelude::*;

// Years 0001..=9999, comfortably inside chrono's range.
const MIN_UNIX: i64 = -62_135_596_800;
const MAX_UNIX: i64 = 253_402_300_799;

fn arb_instant() -> impl Strategy<Value = DateTime<Utc>> {
    (MIN_UNIX..=MAX_UNIX, 0u32..1_000_000_000)
        .prop_map(|(secs, nanos)| DateTime::from_timestamp(secs, nanos).unwrap())
}

fn arb_mode() -> impl Strategy<Value = EpochMode> {
    prop_oneof![Just(EpochMode::Current), Just(EpochMode::Legacy)]
}

fn arb_cgt() -> impl Strategy<Value = Cgt> {
    (-2_000i64..8_000, 1u32..=365, 0u32..24, 0u32..60, 0u32..60, arb_mode()).prop_map(
        |(year, day, hour, minute, second, mode)| {
            Cgt::new(year, day, hour, minute, second, mode).unwrap()
        },
    )
}

fn floored(instant: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp(instant.timestamp(), 0).unwrap()
}

proptest! {
    #[test]
    fn utc_cgt_utc_is_exact_to_the_second(instant in arb_instant(), mode in arb_mode()) {
        let cgt = utc_to_cgt(instant, mode);
        prop_assert_eq!(cgt_to_utc(&cgt).unwrap(), floored(instant));
    }

    #[test]
    fn cgt_utc_cgt_is_identity(cgt in arb_cgt()) {
        let instant = cgt_to_utc(&cgt).unwrap();
        prop_assert_eq!(utc_to_cgt(instant, cgt.mode()), cgt);
    }

    #[test]
    fn decomposed_fields_stay_in_range(elapsed in any::<i64>(), mode in arb_mode()) {
        let cgt = Cgt::from_elapsed_seconds(elapsed, mode);
        prop_assert!((1..=365).contains(&cgt.day_of_year()));
        prop_assert!(cgt.hour() < 24);
        prop_assert!(cgt.minute() < 60);
        prop_assert!(cgt.second() < 60);
    }

    #[test]
    fn swet_roundtrips(instant in arb_instant()) {
        let swet = utc_to_swet(instant);
        prop_assert_eq!(swet_to_utc(swet).unwrap(), floored(instant));
    }

    #[test]
    fn direct_bridge_matches_utc_path(instant in arb_instant(), mode in arb_mode()) {
        let swet = utc_to_swet(instant);
        prop_assert_eq!(swet_to_cgt(swet, mode).unwrap(), utc_to_cgt(instant, mode));
        prop_assert_eq!(cgt_to_swet(&utc_to_cgt(instant, mode)).unwrap(), swet);
    }

    #[test]
    fn modes_are_seven_hours_apart(instant in arb_instant()) {
        let current = utc_to_cgt(instant, EpochMode::Current).elapsed_seconds().unwrap();
        let legacy = utc_to_cgt(instant, EpochMode::Legacy).elapsed_seconds().unwrap();
        prop_assert_eq!(legacy - current, 25_200);
    }

    #[test]
    fn year_conversion_is_invertible(year in -100_000i64..100_000, a in 0usize..7, b in 0usize..7) {
        let (from, to) = (CalendarSystem::ALL[a], CalendarSystem::ALL[b]);
        prop_assert_eq!(to.convert_year(from.convert_year(year, to), from), year);
    }
}
