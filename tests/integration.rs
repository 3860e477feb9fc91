use chrono::{DateTime, TimeZone, Utc};
use holochron::{
    all_offsets, cgt_to_swet, cgt_to_utc, offset_for, swet_to_cgt, swet_to_utc, utc_to_cgt,
    utc_to_swet, CalendarSystem, Cgt, CgtField, EpochMode, TimeError,
};

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

#[test]
fn release_date_in_every_system() {
    let release = utc(1977, 5, 25, 0, 0, 0);

    assert_eq!(utc_to_swet(release), 0);
    assert_eq!(
        utc_to_cgt(release, EpochMode::Current).to_string(),
        "CGT -22 168 17:00:00"
    );
    assert_eq!(
        utc_to_cgt(release, EpochMode::Legacy).to_string(),
        "CGT -22 169 00:00:00"
    );
    assert_eq!(offset_for("BBY/ABY", release).unwrap().label, "ABY 0");
}

#[test]
fn new_year_2026_holonet_timestamp() {
    let cgt = Cgt::new(27, 36, 11, 37, 1, EpochMode::Current).unwrap();
    let instant = cgt_to_utc(&cgt).unwrap();
    assert_eq!(instant, utc(2025, 12, 31, 18, 37, 1));
    assert_eq!(utc_to_cgt(instant, EpochMode::Current), cgt);

    let swet = utc_to_swet(instant);
    assert_eq!(cgt_to_swet(&cgt).unwrap(), swet);
    assert_eq!(swet_to_utc(swet).unwrap(), instant);
}

#[test]
fn switching_modes_keeps_the_instant() {
    let current = utc_to_cgt(utc(2026, 10, 16, 0, 0, 0), EpochMode::Current);
    let legacy = current.with_mode(EpochMode::Legacy).unwrap();
    assert_eq!(legacy.to_string(), "CGT 27 325 00:00:00");
    assert_eq!(legacy.to_utc().unwrap(), current.to_utc().unwrap());
    assert_eq!(legacy.with_mode(EpochMode::Current).unwrap(), current);
}

#[test]
fn invalid_fields_name_the_offender() {
    let cases = [
        (Cgt::new(0, 0, 0, 0, 0, EpochMode::Current), CgtField::DayOfYear, 0),
        (Cgt::new(0, 366, 0, 0, 0, EpochMode::Current), CgtField::DayOfYear, 366),
        (Cgt::new(0, 1, 24, 0, 0, EpochMode::Current), CgtField::Hour, 24),
        (Cgt::new(0, 1, 0, 60, 0, EpochMode::Legacy), CgtField::Minute, 60),
        (Cgt::new(0, 1, 0, 0, 60, EpochMode::Legacy), CgtField::Second, 60),
    ];
    for (result, expected_field, expected_value) in cases {
        match result {
            Err(TimeError::InvalidField { field, value }) => {
                assert_eq!(field, expected_field);
                assert_eq!(value, expected_value);
            }
            other => panic!("expected InvalidField, got {other:?}"),
        }
    }
}

#[test]
fn swet_and_cgt_agree_across_the_anchor_gap() {
    for swet in [-233_366_400, -1, 0, 1, 679_302_000, 1_546_300_800] {
        for mode in EpochMode::ALL {
            let cgt = swet_to_cgt(swet, mode).unwrap();
            assert_eq!(cgt_to_swet(&cgt).unwrap(), swet);
            assert_eq!(
                cgt.to_utc().unwrap(),
                swet_to_utc(swet).unwrap(),
                "{mode} {swet}"
            );
        }
    }
}

#[test]
fn offsets_by_name_match_offsets_by_system() {
    let instant = utc(1983, 5, 25, 0, 0, 0);
    let by_system = all_offsets(instant);
    assert_eq!(by_system.len(), CalendarSystem::ALL.len());
    for (system, label) in CalendarSystem::ALL.into_iter().zip(&by_system) {
        assert_eq!(&offset_for(system.name(), instant).unwrap(), label);
    }
    assert_eq!(by_system[0].to_string(), "ABY 6");
}

#[test]
fn unknown_inputs_are_rejected() {
    assert!(matches!(
        offset_for("Imperial Calendar", utc(2000, 1, 1, 0, 0, 0)),
        Err(TimeError::UnknownSystem(_))
    ));
    assert!(matches!(
        "imperial".parse::<EpochMode>(),
        Err(TimeError::UnknownEpochMode(_))
    ));
}

#[test]
fn error_messages_are_readable() {
    let err = Cgt::new(3, 1, 25, 0, 0, EpochMode::Current).unwrap_err();
    assert_eq!(err.to_string(), "25 is not a valid CGT hour (0..=23)");
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::*;
    use serde_json::json;

    #[test]
    fn cgt_uses_flat_field_names() {
        let cgt = Cgt::new(27, 36, 11, 37, 1, EpochMode::Current).unwrap();
        let value = serde_json::to_value(cgt).unwrap();
        assert_eq!(
            value,
            json!({
                "year": 27,
                "day": 36,
                "hour": 11,
                "minute": 37,
                "second": 1,
                "mode": "current",
            })
        );
        let back: Cgt = serde_json::from_value(value).unwrap();
        assert_eq!(back, cgt);
    }

    #[test]
    fn missing_mode_defaults_to_current() {
        let cgt: Cgt =
            serde_json::from_str(r#"{"year":-22,"day":168,"hour":17,"minute":0,"second":0}"#)
                .unwrap();
        assert_eq!(cgt.mode(), EpochMode::Current);
        assert_eq!(cgt.to_utc().unwrap(), utc(1977, 5, 25, 0, 0, 0));
    }

    #[test]
    fn out_of_range_fields_fail_to_deserialize() {
        let day_zero = r#"{"year":1,"day":0,"hour":0,"minute":0,"second":0,"mode":"legacy"}"#;
        assert!(serde_json::from_str::<Cgt>(day_zero).is_err());

        let negative_hour = r#"{"year":1,"day":1,"hour":-1,"minute":0,"second":0}"#;
        assert!(serde_json::from_str::<Cgt>(negative_hour).is_err());
    }

    #[test]
    fn calendar_types_serialize() {
        let label = offset_for("GSC", utc(2026, 1, 1, 0, 0, 0)).unwrap();
        let value = serde_json::to_value(&label).unwrap();
        assert_eq!(
            value,
            json!({
                "system_name": "Galactic Standard Calendar",
                "label": "GSC 25092",
                "numeric_offset": 25092,
            })
        );
        assert_eq!(
            serde_json::to_string(&CalendarSystem::ThoYorArrival).unwrap(),
            "\"tho_yor_arrival\""
        );
        assert_eq!(
            serde_json::from_str::<EpochMode>("\"legacy\"").unwrap(),
            EpochMode::Legacy
        );
    }
}

#[cfg(feature = "tz")]
mod time_zones {
    use super::*;
    use chrono::NaiveDate;
    use holochron::{cgt_to_zone, zone_to_cgt};

    #[test]
    fn holonet_timestamp_in_pacific_time() {
        let cgt = Cgt::new(27, 36, 11, 37, 1, EpochMode::Current).unwrap();
        let local = cgt_to_zone(&cgt, "America/Los_Angeles").unwrap();
        let expected = NaiveDate::from_ymd_opt(2025, 12, 31)
            .unwrap()
            .and_hms_opt(10, 37, 1)
            .unwrap();
        assert_eq!(local.naive_local(), expected);
        assert_eq!(
            zone_to_cgt(expected, "America/Los_Angeles", EpochMode::Current).unwrap(),
            cgt
        );
    }

    #[test]
    fn utc_zone_is_identity() {
        let cgt = Cgt::epoch(EpochMode::Legacy);
        let local = cgt_to_zone(&cgt, "UTC").unwrap();
        assert_eq!(local.naive_utc(), cgt.to_utc().unwrap().naive_utc());
        assert_eq!(local.naive_local(), local.naive_utc());
    }
}
