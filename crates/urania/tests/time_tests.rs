use approx::assert_relative_eq;
use urania::angles::{normalize_degrees, parse_dms, to_dms};
use urania::time::{civil_to_julian_day, julian_day_to_datetime, JulianInstant};
use urania::{BirthInstant, ChartError};

#[test]
fn test_offset_rolls_date_backwards() {
    // 03:00 at +5:30 is 21:30 UTC the previous day
    let jd = civil_to_julian_day(2024, 3, 1, 3.0, 5.5).unwrap();
    let expected = JulianInstant::from_calendar(2024, 2, 29, 21.5);
    assert_relative_eq!(jd.value(), expected.value(), epsilon = 1e-9);
}

#[test]
fn test_offset_rolls_date_forwards() {
    let jd = civil_to_julian_day(1999, 12, 31, 20.0, -8.0).unwrap();
    let expected = JulianInstant::from_calendar(2000, 1, 1, 4.0);
    assert_relative_eq!(jd.value(), expected.value(), epsilon = 1e-9);
}

#[test]
fn test_rejects_offsets_beyond_civil_range() {
    assert!(matches!(
        civil_to_julian_day(2000, 1, 1, 12.0, 15.0),
        Err(ChartError::InvalidTime(_))
    ));
    assert!(matches!(
        BirthInstant::parse("2000-02-30", "10:00", 0.0, 0.0, 0.0),
        Err(ChartError::InvalidTime(_))
    ));
}

#[test]
fn test_julian_day_inverse() {
    let birth = BirthInstant::parse("1969-07-20", "20:17:40", 0.0, 28.6, -80.6).unwrap();
    let jd = birth.julian_day().unwrap();
    let back = julian_day_to_datetime(jd.value()).unwrap();
    assert_eq!(back, birth.utc_datetime().unwrap());
}

#[test]
fn test_dms_round_trip_within_an_arcsecond() {
    for step in 0..3600 {
        let lon = step as f64 * 0.1 + 0.00037;
        let parsed = parse_dms(&to_dms(lon)).unwrap();
        assert!((parsed - lon).abs() <= 1.0 / 3600.0, "{lon} -> {parsed}");
    }
}

#[test]
fn test_normalize_is_congruent() {
    for step in -50..50 {
        let lon = step as f64 * 97.3;
        let n = normalize_degrees(lon);
        assert!((0.0..360.0).contains(&n));
        let turns = (lon - n) / 360.0;
        assert!((turns - turns.round()).abs() < 1e-9);
    }
}
