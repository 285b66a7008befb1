use approx::assert_relative_eq;
use chrono::{Duration, TimeZone, Utc};
use urania::vedic::dashas::*;
use urania::Body;

#[test]
fn test_compute_vimshottari_dasha() {
    // 13.33° is at the very end of Ashwini (Ketu)
    let birth = Utc.with_ymd_and_hms(2001, 3, 9, 4, 0, 0).unwrap();
    let timeline = DashaTimeline::compute(13.33, birth, birth).unwrap();
    assert_eq!(timeline.periods.len(), 9);
    assert_eq!(timeline.periods[0].ruler, Body::SouthNode);
    assert_eq!(timeline.periods[0].name, "Ketu");
    assert!(timeline.balance_years < 0.01);
    assert_eq!(timeline.periods[1].ruler, Body::Venus);
}

#[test]
fn test_full_cycle_is_120_years() {
    let total: f64 = VIMSHOTTARI_SEQUENCE
        .iter()
        .map(|(ruler, _)| full_years(*ruler).unwrap())
        .sum();
    assert_eq!(total, 120.0);
    assert_eq!(full_years(Body::Uranus), None);
}

#[test]
fn test_periods_chain_without_gaps() {
    let birth = Utc.with_ymd_and_hms(1975, 8, 2, 23, 15, 0).unwrap();
    for step in 0..72 {
        let moon = step as f64 * 5.0 + 0.7;
        let timeline = DashaTimeline::compute(moon, birth, birth).unwrap();
        assert_eq!(timeline.start(), Some(birth));
        for pair in timeline.periods.windows(2) {
            assert_eq!(pair[0].end, pair[1].start, "moon {moon}");
        }
        // rulers after the first run at full length
        for period in &timeline.periods[1..] {
            assert_eq!(Some(period.years), full_years(period.ruler));
        }
    }
}

#[test]
fn test_span_matches_average_year() {
    let birth = Utc.with_ymd_and_hms(1990, 1, 1, 0, 0, 0).unwrap();
    let timeline = DashaTimeline::compute(45.0, birth, birth).unwrap();
    let total_years: f64 = timeline.periods.iter().map(|p| p.years).sum();
    assert_relative_eq!(total_years, 120.0 - 10.0 * timeline.elapsed_fraction, epsilon = 1e-9);

    let end = timeline.end().unwrap();
    let days = (end - birth).num_milliseconds() as f64 / 86_400_000.0;
    assert_relative_eq!(days, total_years * VIMSHOTTARI_YEAR_DAYS, epsilon = 1e-6);
}

#[test]
fn test_reference_instant_only_moves_current_period() {
    let birth = Utc.with_ymd_and_hms(1990, 1, 1, 0, 0, 0).unwrap();
    let early = DashaTimeline::compute(205.0, birth, birth).unwrap();
    let late = DashaTimeline::compute(205.0, birth, birth + Duration::days(365 * 40)).unwrap();

    assert_eq!(early.periods, late.periods);
    assert_eq!(early.current_period, Some(Body::Jupiter));
    assert_eq!(late.current_period, Some(Body::Mercury));

    let after_all = timeline_end_plus_one(&early);
    let mut moved = early.clone();
    assert!(moved.resolve_current(after_all).is_none());
    assert_eq!(moved.periods, early.periods);
}

fn timeline_end_plus_one(timeline: &DashaTimeline) -> chrono::DateTime<Utc> {
    timeline.end().unwrap() + Duration::seconds(1)
}

#[test]
fn test_mansion_start_gives_full_first_period() {
    let birth = Utc.with_ymd_and_hms(1990, 1, 1, 0, 0, 0).unwrap();
    for k in 0..27 {
        let moon = k as f64 * 40.0 / 3.0;
        let timeline = DashaTimeline::compute(moon, birth, birth).unwrap();
        let ruler = vimshottari_lord(k).unwrap();
        assert_eq!(timeline.moon_nakshatra_index, k, "moon {moon}");
        assert_eq!(timeline.starting_ruler, ruler, "moon {moon}");
        assert!(timeline.elapsed_fraction < 1e-9, "moon {moon}");
        assert_relative_eq!(timeline.balance_years, full_years(ruler).unwrap(), epsilon = 1e-9);
        assert_relative_eq!(
            timeline.periods.iter().map(|p| p.years).sum::<f64>(),
            VIMSHOTTARI_TOTAL_YEARS,
            epsilon = 1e-9
        );
    }
}

#[test]
fn test_forty_degrees_starts_a_full_moon_period() {
    let birth = Utc.with_ymd_and_hms(1990, 1, 1, 0, 0, 0).unwrap();
    let timeline = DashaTimeline::compute(40.0, birth, birth).unwrap();
    assert_eq!(timeline.moon_nakshatra, "Rohini");
    assert_eq!(timeline.starting_ruler, Body::Moon);
    assert_relative_eq!(timeline.balance_years, 10.0, epsilon = 1e-9);
    assert_eq!(timeline.periods[1].ruler, Body::Mars);
    let tenth_year = birth + Duration::days(365 * 9);
    assert_eq!(timeline.period_at(tenth_year).map(|p| p.ruler), Some(Body::Moon));
}
