use urania::vedic::nakshatra::*;
use urania::{Body, Sign};

#[test]
fn test_nakshatra_for_longitude() {
    let p = nakshatra(0.0);
    assert_eq!(p.name, "Ashwini");
    assert_eq!(p.ruler, Body::SouthNode);
    assert_eq!(p.pada, 1);

    let p2 = nakshatra(13.33);
    assert_eq!(p2.name, "Ashwini");
    assert_eq!(p2.pada, 4);

    // boundary between mansions
    let p3 = nakshatra(NAKSHATRA_SPAN);
    assert_eq!(p3.name, "Bharani");
    assert_eq!(p3.pada, 1);
}

#[test]
fn test_moon_at_forty_five_degrees() {
    let p = nakshatra(45.0);
    assert_eq!(p.index, 3);
    assert_eq!(p.number, 4);
    assert_eq!(p.pada, 2);
    assert!((p.position_in_nakshatra - 5.0).abs() < 1e-9);
    assert_eq!(p.deity, "Brahma");
    assert_eq!(p.animal, "Male Serpent");
}

#[test]
fn test_index_and_pada_ranges() {
    let mut lon = 0.0;
    while lon < 360.0 {
        let p = nakshatra(lon);
        assert!(p.index <= 26, "index {} at {lon}", p.index);
        assert!((1..=4).contains(&p.pada), "pada {} at {lon}", p.pada);
        lon += 0.113;
    }
}

#[test]
fn test_navamsa_walks_the_sign_cycle() {
    // Ashwini padas: Aries..Cancer, Bharani padas: Leo..Scorpio
    assert_eq!(navamsa_sign(0, 1), Sign::Aries);
    assert_eq!(navamsa_sign(0, 4), Sign::Cancer);
    assert_eq!(navamsa_sign(1, 1), Sign::Leo);
    assert_eq!(navamsa_sign(1, 4), Sign::Scorpio);
    // 108 padas cover the cycle nine times
    assert_eq!(navamsa_sign(26, 4), Sign::Pisces);
}

#[test]
fn test_every_mansion_start() {
    for k in 0..NAKSHATRA_COUNT {
        for lon in [k as f64 * NAKSHATRA_SPAN, k as f64 * 40.0 / 3.0, k as f64 * 360.0 / 27.0] {
            let p = nakshatra(lon);
            assert_eq!(p.index, k, "index at {lon}");
            assert_eq!(p.pada, 1, "pada at {lon}");
            assert!(p.position_in_nakshatra < 1e-9, "position {} at {lon}", p.position_in_nakshatra);
            assert_eq!(p.navamsa, Sign::from_index(k * 4 % 12), "navamsa at {lon}");
            assert_eq!(nakshatra_index(lon), k);
            assert_eq!(pada(lon), 1);
            assert!(elapsed_fraction(lon) < 1e-9);
        }
    }
}

#[test]
fn test_whole_degree_mansion_starts() {
    // every third mansion starts on a whole degree: 40, 80, ... 320
    for m in 1..9 {
        let lon = 40.0 * m as f64;
        let p = nakshatra(lon);
        assert_eq!(p.index, 3 * m, "index at {lon}");
        assert_eq!(p.pada, 1, "pada at {lon}");
        assert_eq!(p.navamsa, Sign::Aries, "navamsa at {lon}");
        assert!(p.position_in_nakshatra < 1e-9);
    }
}

#[test]
fn test_just_before_mansion_start() {
    for k in 1..NAKSHATRA_COUNT {
        let lon = k as f64 * NAKSHATRA_SPAN - 1e-6;
        let p = nakshatra(lon);
        assert_eq!(p.index, k - 1, "index at {lon}");
        assert_eq!(p.pada, 4, "pada at {lon}");
        assert!((p.position_in_nakshatra - NAKSHATRA_SPAN).abs() < 1e-5);
    }
    let p = nakshatra(360.0 - 1e-6);
    assert_eq!(p.index, 26);
    assert_eq!(p.pada, 4);
}

#[test]
fn test_every_pada_start() {
    for unit in 0..PADA_COUNT {
        let lon = unit as f64 * PADA_SPAN;
        let p = nakshatra(lon);
        assert_eq!(p.index, unit / 4, "index at {lon}");
        assert_eq!(p.pada as usize, unit % 4 + 1, "pada at {lon}");
        assert_eq!(p.navamsa, Sign::from_index(unit % 12), "navamsa at {lon}");
        assert!((p.position_in_nakshatra - (unit % 4) as f64 * PADA_SPAN).abs() < 1e-9);
    }
}
