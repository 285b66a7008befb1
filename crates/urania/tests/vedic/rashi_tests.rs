use urania::vedic::rashi::*;
use urania::vedic::sidereal_placement;
use urania::zodiac::{Element, Quality};
use urania::{Body, Sign};

#[test]
fn test_rashi_seventh_sign() {
    let r = rashi(185.0);
    assert_eq!(r.index, 6);
    assert_eq!(r.sign, Sign::Libra);
    assert_eq!(r.english, "Libra");
    assert_eq!(r.element, Element::Air);
    assert_eq!(r.quality, Quality::Movable);
    assert!((r.degree_in_sign - 5.0).abs() < 1e-9);
}

#[test]
fn test_rashi_table_matches_rulers() {
    assert_eq!(rashi(0.0).full_name, "Mesha (Aries)");
    assert_eq!(rashi(100.0).ruler, Body::Moon);
    assert_eq!(rashi(305.0).name, "Kumbha");
    assert_eq!(rashi(359.0).ruler, Body::Jupiter);
}

#[test]
fn test_sidereal_placement_combines_rashi_and_nakshatra() {
    let tropical = 210.0;
    let sidereal = sidereal_longitude(tropical, 23.85);
    let placement = sidereal_placement(sidereal);
    assert!((placement.longitude - 186.15).abs() < 1e-9);
    assert_eq!(placement.rashi.name, "Tula");
    assert_eq!(placement.nakshatra.name, "Chitra");
    assert_eq!(placement.longitude_dms, "186°9'0\"");
}
