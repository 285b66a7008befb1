use urania::western::tropical_sign;
use urania::zodiac::{sign_index, Element};
use urania::{Body, Sign};

#[test]
fn test_tropical_sign_from_longitude() {
    let p = tropical_sign(5.0);
    assert_eq!(p.sign, Sign::Aries);
    assert_eq!(p.decan.index, 1);

    let p = tropical_sign(263.75);
    assert_eq!(p.sign, Sign::Sagittarius);
    assert_eq!(p.element, Element::Fire);
    assert_eq!(p.ruler, Body::Jupiter);
    assert_eq!(p.decan.index, 3);
    assert_eq!(p.degree_in_sign_dms, "23°45'0\"");
}

#[test]
fn test_sign_is_periodic() {
    for step in -100..100 {
        let lon = step as f64 * 3.7 + 0.05;
        assert_eq!(sign_index(lon), sign_index(lon + 360.0), "longitude {lon}");
        assert_eq!(tropical_sign(lon).sign, tropical_sign(lon + 360.0).sign);
    }
}
