use urania::western::decans::*;
use urania::{Body, Sign};

#[test]
fn test_decan_index() {
    assert_eq!(decan_index(0.0), 1);
    assert_eq!(decan_index(5.0), 1);
    assert_eq!(decan_index(9.999), 1);
    assert_eq!(decan_index(10.0), 2);
    assert_eq!(decan_index(15.0), 2);
    assert_eq!(decan_index(19.999), 2);
    assert_eq!(decan_index(20.0), 3);
    assert_eq!(decan_index(25.0), 3);
    assert_eq!(decan_index(29.999), 3);
}

#[test]
fn test_decan_for_sign_and_degree() {
    let decan = decan_for(Sign::Aries, 5.0);
    assert_eq!(decan.index, 1);
    // first decan of a sign is ruled by the sign's own ruler
    assert_eq!(decan.ruler, Body::Mars);
}

#[test]
fn test_earth_and_air_rotation() {
    assert_eq!(decan_ruler(Sign::Taurus, 2), Body::Mercury);
    assert_eq!(decan_ruler(Sign::Capricorn, 2), Body::Venus);
    assert_eq!(decan_ruler(Sign::Gemini, 3), Body::Saturn);
    assert_eq!(decan_ruler(Sign::Aquarius, 2), Body::Mercury);
}
