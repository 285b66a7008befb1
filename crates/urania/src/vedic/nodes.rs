//! Lunar node mirror.
//!
//! Ketu is always exactly opposite Rahu; it is derived here and never asked
//! of an ephemeris.

use crate::angles::normalize_degrees;
use crate::ephemeris::RawPosition;

/// South node longitude for a north node longitude.
pub fn south_node_longitude(north_longitude: f64) -> f64 {
    normalize_degrees(north_longitude + 180.0)
}

/// Mirror a north node position through the ecliptic centre.
///
/// The nodes share their motion, so the daily speed is carried over.
pub fn mirror_north_node(north: &RawPosition) -> RawPosition {
    RawPosition {
        longitude: south_node_longitude(north.longitude),
        latitude: -north.latitude,
        daily_speed: north.daily_speed,
    }
}
