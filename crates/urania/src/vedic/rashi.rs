//! Sidereal signs (Rashis).

use crate::angles::{normalize_degrees, to_dms};
use crate::ephemeris::Body;
use crate::zodiac::{degree_in_sign, Element, Quality, Sign};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RashiPlacement {
    /// Zero-based index, Mesha = 0
    pub index: usize,
    pub number: usize,
    pub sign: Sign,
    /// Sanskrit name, e.g. "Tula"
    pub name: String,
    pub english: String,
    /// "Tula (Libra)"
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub element: Element,
    pub quality: Quality,
    pub ruler: Body,
    #[serde(rename = "degreeInSign")]
    pub degree_in_sign: f64,
    #[serde(rename = "degreeInSignDms")]
    pub degree_in_sign_dms: String,
}

/// `normalize(tropical - ayanamsa)`.
pub fn sidereal_longitude(tropical_longitude: f64, ayanamsa_offset: f64) -> f64 {
    normalize_degrees(tropical_longitude - ayanamsa_offset)
}

/// Classify a sidereal longitude into its Rashi.
pub fn rashi(sidereal_longitude: f64) -> RashiPlacement {
    let sign = Sign::from_longitude(sidereal_longitude);
    let degree = degree_in_sign(sidereal_longitude);

    RashiPlacement {
        index: sign.index(),
        number: sign.index() + 1,
        sign,
        name: sign.sanskrit_name().to_string(),
        english: sign.name().to_string(),
        full_name: format!("{} ({})", sign.sanskrit_name(), sign.name()),
        element: sign.element(),
        quality: sign.quality(),
        ruler: sign.ruler(),
        degree_in_sign: degree,
        degree_in_sign_dms: to_dms(degree),
    }
}
