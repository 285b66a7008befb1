//! Tropical sign classification.

use crate::angles::{normalize_degrees, to_dms};
use crate::ephemeris::Body;
use crate::western::decans::{decan_for, Decan};
use crate::zodiac::{degree_in_sign, Element, Quality, Sign};
use serde::{Deserialize, Serialize};

/// Where a tropical longitude falls in the zodiac.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TropicalPlacement {
    pub sign: Sign,
    /// Zero-based sign index, Aries = 0
    #[serde(rename = "signIndex")]
    pub sign_index: usize,
    #[serde(rename = "degreeInSign")]
    pub degree_in_sign: f64,
    #[serde(rename = "degreeInSignDms")]
    pub degree_in_sign_dms: String,
    pub element: Element,
    pub quality: Quality,
    pub ruler: Body,
    pub decan: Decan,
}

/// Classify a tropical longitude into its sign and decan.
pub fn tropical_sign(longitude: f64) -> TropicalPlacement {
    let lon = normalize_degrees(longitude);
    let sign = Sign::from_longitude(lon);
    let degree = degree_in_sign(lon);

    TropicalPlacement {
        sign,
        sign_index: sign.index(),
        degree_in_sign: degree,
        degree_in_sign_dms: to_dms(degree),
        element: sign.element(),
        quality: sign.quality(),
        ruler: sign.ruler(),
        decan: decan_for(sign, degree),
    }
}
