//! Vedic classification types shared by the sidereal classifiers.

use crate::vedic::nakshatra::NakshatraPlacement;
use crate::vedic::rashi::RashiPlacement;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Temperament class of a nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gana {
    Deva,
    Manushya,
    Rakshasa,
}

impl fmt::Display for Gana {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Gana::Deva => "Deva",
            Gana::Manushya => "Manushya",
            Gana::Rakshasa => "Rakshasa",
        };
        f.write_str(name)
    }
}

/// Rashi and nakshatra of one sidereal longitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiderealPlacement {
    pub longitude: f64,
    #[serde(rename = "longitudeDms")]
    pub longitude_dms: String,
    pub rashi: RashiPlacement,
    pub nakshatra: NakshatraPlacement,
}
