//! Nakshatra utilities for Vedic astrology.
//!
//! Nakshatras are 27 lunar mansions, each spanning 13°20' (360/27 degrees).
//! Each nakshatra is divided into 4 padas (quarters), and every pada maps to
//! one navamsa sign: the 108 padas walk the 12-sign cycle nine times,
//! starting from Aries at the first pada of Ashwini.

use crate::angles::{normalize_degrees, to_dms};
use crate::ephemeris::Body;
use crate::error::{ChartError, ChartResult};
use crate::vedic::types::Gana;
use crate::zodiac::Sign;
use serde::{Deserialize, Serialize};

pub const NAKSHATRA_COUNT: usize = 27;
pub const NAKSHATRA_SPAN: f64 = 360.0 / NAKSHATRA_COUNT as f64;
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

/// Fixed attributes of one lunar mansion.
#[derive(Debug)]
pub struct NakshatraRecord {
    pub name: &'static str,
    pub deity: &'static str,
    pub ruler: Body,
    pub symbol: &'static str,
    pub nature: &'static str,
    pub gana: Gana,
    /// Yoni animal
    pub animal: &'static str,
}

macro_rules! nakshatra {
    ($name:expr, $deity:expr, $ruler:ident, $symbol:expr, $nature:expr, $gana:ident, $animal:expr) => {
        NakshatraRecord {
            name: $name,
            deity: $deity,
            ruler: Body::$ruler,
            symbol: $symbol,
            nature: $nature,
            gana: Gana::$gana,
            animal: $animal,
        }
    };
}

pub const NAKSHATRAS: [NakshatraRecord; NAKSHATRA_COUNT] = [
    nakshatra!("Ashwini", "Ashwini Kumaras", SouthNode, "Horse's head", "Light/Swift", Deva, "Male Horse"),
    nakshatra!("Bharani", "Yama", Venus, "Yoni", "Fierce", Manushya, "Male Elephant"),
    nakshatra!("Krittika", "Agni", Sun, "Razor/Flame", "Mixed", Rakshasa, "Female Sheep"),
    nakshatra!("Rohini", "Brahma", Moon, "Ox cart", "Fixed", Manushya, "Male Serpent"),
    nakshatra!("Mrigashira", "Soma", Mars, "Deer's head", "Soft", Deva, "Female Serpent"),
    nakshatra!("Ardra", "Rudra", NorthNode, "Teardrop", "Sharp", Manushya, "Female Dog"),
    nakshatra!("Punarvasu", "Aditi", Jupiter, "Bow", "Movable", Deva, "Female Cat"),
    nakshatra!("Pushya", "Brihaspati", Saturn, "Lotus/Arrow", "Light", Deva, "Male Sheep"),
    nakshatra!("Ashlesha", "Nagas", Mercury, "Serpent", "Sharp", Rakshasa, "Male Cat"),
    nakshatra!("Magha", "Pitris", SouthNode, "Throne", "Fierce", Rakshasa, "Male Rat"),
    nakshatra!("Purva Phalguni", "Bhaga", Venus, "Hammock", "Fierce", Manushya, "Female Rat"),
    nakshatra!("Uttara Phalguni", "Aryaman", Sun, "Bed", "Fixed", Manushya, "Male Cow"),
    nakshatra!("Hasta", "Savitar", Moon, "Hand", "Light", Deva, "Female Buffalo"),
    nakshatra!("Chitra", "Vishwakarma", Mars, "Pearl", "Soft", Rakshasa, "Female Tiger"),
    nakshatra!("Swati", "Vayu", NorthNode, "Coral/Sword", "Movable", Deva, "Male Buffalo"),
    nakshatra!("Vishakha", "Indra-Agni", Jupiter, "Arch", "Mixed", Rakshasa, "Male Tiger"),
    nakshatra!("Anuradha", "Mitra", Saturn, "Lotus", "Soft", Deva, "Female Deer"),
    nakshatra!("Jyeshtha", "Indra", Mercury, "Earring", "Sharp", Rakshasa, "Male Deer"),
    nakshatra!("Mula", "Nirriti", SouthNode, "Roots", "Sharp", Rakshasa, "Male Dog"),
    nakshatra!("Purva Ashadha", "Apas", Venus, "Fan", "Fierce", Manushya, "Male Monkey"),
    nakshatra!("Uttara Ashadha", "Vishvadevas", Sun, "Tusk", "Fixed", Manushya, "Male Mongoose"),
    nakshatra!("Shravana", "Vishnu", Moon, "Ear/Trident", "Movable", Deva, "Female Monkey"),
    nakshatra!("Dhanishtha", "Vasus", Mars, "Drum", "Movable", Rakshasa, "Female Lion"),
    nakshatra!("Shatabhisha", "Varuna", NorthNode, "Circle", "Movable", Rakshasa, "Female Horse"),
    nakshatra!("Purva Bhadrapada", "Aja Ekapada", Jupiter, "Sword", "Fierce", Manushya, "Male Lion"),
    nakshatra!("Uttara Bhadrapada", "Ahir Budhnya", Saturn, "Twins", "Fixed", Manushya, "Female Cow"),
    nakshatra!("Revati", "Pushan", Mercury, "Fish/Drum", "Soft", Deva, "Female Elephant"),
];

/// Degree bounds of one mansion.
#[derive(Debug, Clone, Copy)]
pub struct NakshatraBounds {
    pub index: usize,
    pub start: f64,
    pub end: f64,
}

fn build_bounds_table() -> Vec<NakshatraBounds> {
    (0..NAKSHATRA_COUNT)
        .map(|index| {
            let start = index as f64 * NAKSHATRA_SPAN;
            NakshatraBounds {
                index,
                start,
                end: start + NAKSHATRA_SPAN,
            }
        })
        .collect()
}

lazy_static::lazy_static! {
    static ref NAKSHATRA_BOUNDS: Vec<NakshatraBounds> = build_bounds_table();
}

/// Placement of a sidereal longitude in its nakshatra.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NakshatraPlacement {
    /// Zero-based index, 0..=26
    pub index: usize,
    /// One-based display number
    pub number: usize,
    pub name: String,
    pub deity: String,
    pub ruler: Body,
    pub symbol: String,
    pub nature: String,
    pub gana: Gana,
    pub animal: String,
    /// 1..=4
    pub pada: u8,
    pub navamsa: Sign,
    #[serde(rename = "startDegree")]
    pub start_degree: f64,
    #[serde(rename = "endDegree")]
    pub end_degree: f64,
    /// Degrees travelled inside the mansion, [0, 13.333)
    #[serde(rename = "positionInNakshatra")]
    pub position_in_nakshatra: f64,
    pub longitude: f64,
    #[serde(rename = "longitudeDms")]
    pub longitude_dms: String,
}

/// Look up a mansion's fixed record.
pub fn nakshatra_record(index: usize) -> ChartResult<&'static NakshatraRecord> {
    NAKSHATRAS.get(index).ok_or_else(|| {
        ChartError::InvalidAstronomicalInput(format!(
            "nakshatra index {index} outside 0..{NAKSHATRA_COUNT}"
        ))
    })
}

pub const PADA_COUNT: usize = NAKSHATRA_COUNT * 4;

/// Distance from a pada boundary, in padas, treated as sitting on it.
const BOUNDARY_TOLERANCE: f64 = 1e-9;

/// Longitude measured in padas, [0, 108).
///
/// Mansion, pada, position and navamsa are all read off this one value so
/// they cannot disagree at a boundary. Values within [`BOUNDARY_TOLERANCE`]
/// of a whole pada snap onto it, which absorbs the rounding in `lon / span`.
fn pada_units(longitude: f64) -> f64 {
    let units = normalize_degrees(longitude) / PADA_SPAN;
    let nearest = units.round();
    let units = if (units - nearest).abs() < BOUNDARY_TOLERANCE {
        nearest
    } else {
        units
    };
    if units >= PADA_COUNT as f64 {
        units - PADA_COUNT as f64
    } else {
        units
    }
}

/// Zero-based mansion index and the padas travelled inside it, [0, 4).
fn decompose(longitude: f64) -> (usize, f64) {
    let units = pada_units(longitude);
    let index = units as usize / 4;
    let within = (units - (index * 4) as f64).max(0.0);
    (index, within)
}

/// `floor(longitude / span) mod 27`.
pub fn nakshatra_index(longitude: f64) -> usize {
    decompose(longitude).0
}

/// Degrees already travelled inside the containing mansion.
pub fn position_in_nakshatra(longitude: f64) -> f64 {
    decompose(longitude).1 * PADA_SPAN
}

/// Fraction of the containing mansion already travelled, [0, 1).
pub fn elapsed_fraction(longitude: f64) -> f64 {
    decompose(longitude).1 / 4.0
}

/// Quarter of the containing mansion, 1..=4.
pub fn pada(longitude: f64) -> u8 {
    let quarter = decompose(longitude).1 as u8 + 1;
    debug_assert!((1..=4).contains(&quarter), "pada {quarter} out of range");
    quarter
}

/// Navamsa sign of a pada; index 0 of the cycle is Aries.
pub fn navamsa_sign(nakshatra_index: usize, pada: u8) -> Sign {
    debug_assert!((1..=4).contains(&pada), "pada {pada} out of range");
    // pada + 11 is pada - 1 modulo 12
    Sign::from_index((nakshatra_index * 4 + usize::from(pada) + 11) % 12)
}

/// Classify a sidereal longitude into nakshatra, pada and navamsa.
pub fn nakshatra(longitude: f64) -> NakshatraPlacement {
    let lon = normalize_degrees(longitude);
    let (index, within) = decompose(lon);
    let bounds = NAKSHATRA_BOUNDS[index];
    let record = &NAKSHATRAS[index];
    let pada = within as u8 + 1;

    NakshatraPlacement {
        index,
        number: index + 1,
        name: record.name.to_string(),
        deity: record.deity.to_string(),
        ruler: record.ruler,
        symbol: record.symbol.to_string(),
        nature: record.nature.to_string(),
        gana: record.gana,
        animal: record.animal.to_string(),
        pada,
        navamsa: navamsa_sign(index, pada),
        start_degree: bounds.start,
        end_degree: bounds.end,
        position_in_nakshatra: within * PADA_SPAN,
        longitude: lon,
        longitude_dms: to_dms(lon),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_mansion() {
        let p = nakshatra(0.0);
        assert_eq!(p.index, 0);
        assert_eq!(p.number, 1);
        assert_eq!(p.name, "Ashwini");
        assert_eq!(p.ruler, Body::SouthNode);
        assert_eq!(p.pada, 1);
        assert_eq!(p.navamsa, Sign::Aries);
    }

    #[test]
    fn test_forty_five_degrees() {
        let p = nakshatra(45.0);
        assert_eq!(p.index, 3);
        assert_eq!(p.name, "Rohini");
        assert_eq!(p.pada, 2);
        assert!((p.position_in_nakshatra - 5.0).abs() < 1e-9);
        // 3 * 4 + 1 = 13 -> Taurus
        assert_eq!(p.navamsa, Sign::Taurus);
    }

    #[test]
    fn test_last_mansion() {
        let p = nakshatra(359.9);
        assert_eq!(p.index, 26);
        assert_eq!(p.name, "Revati");
        assert_eq!(p.pada, 4);
        assert_eq!(p.navamsa, Sign::Pisces);
    }

    #[test]
    fn test_ranges_hold_everywhere() {
        let mut lon = 0.0;
        while lon < 360.0 {
            let p = nakshatra(lon);
            assert!(p.index < NAKSHATRA_COUNT);
            assert!((1..=4).contains(&p.pada));
            assert!(p.start_degree <= lon + 1e-9 && lon < p.end_degree + 1e-9);
            lon += 0.37;
        }
    }

    #[test]
    fn test_rulers_follow_nine_cycle() {
        for i in 0..NAKSHATRA_COUNT {
            assert_eq!(NAKSHATRAS[i].ruler, NAKSHATRAS[i % 9].ruler);
        }
    }

    #[test]
    fn test_record_lookup_rejects_out_of_range() {
        assert_eq!(nakshatra_record(26).unwrap().name, "Revati");
        assert!(matches!(
            nakshatra_record(27),
            Err(ChartError::InvalidAstronomicalInput(_))
        ));
    }
}
