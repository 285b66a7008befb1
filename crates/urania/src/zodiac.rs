//! The twelve 30° zodiac divisions.
//!
//! Tropical signs, sidereal Rashis and navamsa signs all index into the same
//! cycle; only the longitude fed in differs. Index 0 is Aries / Mesha.

use crate::angles::normalize_degrees;
use crate::ephemeris::Body;
use crate::error::UnknownName;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const SIGN_SPAN: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// Modality, in the Vedic naming (cardinal / fixed / mutable in Western usage).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Movable,
    Fixed,
    Dual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

struct SignRecord {
    sign: Sign,
    english: &'static str,
    sanskrit: &'static str,
    element: Element,
    quality: Quality,
    ruler: Body,
}

const SIGNS: [SignRecord; 12] = [
    SignRecord { sign: Sign::Aries, english: "Aries", sanskrit: "Mesha", element: Element::Fire, quality: Quality::Movable, ruler: Body::Mars },
    SignRecord { sign: Sign::Taurus, english: "Taurus", sanskrit: "Vrishabha", element: Element::Earth, quality: Quality::Fixed, ruler: Body::Venus },
    SignRecord { sign: Sign::Gemini, english: "Gemini", sanskrit: "Mithuna", element: Element::Air, quality: Quality::Dual, ruler: Body::Mercury },
    SignRecord { sign: Sign::Cancer, english: "Cancer", sanskrit: "Karka", element: Element::Water, quality: Quality::Movable, ruler: Body::Moon },
    SignRecord { sign: Sign::Leo, english: "Leo", sanskrit: "Simha", element: Element::Fire, quality: Quality::Fixed, ruler: Body::Sun },
    SignRecord { sign: Sign::Virgo, english: "Virgo", sanskrit: "Kanya", element: Element::Earth, quality: Quality::Dual, ruler: Body::Mercury },
    SignRecord { sign: Sign::Libra, english: "Libra", sanskrit: "Tula", element: Element::Air, quality: Quality::Movable, ruler: Body::Venus },
    SignRecord { sign: Sign::Scorpio, english: "Scorpio", sanskrit: "Vrishchika", element: Element::Water, quality: Quality::Fixed, ruler: Body::Mars },
    SignRecord { sign: Sign::Sagittarius, english: "Sagittarius", sanskrit: "Dhanu", element: Element::Fire, quality: Quality::Dual, ruler: Body::Jupiter },
    SignRecord { sign: Sign::Capricorn, english: "Capricorn", sanskrit: "Makara", element: Element::Earth, quality: Quality::Movable, ruler: Body::Saturn },
    SignRecord { sign: Sign::Aquarius, english: "Aquarius", sanskrit: "Kumbha", element: Element::Air, quality: Quality::Fixed, ruler: Body::Saturn },
    SignRecord { sign: Sign::Pisces, english: "Pisces", sanskrit: "Meena", element: Element::Water, quality: Quality::Dual, ruler: Body::Jupiter },
];

impl Sign {
    pub fn all() -> impl Iterator<Item = Sign> {
        SIGNS.iter().map(|r| r.sign)
    }

    /// Sign at position `index` of the cycle, wrapping modulo 12.
    pub fn from_index(index: usize) -> Sign {
        SIGNS[index % 12].sign
    }

    /// Sign containing an ecliptic longitude.
    pub fn from_longitude(longitude: f64) -> Sign {
        Self::from_index(sign_index(longitude))
    }

    /// Zero-based position in the cycle.
    pub fn index(self) -> usize {
        self as usize
    }

    fn record(self) -> &'static SignRecord {
        &SIGNS[self.index()]
    }

    pub fn name(self) -> &'static str {
        self.record().english
    }

    pub fn sanskrit_name(self) -> &'static str {
        self.record().sanskrit
    }

    pub fn element(self) -> Element {
        self.record().element
    }

    pub fn quality(self) -> Quality {
        self.record().quality
    }

    /// Traditional ruler (no outer planets).
    pub fn ruler(self) -> Body {
        self.record().ruler
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Sign {
    type Err = UnknownName;

    /// Accepts English or Sanskrit names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SIGNS
            .iter()
            .find(|r| r.english.eq_ignore_ascii_case(wanted) || r.sanskrit.eq_ignore_ascii_case(wanted))
            .map(|r| r.sign)
            .ok_or_else(|| UnknownName::new("sign", s, SIGNS.iter().map(|r| r.english)))
    }
}

/// `floor(longitude / 30) mod 12` on the normalized longitude.
pub fn sign_index(longitude: f64) -> usize {
    (normalize_degrees(longitude) / SIGN_SPAN) as usize % 12
}

/// Position inside the containing sign, in [0, 30).
pub fn degree_in_sign(longitude: f64) -> f64 {
    normalize_degrees(longitude) % SIGN_SPAN
}
