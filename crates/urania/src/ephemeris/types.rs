use crate::error::UnknownName;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use super::ayanamsa::AyanamsaStandard;

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

/// Instantaneous geometry of one body, as returned by an ephemeris.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawPosition {
    /// Ecliptic longitude in degrees, [0, 360)
    pub longitude: f64,
    /// Ecliptic latitude in degrees
    pub latitude: f64,
    /// Speed in longitude (degrees per day)
    #[serde(rename = "dailySpeed")]
    pub daily_speed: f64,
}

impl RawPosition {
    pub fn is_retrograde(&self) -> bool {
        self.daily_speed < 0.0
    }
}

/// Celestial bodies the engine knows how to classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    /// Mean ascending lunar node (Rahu).
    NorthNode,
    /// Descending lunar node (Ketu), always mirrored from the north node.
    SouthNode,
}

const ALL_BODIES: [Body; 12] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
    Body::NorthNode,
    Body::SouthNode,
];

impl Body {
    pub const fn all() -> &'static [Body] {
        &ALL_BODIES
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Moon => "moon",
            Self::Mercury => "mercury",
            Self::Venus => "venus",
            Self::Mars => "mars",
            Self::Jupiter => "jupiter",
            Self::Saturn => "saturn",
            Self::Uranus => "uranus",
            Self::Neptune => "neptune",
            Self::Pluto => "pluto",
            Self::NorthNode => "north_node",
            Self::SouthNode => "south_node",
        }
    }

    /// Display name in Jyotish usage (nodes are Rahu and Ketu).
    pub const fn vedic_name(self) -> &'static str {
        match self {
            Self::NorthNode => "Rahu",
            Self::SouthNode => "Ketu",
            other => other.western_name(),
        }
    }

    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
            Self::NorthNode => "North Node",
            Self::SouthNode => "South Node",
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Body {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        let alias = match wanted.as_str() {
            "rahu" => "north_node",
            "ketu" => "south_node",
            other => other,
        };
        ALL_BODIES
            .iter()
            .copied()
            .find(|b| b.id() == alias)
            .ok_or_else(|| UnknownName::new("body", s, ALL_BODIES.iter().map(|b| b.id())))
    }
}

/// Requested longitude frame for a position query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacMode {
    Tropical,
    Sidereal(AyanamsaStandard),
}

/// House systems understood by the ascendant query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystem {
    #[default]
    Placidus,
    WholeSign,
    Koch,
    Equal,
    Regiomontanus,
    Campanus,
    Porphyry,
}

const HOUSE_SYSTEMS: &[(HouseSystem, &str, u8)] = &[
    (HouseSystem::Placidus, "placidus", b'P'),
    (HouseSystem::WholeSign, "whole_sign", b'W'),
    (HouseSystem::Koch, "koch", b'K'),
    (HouseSystem::Equal, "equal", b'E'),
    (HouseSystem::Regiomontanus, "regiomontanus", b'R'),
    (HouseSystem::Campanus, "campanus", b'C'),
    (HouseSystem::Porphyry, "porphyry", b'O'),
];

impl HouseSystem {
    fn entry(self) -> &'static (HouseSystem, &'static str, u8) {
        // every variant has a row
        HOUSE_SYSTEMS
            .iter()
            .find(|(hs, _, _)| *hs == self)
            .unwrap_or(&HOUSE_SYSTEMS[0])
    }

    pub fn name(self) -> &'static str {
        self.entry().1
    }

    /// Single-letter code used by the Swiss Ephemeris house routines.
    pub fn code(self) -> u8 {
        self.entry().2
    }
}

impl FromStr for HouseSystem {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        HOUSE_SYSTEMS
            .iter()
            .find(|(_, name, _)| *name == wanted)
            .map(|(hs, _, _)| *hs)
            .ok_or_else(|| {
                UnknownName::new("house system", s, HOUSE_SYSTEMS.iter().map(|(_, n, _)| *n))
            })
    }
}
