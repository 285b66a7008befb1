use crate::ephemeris::{AyanamsaStandard, Body, HouseSystem, ZodiacMode};
use crate::error::UnknownName;
use crate::time::BirthInstant;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Zodiac tradition a chart is cast in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceFrame {
    /// Sidereal zodiac, Rashi + nakshatra classification
    #[default]
    Vedic,
    /// Tropical zodiac, sign + decan classification
    Western,
}

const VEDIC_BODIES: &[Body] = &[
    Body::Sun,
    Body::Moon,
    Body::Mars,
    Body::Mercury,
    Body::Jupiter,
    Body::Venus,
    Body::Saturn,
    Body::NorthNode,
    Body::SouthNode,
];

const WESTERN_BODIES: &[Body] = &[
    Body::Sun,
    Body::Moon,
    Body::Mars,
    Body::Mercury,
    Body::Jupiter,
    Body::Venus,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
    Body::NorthNode,
    Body::SouthNode,
];

impl ReferenceFrame {
    pub fn all() -> [ReferenceFrame; 2] {
        [ReferenceFrame::Vedic, ReferenceFrame::Western]
    }

    pub fn name(self) -> &'static str {
        match self {
            ReferenceFrame::Vedic => "vedic",
            ReferenceFrame::Western => "western",
        }
    }

    /// Bodies tracked in this frame, in report order.
    ///
    /// The Vedic frame leaves out the outer planets.
    pub fn bodies(self) -> &'static [Body] {
        match self {
            ReferenceFrame::Vedic => VEDIC_BODIES,
            ReferenceFrame::Western => WESTERN_BODIES,
        }
    }

    pub fn zodiac_mode(self, ayanamsa: AyanamsaStandard) -> ZodiacMode {
        match self {
            ReferenceFrame::Vedic => ZodiacMode::Sidereal(ayanamsa),
            ReferenceFrame::Western => ZodiacMode::Tropical,
        }
    }
}

impl fmt::Display for ReferenceFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReferenceFrame {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vedic" | "sidereal" => Ok(ReferenceFrame::Vedic),
            "western" | "tropical" => Ok(ReferenceFrame::Western),
            _ => Err(UnknownName::new("frame", s, ["vedic", "western"])),
        }
    }
}

/// Everything `compute` needs besides the ephemeris.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub birth: BirthInstant,
    pub frame: ReferenceFrame,
    pub ayanamsa: AyanamsaStandard,
    #[serde(rename = "houseSystem")]
    pub house_system: HouseSystem,
    /// Instant the current Dasha period is resolved against
    #[serde(rename = "referenceInstant")]
    pub reference_instant: DateTime<Utc>,
}

impl ChartRequest {
    /// Request with default settings, pinned to the current wall clock.
    pub fn new(birth: BirthInstant) -> Self {
        Self {
            birth,
            frame: ReferenceFrame::default(),
            ayanamsa: AyanamsaStandard::default(),
            house_system: HouseSystem::default(),
            reference_instant: Utc::now(),
        }
    }

    pub fn with_frame(mut self, frame: ReferenceFrame) -> Self {
        self.frame = frame;
        self
    }

    pub fn with_ayanamsa(mut self, ayanamsa: AyanamsaStandard) -> Self {
        self.ayanamsa = ayanamsa;
        self
    }

    pub fn with_house_system(mut self, house_system: HouseSystem) -> Self {
        self.house_system = house_system;
        self
    }

    pub fn with_reference_instant(mut self, reference: DateTime<Utc>) -> Self {
        self.reference_instant = reference;
        self
    }
}
