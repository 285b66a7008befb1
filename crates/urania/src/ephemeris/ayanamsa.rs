//! Ayanamsa standards and a built-in offset model.
//!
//! Each standard is pinned by its offset at J2000.0; the offset at any other
//! instant adds the IAU 2006 general precession in longitude. Providers with a
//! native ayanamsa routine may use their own value instead.

use crate::error::UnknownName;
use crate::time::JulianInstant;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AyanamsaStandard {
    #[serde(rename = "lahiri")]
    Lahiri,
    #[default]
    #[serde(rename = "raman")]
    Raman,
    #[serde(rename = "kp")]
    Krishnamurti,
    #[serde(rename = "yukteshwar")]
    Yukteshwar,
    #[serde(rename = "true_chitra")]
    TrueChitra,
    #[serde(rename = "fagan_bradley")]
    FaganBradley,
}

// (variant, config key, display name, offset at J2000.0 in degrees)
const STANDARDS: &[(AyanamsaStandard, &str, &str, f64)] = &[
    (AyanamsaStandard::Lahiri, "lahiri", "Lahiri (Chitrapaksha)", 23.853),
    (AyanamsaStandard::Raman, "raman", "B.V. Raman", 22.370),
    (AyanamsaStandard::Krishnamurti, "kp", "Krishnamurti (KP)", 23.850),
    (AyanamsaStandard::Yukteshwar, "yukteshwar", "Sri Yukteshwar", 22.376),
    (AyanamsaStandard::TrueChitra, "true_chitra", "True Chitrapaksha", 23.853),
    (AyanamsaStandard::FaganBradley, "fagan_bradley", "Fagan-Bradley", 24.736),
];

impl AyanamsaStandard {
    fn entry(self) -> &'static (AyanamsaStandard, &'static str, &'static str, f64) {
        STANDARDS
            .iter()
            .find(|(s, ..)| *s == self)
            .unwrap_or(&STANDARDS[0])
    }

    pub fn all() -> impl Iterator<Item = AyanamsaStandard> {
        STANDARDS.iter().map(|(s, ..)| *s)
    }

    pub fn key(self) -> &'static str {
        self.entry().1
    }

    pub fn display_name(self) -> &'static str {
        self.entry().2
    }

    pub fn reference_j2000_deg(self) -> f64 {
        self.entry().3
    }

    /// Mean ayanamsa in degrees at the given instant.
    pub fn offset_at(self, jd: JulianInstant) -> f64 {
        self.reference_j2000_deg() + general_precession_deg(jd.centuries_since_j2000())
    }
}

impl fmt::Display for AyanamsaStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for AyanamsaStandard {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        let alias = match wanted.as_str() {
            "krishnamurti" => "kp",
            "chitrapaksha" => "lahiri",
            "true_citra" => "true_chitra",
            other => other,
        };
        STANDARDS
            .iter()
            .find(|(_, key, ..)| *key == alias)
            .map(|(std, ..)| *std)
            .ok_or_else(|| UnknownName::new("ayanamsa", s, STANDARDS.iter().map(|(_, k, ..)| *k)))
    }
}

/// IAU 2006 general precession in ecliptic longitude, degrees.
fn general_precession_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    let arcsec =
        5028.796195 * t + 1.1054348 * t2 + 0.00007964 * t3 - 0.000023857 * t4 - 0.0000000383 * t5;
    arcsec / 3600.0
}
