//! In-memory ephemeris backed by precomputed tropical positions.

use crate::angles::normalize_degrees;
use crate::ephemeris::provider::{EphemerisError, EphemerisProvider};
use crate::ephemeris::types::{AyanamsaStandard, Body, GeoLocation, HouseSystem, RawPosition, ZodiacMode};
use crate::time::JulianInstant;
use std::collections::HashMap;

/// Serves the same positions for every instant and location.
///
/// Useful when positions were already obtained elsewhere, and for tests.
/// Sidereal queries subtract the ayanamsa, which is either pinned with
/// [`FixedEphemeris::with_ayanamsa`] or taken from the standard's model.
#[derive(Debug, Clone, Default)]
pub struct FixedEphemeris {
    positions: HashMap<Body, RawPosition>,
    ascendant: f64,
    ayanamsa: Option<f64>,
}

impl FixedEphemeris {
    pub fn new(tropical_ascendant: f64) -> Self {
        Self {
            positions: HashMap::new(),
            ascendant: normalize_degrees(tropical_ascendant),
            ayanamsa: None,
        }
    }

    pub fn with_body(mut self, body: Body, longitude: f64, latitude: f64, daily_speed: f64) -> Self {
        self.positions.insert(
            body,
            RawPosition {
                longitude: normalize_degrees(longitude),
                latitude,
                daily_speed,
            },
        );
        self
    }

    /// Use a constant ayanamsa offset regardless of instant or standard.
    pub fn with_ayanamsa(mut self, offset_degrees: f64) -> Self {
        self.ayanamsa = Some(offset_degrees);
        self
    }
}

impl EphemerisProvider for FixedEphemeris {
    fn body_position(
        &self,
        jd: JulianInstant,
        body: Body,
        mode: ZodiacMode,
    ) -> Result<RawPosition, EphemerisError> {
        let tropical = self
            .positions
            .get(&body)
            .copied()
            .ok_or(EphemerisError::UnsupportedBody { body })?;

        match mode {
            ZodiacMode::Tropical => Ok(tropical),
            ZodiacMode::Sidereal(standard) => {
                let offset = self.ayanamsa(jd, standard)?;
                Ok(RawPosition {
                    longitude: normalize_degrees(tropical.longitude - offset),
                    ..tropical
                })
            }
        }
    }

    fn ascendant(
        &self,
        _jd: JulianInstant,
        _location: &GeoLocation,
        _house_system: HouseSystem,
    ) -> Result<f64, EphemerisError> {
        Ok(self.ascendant)
    }

    fn ayanamsa(&self, jd: JulianInstant, standard: AyanamsaStandard) -> Result<f64, EphemerisError> {
        Ok(self.ayanamsa.unwrap_or_else(|| standard.offset_at(jd)))
    }
}
