use crate::ephemeris::types::{AyanamsaStandard, Body, GeoLocation, HouseSystem, RawPosition, ZodiacMode};
use crate::time::JulianInstant;
use thiserror::Error;

/// Errors raised by an ephemeris collaborator.
#[derive(Error, Debug)]
pub enum EphemerisError {
    #[error("Ephemeris file not found at path: {path}. {message}")]
    FileNotFound { path: String, message: String },
    #[error("Body {body} is not provided by this ephemeris")]
    UnsupportedBody { body: Body },
    #[error("Failed to calculate position for {body} at JD {julian_day}: {message}")]
    CalculationFailed {
        body: Body,
        julian_day: f64,
        message: String,
    },
    #[error("House calculation failed: {message}")]
    HouseCalculationFailed { message: String },
}

/// Source of raw celestial geometry for an instant.
///
/// Implementations must be free of per-call mutable state so a single
/// provider can serve concurrent chart computations.
pub trait EphemerisProvider {
    /// Ecliptic position of `body` at `jd`, in the requested zodiac.
    fn body_position(
        &self,
        jd: JulianInstant,
        body: Body,
        mode: ZodiacMode,
    ) -> Result<RawPosition, EphemerisError>;

    /// Tropical longitude of the ascendant for `location`.
    fn ascendant(
        &self,
        jd: JulianInstant,
        location: &GeoLocation,
        house_system: HouseSystem,
    ) -> Result<f64, EphemerisError>;

    /// Ayanamsa offset in degrees for `standard` at `jd`.
    fn ayanamsa(&self, jd: JulianInstant, standard: AyanamsaStandard) -> Result<f64, EphemerisError>;
}

impl<P: EphemerisProvider + ?Sized> EphemerisProvider for &P {
    fn body_position(
        &self,
        jd: JulianInstant,
        body: Body,
        mode: ZodiacMode,
    ) -> Result<RawPosition, EphemerisError> {
        (**self).body_position(jd, body, mode)
    }

    fn ascendant(
        &self,
        jd: JulianInstant,
        location: &GeoLocation,
        house_system: HouseSystem,
    ) -> Result<f64, EphemerisError> {
        (**self).ascendant(jd, location, house_system)
    }

    fn ayanamsa(&self, jd: JulianInstant, standard: AyanamsaStandard) -> Result<f64, EphemerisError> {
        (**self).ayanamsa(jd, standard)
    }
}
