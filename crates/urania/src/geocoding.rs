//! Place-name resolution contract.
//!
//! The engine only needs coordinates; turning "Chennai, India" into them is
//! left to whatever service the caller plugs in.

use crate::ephemeris::GeoLocation;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeocodeError {
    #[error("Place not found: {0}")]
    PlaceNotFound(String),
    #[error("Place '{place}' is ambiguous; candidates: {}", candidates.join(", "))]
    PlaceAmbiguous {
        place: String,
        candidates: Vec<String>,
    },
    #[error("Geocoding service unavailable: {0}")]
    Unavailable(String),
}

/// Resolves free-text place names to coordinates.
pub trait Geocoder {
    fn resolve(&self, place: &str) -> Result<GeoLocation, GeocodeError>;
}

impl<G: Geocoder + ?Sized> Geocoder for &G {
    fn resolve(&self, place: &str) -> Result<GeoLocation, GeocodeError> {
        (**self).resolve(place)
    }
}

/// Case-insensitive lookup in a fixed list of known places.
///
/// A query matching several entries by prefix is reported as ambiguous.
#[derive(Debug, Clone, Default)]
pub struct StaticGeocoder {
    places: Vec<(String, GeoLocation)>,
}

impl StaticGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_place(mut self, name: &str, lat: f64, lon: f64) -> Self {
        self.places.push((name.to_string(), GeoLocation { lat, lon }));
        self
    }
}

impl Geocoder for StaticGeocoder {
    fn resolve(&self, place: &str) -> Result<GeoLocation, GeocodeError> {
        let wanted = place.trim().to_lowercase();
        if wanted.is_empty() {
            return Err(GeocodeError::PlaceNotFound(place.to_string()));
        }

        if let Some((_, location)) = self.places.iter().find(|(name, _)| name.to_lowercase() == wanted) {
            return Ok(*location);
        }

        let matches: Vec<&(String, GeoLocation)> = self
            .places
            .iter()
            .filter(|(name, _)| name.to_lowercase().starts_with(&wanted))
            .collect();

        match matches.as_slice() {
            [] => Err(GeocodeError::PlaceNotFound(place.to_string())),
            [(_, location)] => Ok(*location),
            many => Err(GeocodeError::PlaceAmbiguous {
                place: place.to_string(),
                candidates: many.iter().map(|(name, _)| name.clone()).collect(),
            }),
        }
    }
}
