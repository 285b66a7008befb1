//! Error types for chart computation.

use crate::ephemeris::EphemerisError;
use crate::geocoding::GeocodeError;
use thiserror::Error;

/// Errors that can occur while deriving a chart.
///
/// Collaborator failures are wrapped unchanged; the core never retries them.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Invalid civil time: {0}")]
    InvalidTime(String),
    #[error("Invalid astronomical input: {0}")]
    InvalidAstronomicalInput(String),
    #[error("Malformed angle: {0}")]
    MalformedAngle(String),
    #[error("Ephemeris unavailable: {0}")]
    EphemerisUnavailable(#[from] EphemerisError),
    #[error(transparent)]
    Geocoding(#[from] GeocodeError),
}

pub type ChartResult<T> = Result<T, ChartError>;

/// A configuration or request name that matched none of the known choices.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind} '{value}'. Valid choices: {valid:?}")]
pub struct UnknownName {
    pub kind: &'static str,
    pub value: String,
    pub valid: Vec<String>,
}

impl UnknownName {
    pub(crate) fn new<'a>(
        kind: &'static str,
        value: &str,
        valid: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self {
            kind,
            value: value.to_string(),
            valid: valid.into_iter().map(str::to_string).collect(),
        }
    }
}
