use crate::angles::normalize_degrees;
use crate::ephemeris::provider::{EphemerisError, EphemerisProvider};
use crate::ephemeris::types::{AyanamsaStandard, Body, GeoLocation, HouseSystem, RawPosition, ZodiacMode};
use crate::time::JulianInstant;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use swisseph::swe::{calc_ut, houses_ex};
use swisseph::AscMc;

const DEFAULT_EPHEMERIS_PATH: &str = "/usr/local/share/swisseph";

// SE_EPHE_PATH is written once per process, by the first adapter.
static INSTALLED_PATH: OnceLock<PathBuf> = OnceLock::new();

// FLG_SWIEPH | FLG_SPEED
const CALC_FLAGS: u32 = 2 | 256;

// Swiss Ephemeris body numbers. The north node is the mean node (MEAN_NODE = 10).
const BODY_CODES: &[(Body, u32)] = &[
    (Body::Sun, 0),
    (Body::Moon, 1),
    (Body::Mercury, 2),
    (Body::Venus, 3),
    (Body::Mars, 4),
    (Body::Jupiter, 5),
    (Body::Saturn, 6),
    (Body::Uranus, 7),
    (Body::Neptune, 8),
    (Body::Pluto, 9),
    (Body::NorthNode, 10),
];

/// Swiss Ephemeris adapter implementation
///
/// Positions come from `calc_ut` in the tropical zodiac; sidereal longitudes
/// subtract the ayanamsa model so every standard is available without
/// touching the library's global sidereal mode.
pub struct SwissEphemerisAdapter {
    ephemeris_path: PathBuf,
}

impl SwissEphemerisAdapter {
    /// Create a new adapter with optional ephemeris path
    ///
    /// The Swiss Ephemeris data path is process-wide. The first adapter
    /// installs it; later adapters share that path whatever they were given.
    pub fn new(ephemeris_path: Option<PathBuf>) -> Result<Self, EphemerisError> {
        let path = ephemeris_path.unwrap_or_else(|| {
            env::var("SWISS_EPHEMERIS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_EPHEMERIS_PATH))
        });

        if !path.exists() {
            return Err(EphemerisError::FileNotFound {
                path: path.display().to_string(),
                message: "Ephemeris path does not exist. Please ensure Swiss Ephemeris data files are installed.".to_string(),
            });
        }

        let installed = INSTALLED_PATH.get_or_init(|| {
            // The C library falls back to SE_EPHE_PATH when no path was set explicitly.
            env::set_var("SE_EPHE_PATH", &path);
            log::debug!("Swiss Ephemeris data path: {}", path.display());
            path.clone()
        });
        if *installed != path {
            log::warn!(
                "Swiss Ephemeris data path already set to {}; ignoring {}",
                installed.display(),
                path.display()
            );
        }

        Ok(Self {
            ephemeris_path: installed.clone(),
        })
    }

    /// Data path installed by the first adapter of this process, if any.
    pub fn installed_path() -> Option<&'static Path> {
        INSTALLED_PATH.get().map(PathBuf::as_path)
    }

    /// Data path in effect for this adapter.
    pub fn ephemeris_path(&self) -> &Path {
        &self.ephemeris_path
    }

    fn body_code(body: Body) -> Result<u32, EphemerisError> {
        BODY_CODES
            .iter()
            .find(|(b, _)| *b == body)
            .map(|(_, code)| *code)
            .ok_or(EphemerisError::UnsupportedBody { body })
    }

    fn tropical_position(&self, jd: JulianInstant, body: Body) -> Result<RawPosition, EphemerisError> {
        let code = Self::body_code(body)?;
        let result = calc_ut(jd.value(), code, CALC_FLAGS).map_err(|e| {
            EphemerisError::CalculationFailed {
                body,
                julian_day: jd.value(),
                message: format!("Swiss Ephemeris error: {}", e),
            }
        })?;

        let out = result.out;
        Ok(RawPosition {
            longitude: normalize_degrees(out[0]),
            latitude: out[1],
            daily_speed: out[3],
        })
    }
}

impl EphemerisProvider for SwissEphemerisAdapter {
    fn body_position(
        &self,
        jd: JulianInstant,
        body: Body,
        mode: ZodiacMode,
    ) -> Result<RawPosition, EphemerisError> {
        let tropical = self.tropical_position(jd, body)?;
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
        jd: JulianInstant,
        location: &GeoLocation,
        house_system: HouseSystem,
    ) -> Result<f64, EphemerisError> {
        let (_cusps, angles) = houses_ex(jd.value(), 0, location.lat, location.lon, house_system.code() as i32);
        let ascendant = AscMc::from_array(angles).ascendant;
        if !ascendant.is_finite() {
            return Err(EphemerisError::HouseCalculationFailed {
                message: format!(
                    "no ascendant for {} houses at lat {}",
                    house_system.name(),
                    location.lat
                ),
            });
        }
        Ok(normalize_degrees(ascendant))
    }

    fn ayanamsa(&self, jd: JulianInstant, standard: AyanamsaStandard) -> Result<f64, EphemerisError> {
        Ok(standard.offset_at(jd))
    }
}
