//! Derived-astrology computation engine.
//!
//! Turns raw ecliptic positions, an ayanamsa and a birth instant into zodiac
//! placements, nakshatras, a Vimshottari Dasha timeline and the Chinese year
//! cycle. Celestial mechanics are delegated to an [`EphemerisProvider`];
//! everything else here is a pure function of its inputs.

pub mod angles;
pub mod chart;
pub mod chinese;
pub mod ephemeris;
pub mod error;
pub mod geocoding;
pub mod time;
pub mod vedic;
pub mod western;
pub mod zodiac;

pub use angles::{normalize_degrees, parse_dms, to_dms};
pub use chart::{
    compute, compute_multi_system, ChartRequest, MultiSystemChart, ReferenceFrame, StructuredChart,
};
pub use chinese::{chinese_year, chinese_year_for, ChineseYearCycle};
pub use ephemeris::{
    AyanamsaStandard, Body, EphemerisError, EphemerisProvider, FixedEphemeris, GeoLocation,
    HouseSystem, RawPosition, ZodiacMode,
};
#[cfg(feature = "swisseph")]
pub use ephemeris::SwissEphemerisAdapter;
pub use error::{ChartError, ChartResult, UnknownName};
pub use geocoding::{GeocodeError, Geocoder};
pub use time::{BirthInstant, JulianInstant};
pub use zodiac::Sign;
