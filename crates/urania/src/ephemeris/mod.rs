pub mod ayanamsa;
pub mod fixed;
pub mod provider;
pub mod types;

#[cfg(feature = "swisseph")]
pub mod adapter;

#[cfg(feature = "swisseph")]
pub use adapter::SwissEphemerisAdapter;
pub use ayanamsa::AyanamsaStandard;
pub use fixed::FixedEphemeris;
pub use provider::{EphemerisError, EphemerisProvider};
pub use types::{Body, GeoLocation, HouseSystem, RawPosition, ZodiacMode};
