pub mod dashas;
pub mod nakshatra;
pub mod nodes;
pub mod rashi;
pub mod types;

pub use dashas::{vimshottari_lord, DashaPeriod, DashaTimeline, VIMSHOTTARI_SEQUENCE};
pub use nakshatra::{nakshatra, navamsa_sign, NakshatraPlacement, NAKSHATRA_SPAN, PADA_SPAN};
pub use nodes::{mirror_north_node, south_node_longitude};
pub use rashi::{rashi, sidereal_longitude, RashiPlacement};
pub use types::{Gana, SiderealPlacement};

use crate::angles::{normalize_degrees, to_dms};

/// Rashi and nakshatra for one sidereal longitude.
pub fn sidereal_placement(sidereal_longitude: f64) -> SiderealPlacement {
    let lon = normalize_degrees(sidereal_longitude);
    SiderealPlacement {
        longitude: lon,
        longitude_dms: to_dms(lon),
        rashi: rashi(lon),
        nakshatra: nakshatra(lon),
    }
}
