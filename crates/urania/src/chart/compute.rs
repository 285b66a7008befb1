//! Chart composition.
//!
//! Pulls raw geometry from an [`EphemerisProvider`] and runs every longitude
//! through the classifiers. Any failure aborts the whole computation; there
//! is no partial chart.

use crate::angles::{normalize_degrees, to_dms};
use crate::chart::data::{
    AscendantPlacement, AyanamsaInfo, BodyPlacement, ChartMeta, FrameChart, MultiSystemChart,
    StructuredChart,
};
use crate::chart::request::{ChartRequest, ReferenceFrame};
use crate::chinese::chinese_year;
use crate::ephemeris::{Body, EphemerisProvider, RawPosition, ZodiacMode};
use crate::error::ChartResult;
use crate::time::JulianInstant;
use crate::vedic::{mirror_north_node, sidereal_placement, DashaTimeline};
use crate::western::tropical_sign;

/// Compute a chart in the request's reference frame.
pub fn compute<P>(provider: &P, request: &ChartRequest) -> ChartResult<StructuredChart>
where
    P: EphemerisProvider + ?Sized,
{
    request.birth.validate()?;
    let jd = request.birth.julian_day()?;
    log::debug!("computing {} chart at JD {:.6}", request.frame, jd.value());

    let chart = compute_frame(provider, jd, request, request.frame)?;
    let dasha = compute_dasha(provider, jd, request)?;

    Ok(StructuredChart {
        meta: chart_meta(request, jd),
        chart,
        dasha,
        chinese: chinese_year(request.birth.year, request.birth.month, request.birth.day),
    })
}

/// Compute Vedic and Western charts for one birth instant.
///
/// The request's `frame` is ignored; both frames share the Julian Day, the
/// Dasha timeline and the Chinese cycle.
pub fn compute_multi_system<P>(provider: &P, request: &ChartRequest) -> ChartResult<MultiSystemChart>
where
    P: EphemerisProvider + ?Sized,
{
    request.birth.validate()?;
    let jd = request.birth.julian_day()?;
    log::debug!("computing multi-system chart at JD {:.6}", jd.value());

    let vedic = compute_frame(provider, jd, request, ReferenceFrame::Vedic)?;
    let western = compute_frame(provider, jd, request, ReferenceFrame::Western)?;
    let dasha = compute_dasha(provider, jd, request)?;

    Ok(MultiSystemChart {
        meta: chart_meta(request, jd),
        vedic,
        western,
        dasha,
        chinese: chinese_year(request.birth.year, request.birth.month, request.birth.day),
    })
}

fn chart_meta(request: &ChartRequest, jd: JulianInstant) -> ChartMeta {
    ChartMeta {
        birth: request.birth.clone(),
        julian_day: jd,
        house_system: request.house_system,
        reference_instant: request.reference_instant,
    }
}

fn compute_frame<P>(
    provider: &P,
    jd: JulianInstant,
    request: &ChartRequest,
    frame: ReferenceFrame,
) -> ChartResult<FrameChart>
where
    P: EphemerisProvider + ?Sized,
{
    let mode = frame.zodiac_mode(request.ayanamsa);
    let ayanamsa = match mode {
        ZodiacMode::Sidereal(standard) => {
            let offset = provider.ayanamsa(jd, standard)?;
            log::debug!("ayanamsa {} = {:.6}°", standard.key(), offset);
            Some(AyanamsaInfo {
                standard,
                name: standard.display_name().to_string(),
                offset_degrees: offset,
                offset_dms: to_dms(offset),
            })
        }
        ZodiacMode::Tropical => None,
    };

    let mut bodies = Vec::with_capacity(frame.bodies().len());
    let mut north_node: Option<RawPosition> = None;

    for &body in frame.bodies() {
        let raw = match body {
            Body::SouthNode => match north_node {
                Some(north) => mirror_north_node(&north),
                None => provider.body_position(jd, Body::NorthNode, mode).map(|n| mirror_north_node(&n))?,
            },
            _ => provider.body_position(jd, body, mode)?,
        };
        if body == Body::NorthNode {
            north_node = Some(raw);
        }
        bodies.push(classify_body(frame, body, raw));
    }

    let tropical_asc = provider.ascendant(jd, &request.birth.location(), request.house_system)?;
    let ascendant = match &ayanamsa {
        Some(info) => classify_ascendant(frame, normalize_degrees(tropical_asc - info.offset_degrees)),
        None => classify_ascendant(frame, tropical_asc),
    };

    Ok(FrameChart {
        frame,
        ayanamsa,
        ascendant,
        bodies,
    })
}

fn classify_body(frame: ReferenceFrame, body: Body, raw: RawPosition) -> BodyPlacement {
    let longitude = normalize_degrees(raw.longitude);
    let (name, tropical, sidereal) = match frame {
        ReferenceFrame::Vedic => (body.vedic_name(), None, Some(sidereal_placement(longitude))),
        ReferenceFrame::Western => (body.western_name(), Some(tropical_sign(longitude)), None),
    };

    BodyPlacement {
        body,
        name: name.to_string(),
        longitude,
        longitude_dms: to_dms(longitude),
        latitude: raw.latitude,
        daily_speed: raw.daily_speed,
        // the south node is conventionally always retrograde
        retrograde: body == Body::SouthNode || raw.is_retrograde(),
        tropical,
        sidereal,
    }
}

fn classify_ascendant(frame: ReferenceFrame, longitude: f64) -> AscendantPlacement {
    let longitude = normalize_degrees(longitude);
    AscendantPlacement {
        longitude,
        longitude_dms: to_dms(longitude),
        tropical: (frame == ReferenceFrame::Western).then(|| tropical_sign(longitude)),
        sidereal: (frame == ReferenceFrame::Vedic).then(|| sidereal_placement(longitude)),
    }
}

fn compute_dasha<P>(provider: &P, jd: JulianInstant, request: &ChartRequest) -> ChartResult<DashaTimeline>
where
    P: EphemerisProvider + ?Sized,
{
    let moon = provider.body_position(jd, Body::Moon, ZodiacMode::Sidereal(request.ayanamsa))?;
    let birth_utc = request.birth.utc_datetime()?;
    DashaTimeline::compute(moon.longitude, birth_utc, request.reference_instant)
}
