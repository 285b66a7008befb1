//! Vimshottari dasha calculation for Vedic astrology.
//!
//! Dashas are time periods ruled by planets, calculated based on the Moon's
//! nakshatra. The nine rulers cycle through a 120-year sequence; the Moon's
//! mansion picks the starting ruler and how much of its period was already
//! spent before birth.

use crate::ephemeris::Body;
use crate::error::{ChartError, ChartResult};
use crate::vedic::nakshatra::{elapsed_fraction, nakshatra_index, nakshatra_record, NAKSHATRA_COUNT};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;
/// Average year length used for every period boundary.
pub const VIMSHOTTARI_YEAR_DAYS: f64 = 365.25;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

type RulerYears = (Body, f64);

pub const VIMSHOTTARI_SEQUENCE: [RulerYears; 9] = [
    (Body::SouthNode, 7.0),
    (Body::Venus, 20.0),
    (Body::Sun, 6.0),
    (Body::Moon, 10.0),
    (Body::Mars, 7.0),
    (Body::NorthNode, 18.0),
    (Body::Jupiter, 16.0),
    (Body::Saturn, 19.0),
    (Body::Mercury, 17.0),
];

/// One Mahadasha.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashaPeriod {
    pub ruler: Body,
    /// Traditional name of the ruler, e.g. "Ketu"
    pub name: String,
    /// Length of this period in years (truncated for the first period)
    pub years: f64,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DashaPeriod {
    /// Half-open `[start, end)` containment.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

/// Nine contiguous Mahadashas starting at birth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashaTimeline {
    #[serde(rename = "startingRuler")]
    pub starting_ruler: Body,
    #[serde(rename = "moonNakshatra")]
    pub moon_nakshatra: String,
    #[serde(rename = "moonNakshatraIndex")]
    pub moon_nakshatra_index: usize,
    /// Portion of the Moon's mansion already travelled at birth, [0, 1)
    #[serde(rename = "elapsedFraction")]
    pub elapsed_fraction: f64,
    /// Years of the first period remaining at birth
    #[serde(rename = "balanceYears")]
    pub balance_years: f64,
    pub periods: Vec<DashaPeriod>,
    #[serde(rename = "currentPeriod", skip_serializing_if = "Option::is_none")]
    pub current_period: Option<Body>,
}

impl DashaTimeline {
    /// Build the timeline for a Moon sidereal longitude and birth instant,
    /// resolving the current period against `reference`.
    pub fn compute(
        moon_sidereal_longitude: f64,
        birth: DateTime<Utc>,
        reference: DateTime<Utc>,
    ) -> ChartResult<Self> {
        if !moon_sidereal_longitude.is_finite() {
            return Err(ChartError::InvalidAstronomicalInput(format!(
                "moon longitude {moon_sidereal_longitude} is not finite"
            )));
        }

        let index = nakshatra_index(moon_sidereal_longitude);
        let record = nakshatra_record(index)?;
        let starting_ruler = vimshottari_lord(index)?;
        let elapsed = elapsed_fraction(moon_sidereal_longitude);
        let periods = vimshottari_periods(starting_ruler, elapsed, birth)?;
        let balance_years = periods.first().map(|p| p.years).unwrap_or(0.0);

        log::debug!(
            "vimshottari: moon in {} ({:.4} elapsed), starting ruler {}",
            record.name,
            elapsed,
            starting_ruler.vedic_name()
        );

        let mut timeline = Self {
            starting_ruler,
            moon_nakshatra: record.name.to_string(),
            moon_nakshatra_index: index,
            elapsed_fraction: elapsed,
            balance_years,
            periods,
            current_period: None,
        };
        timeline.resolve_current(reference);
        Ok(timeline)
    }

    /// Period containing `reference`, if any. Never alters the period list.
    pub fn period_at(&self, reference: DateTime<Utc>) -> Option<&DashaPeriod> {
        self.periods.iter().find(|p| p.contains(reference))
    }

    /// Re-resolve the current period against a new reference instant.
    pub fn resolve_current(&mut self, reference: DateTime<Utc>) -> Option<&DashaPeriod> {
        self.current_period = self.period_at(reference).map(|p| p.ruler);
        self.current()
    }

    pub fn current(&self) -> Option<&DashaPeriod> {
        let ruler = self.current_period?;
        self.periods.iter().find(|p| p.ruler == ruler)
    }

    pub fn start(&self) -> Option<DateTime<Utc>> {
        self.periods.first().map(|p| p.start)
    }

    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.periods.last().map(|p| p.end)
    }
}

/// Starting Mahadasha ruler for a nakshatra index.
pub fn vimshottari_lord(nakshatra_index: usize) -> ChartResult<Body> {
    if nakshatra_index >= NAKSHATRA_COUNT {
        return Err(ChartError::InvalidAstronomicalInput(format!(
            "nakshatra index {nakshatra_index} outside 0..{NAKSHATRA_COUNT}"
        )));
    }
    Ok(VIMSHOTTARI_SEQUENCE[nakshatra_index % VIMSHOTTARI_SEQUENCE.len()].0)
}

/// Full Mahadasha length of a ruler, `None` for bodies outside the sequence.
pub fn full_years(ruler: Body) -> Option<f64> {
    VIMSHOTTARI_SEQUENCE
        .iter()
        .find(|(body, _)| *body == ruler)
        .map(|(_, years)| *years)
}

/// Walk the sequence from `starting_ruler`, truncating the first period by
/// the fraction already elapsed at birth.
pub fn vimshottari_periods(
    starting_ruler: Body,
    elapsed_fraction: f64,
    birth: DateTime<Utc>,
) -> ChartResult<Vec<DashaPeriod>> {
    let start_index = VIMSHOTTARI_SEQUENCE
        .iter()
        .position(|(body, _)| *body == starting_ruler)
        .ok_or_else(|| {
            ChartError::InvalidAstronomicalInput(format!(
                "{starting_ruler} does not rule a Vimshottari period"
            ))
        })?;

    let mut periods = Vec::with_capacity(VIMSHOTTARI_SEQUENCE.len());
    let mut current_start = birth;

    for offset in 0..VIMSHOTTARI_SEQUENCE.len() {
        let (ruler, full) = VIMSHOTTARI_SEQUENCE[(start_index + offset) % VIMSHOTTARI_SEQUENCE.len()];
        let years = if offset == 0 {
            full * (1.0 - elapsed_fraction)
        } else {
            full
        };
        let end = advance_years(current_start, years)?;

        periods.push(DashaPeriod {
            ruler,
            name: ruler.vedic_name().to_string(),
            years,
            start: current_start,
            end,
        });
        current_start = end;
    }

    Ok(periods)
}

fn advance_years(start: DateTime<Utc>, years: f64) -> ChartResult<DateTime<Utc>> {
    let millis = (years * VIMSHOTTARI_YEAR_DAYS * MILLIS_PER_DAY).round() as i64;
    start
        .checked_add_signed(Duration::milliseconds(millis))
        .ok_or_else(|| ChartError::InvalidTime(format!("dasha period starting {start} overflows the calendar")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::TimeZone;

    fn birth() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(1990, 5, 17, 8, 30, 0).unwrap()
    }

    #[test]
    fn test_sequence_sums_to_120_years() {
        let total: f64 = VIMSHOTTARI_SEQUENCE.iter().map(|(_, y)| y).sum();
        assert_eq!(total, VIMSHOTTARI_TOTAL_YEARS);
    }

    #[test]
    fn test_lord_cycles_every_nine() {
        assert_eq!(vimshottari_lord(0).unwrap(), Body::SouthNode);
        assert_eq!(vimshottari_lord(3).unwrap(), Body::Moon);
        assert_eq!(vimshottari_lord(12).unwrap(), Body::Moon);
        assert_eq!(vimshottari_lord(26).unwrap(), Body::Mercury);
        assert!(matches!(
            vimshottari_lord(27),
            Err(ChartError::InvalidAstronomicalInput(_))
        ));
    }

    #[test]
    fn test_first_period_truncated() {
        // 45° sits 5/13.333 = 0.375 through Rohini (Moon, 10 years)
        let timeline = DashaTimeline::compute(45.0, birth(), birth()).unwrap();
        assert_eq!(timeline.starting_ruler, Body::Moon);
        assert_eq!(timeline.moon_nakshatra, "Rohini");
        assert_relative_eq!(timeline.elapsed_fraction, 0.375, epsilon = 1e-9);
        assert_relative_eq!(timeline.balance_years, 6.25, epsilon = 1e-9);
        assert_eq!(timeline.periods.len(), 9);
        assert_eq!(timeline.periods[1].ruler, Body::Mars);
        assert_eq!(timeline.periods[8].ruler, Body::Sun);
    }

    #[test]
    fn test_periods_are_contiguous() {
        let timeline = DashaTimeline::compute(205.0, birth(), birth()).unwrap();
        assert_eq!(timeline.periods[0].start, birth());
        for pair in timeline.periods.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
            assert!(pair[0].start < pair[0].end);
        }
    }

    #[test]
    fn test_current_period_resolution() {
        let mut timeline = DashaTimeline::compute(45.0, birth(), birth()).unwrap();
        assert_eq!(timeline.current_period, Some(Body::Moon));

        let periods = timeline.periods.clone();
        let later = periods[2].start + Duration::days(1);
        assert_eq!(timeline.resolve_current(later).map(|p| p.ruler), Some(Body::NorthNode));
        assert_eq!(timeline.periods, periods);

        // end is exclusive
        assert_eq!(timeline.resolve_current(periods[2].end).map(|p| p.ruler), Some(Body::Jupiter));

        let before_birth = birth() - Duration::days(1);
        assert!(timeline.resolve_current(before_birth).is_none());
        assert!(timeline.current_period.is_none());
    }

    #[test]
    fn test_rejects_non_finite_longitude() {
        assert!(DashaTimeline::compute(f64::NAN, birth(), birth()).is_err());
    }
}
