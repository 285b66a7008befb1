//! Structured chart output.

use crate::chart::request::ReferenceFrame;
use crate::chinese::ChineseYearCycle;
use crate::ephemeris::{AyanamsaStandard, Body, HouseSystem};
use crate::time::{BirthInstant, JulianInstant};
use crate::vedic::{DashaTimeline, SiderealPlacement};
use crate::western::TropicalPlacement;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartMeta {
    pub birth: BirthInstant,
    #[serde(rename = "julianDay")]
    pub julian_day: JulianInstant,
    #[serde(rename = "houseSystem")]
    pub house_system: HouseSystem,
    #[serde(rename = "referenceInstant")]
    pub reference_instant: DateTime<Utc>,
}

/// Ayanamsa applied to a sidereal frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AyanamsaInfo {
    pub standard: AyanamsaStandard,
    pub name: String,
    #[serde(rename = "offsetDegrees")]
    pub offset_degrees: f64,
    #[serde(rename = "offsetDms")]
    pub offset_dms: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyPlacement {
    pub body: Body,
    pub name: String,
    /// Longitude in the frame's zodiac
    pub longitude: f64,
    #[serde(rename = "longitudeDms")]
    pub longitude_dms: String,
    pub latitude: f64,
    #[serde(rename = "dailySpeed")]
    pub daily_speed: f64,
    pub retrograde: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tropical: Option<TropicalPlacement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidereal: Option<SiderealPlacement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AscendantPlacement {
    /// Longitude in the frame's zodiac
    pub longitude: f64,
    #[serde(rename = "longitudeDms")]
    pub longitude_dms: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tropical: Option<TropicalPlacement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidereal: Option<SiderealPlacement>,
}

/// Positions classified in one reference frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameChart {
    pub frame: ReferenceFrame,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ayanamsa: Option<AyanamsaInfo>,
    pub ascendant: AscendantPlacement,
    pub bodies: Vec<BodyPlacement>,
}

impl FrameChart {
    pub fn body(&self, body: Body) -> Option<&BodyPlacement> {
        self.bodies.iter().find(|p| p.body == body)
    }
}

/// Full result of a single-frame computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredChart {
    pub meta: ChartMeta,
    pub chart: FrameChart,
    pub dasha: DashaTimeline,
    pub chinese: ChineseYearCycle,
}

impl StructuredChart {
    pub fn body(&self, body: Body) -> Option<&BodyPlacement> {
        self.chart.body(body)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Vedic and Western charts sharing one Julian Day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiSystemChart {
    pub meta: ChartMeta,
    pub vedic: FrameChart,
    pub western: FrameChart,
    pub dasha: DashaTimeline,
    pub chinese: ChineseYearCycle,
}

impl MultiSystemChart {
    pub fn frame(&self, frame: ReferenceFrame) -> &FrameChart {
        match frame {
            ReferenceFrame::Vedic => &self.vedic,
            ReferenceFrame::Western => &self.western,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
