//! Angular helpers shared by every classifier.

use crate::error::{ChartError, ChartResult};

/// Normalize degrees to [0, 360).
pub fn normalize_degrees(value: f64) -> f64 {
    let mut normalized = value % 360.0;
    if normalized < 0.0 {
        normalized += 360.0;
    }
    // -1e-17 % 360 + 360 rounds up to exactly 360.0
    if normalized >= 360.0 {
        normalized -= 360.0;
    }
    normalized
}

/// Format decimal degrees as `D°M'S"` with whole arcseconds.
///
/// Rounding happens on the total arcsecond count so a value such as
/// 29.99999° renders as `30°0'0"` rather than `29°59'60"`.
pub fn to_dms(degrees: f64) -> String {
    let sign = if degrees < 0.0 { "-" } else { "" };
    let total_seconds = (degrees.abs() * 3600.0).round() as u64;
    let d = total_seconds / 3600;
    let m = (total_seconds % 3600) / 60;
    let s = total_seconds % 60;
    format!("{sign}{d}°{m}'{s}\"")
}

/// Parse a `D°M'S"` string produced by [`to_dms`] back into decimal degrees.
pub fn parse_dms(text: &str) -> ChartResult<f64> {
    let malformed = || ChartError::MalformedAngle(text.to_string());

    let trimmed = text.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let (deg, rest) = body.split_once('°').ok_or_else(malformed)?;
    let (min, rest) = rest.split_once('\'').ok_or_else(malformed)?;
    let sec = rest.strip_suffix('"').ok_or_else(malformed)?;

    let deg: f64 = deg.trim().parse().map_err(|_| malformed())?;
    let min: f64 = min.trim().parse().map_err(|_| malformed())?;
    let sec: f64 = sec.trim().parse().map_err(|_| malformed())?;

    if !(0.0..60.0).contains(&min) || !(0.0..60.0).contains(&sec) || deg < 0.0 {
        return Err(malformed());
    }

    let value = deg + min / 60.0 + sec / 3600.0;
    Ok(if negative { -value } else { value })
}
