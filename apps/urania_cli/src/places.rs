use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use urania::geocoding::StaticGeocoder;

#[derive(Debug, Deserialize)]
struct PlaceEntry {
    name: String,
    lat: f64,
    lon: f64,
}

/// Build a geocoder from a JSON list of named coordinates.
pub fn load_gazetteer(path: &Path) -> anyhow::Result<StaticGeocoder> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read gazetteer {}", path.display()))?;
    parse_gazetteer(&text).with_context(|| format!("Failed to parse gazetteer {}", path.display()))
}

fn parse_gazetteer(text: &str) -> anyhow::Result<StaticGeocoder> {
    let entries: Vec<PlaceEntry> = serde_json::from_str(text)?;
    Ok(entries
        .into_iter()
        .fold(StaticGeocoder::new(), |geo, entry| geo.with_place(&entry.name, entry.lat, entry.lon)))
}
