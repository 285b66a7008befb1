use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use urania::{AyanamsaStandard, HouseSystem, ReferenceFrame};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "URANIA_CONFIG";
/// Environment variable naming the Swiss Ephemeris data directory.
pub const EPHEMERIS_PATH_ENV: &str = "SWISS_EPHEMERIS_PATH";
pub const DEFAULT_EPHEMERIS_PATH: &str = "/usr/local/share/swisseph";

const PROBE_PATHS: [&str; 2] = ["configs/urania.toml", "../../configs/urania.toml"];

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSettings {
    pub ayanamsa: AyanamsaStandard,
    pub house_system: HouseSystem,
    pub frames: Vec<ReferenceFrame>,
    pub ephemeris_path: Option<PathBuf>,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            ayanamsa: AyanamsaStandard::Raman,
            house_system: HouseSystem::Placidus,
            frames: ReferenceFrame::all().to_vec(),
            ephemeris_path: None,
        }
    }
}

impl ChartSettings {
    /// Configured data directory, else `SWISS_EPHEMERIS_PATH`, else the system default.
    pub fn resolved_ephemeris_path(&self) -> PathBuf {
        self.ephemeris_path
            .clone()
            .or_else(|| env::var(EPHEMERIS_PATH_ENV).ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EPHEMERIS_PATH))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ChartToml {
    #[serde(default)]
    ayanamsa: Option<String>,
    #[serde(default)]
    house_system: Option<String>,
    #[serde(default)]
    frames: Option<Vec<String>>,
    #[serde(default)]
    ephemeris_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    chart: Option<ChartToml>,
}

/// Locate and read the config file.
///
/// An explicit path (argument, then `URANIA_CONFIG`) must exist. Otherwise the
/// common relative locations of `configs/urania.toml` are tried and `None` is
/// returned when none is present.
pub fn read_config_text(explicit: Option<&Path>) -> anyhow::Result<Option<(PathBuf, String)>> {
    let explicit = explicit
        .map(Path::to_path_buf)
        .or_else(|| env::var(CONFIG_ENV).ok().map(PathBuf::from));

    if let Some(path) = explicit {
        let text = fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Could not read config {}: {e}", path.display()))?;
        return Ok(Some((path, text)));
    }

    for p in &PROBE_PATHS {
        if let Ok(text) = fs::read_to_string(p) {
            return Ok(Some((PathBuf::from(p), text)));
        }
    }
    Ok(None)
}

/// Parse the `[chart]` table of a config document.
pub fn parse_chart_settings(text: &str) -> anyhow::Result<ChartSettings> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse urania.toml: {e}"))?;
    let ChartToml {
        ayanamsa,
        house_system,
        frames,
        ephemeris_path,
    } = root.chart.unwrap_or_default();

    let mut settings = ChartSettings::default();

    if let Some(name) = ayanamsa {
        settings.ayanamsa = name
            .parse()
            .map_err(|e| anyhow::anyhow!("chart.ayanamsa: {e}"))?;
    }
    if let Some(name) = house_system {
        settings.house_system = name
            .parse()
            .map_err(|e| anyhow::anyhow!("chart.house_system: {e}"))?;
    }
    if let Some(names) = frames {
        let mut parsed = Vec::with_capacity(names.len());
        for name in &names {
            let frame: ReferenceFrame = name
                .parse()
                .map_err(|e| anyhow::anyhow!("chart.frames: {e}"))?;
            if !parsed.contains(&frame) {
                parsed.push(frame);
            }
        }
        if parsed.is_empty() {
            anyhow::bail!("chart.frames must name at least one of {:?}", ["vedic", "western"]);
        }
        settings.frames = parsed;
    }
    settings.ephemeris_path = ephemeris_path;

    Ok(settings)
}

/// Load chart settings, falling back to built-in defaults when no file exists.
pub fn load_chart_settings(explicit: Option<&Path>) -> anyhow::Result<ChartSettings> {
    match read_config_text(explicit)? {
        Some((path, text)) => {
            log::debug!("Loading chart settings from {}", path.display());
            parse_chart_settings(&text)
        }
        None => {
            log::warn!(
                "No urania.toml found in {:?}; using default chart settings",
                PROBE_PATHS
            );
            Ok(ChartSettings::default())
        }
    }
}
