mod places;

use anyhow::Context;
use chrono::{NaiveDate, TimeZone, Utc};
use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;
use urania::chart::{compute, compute_multi_system, ChartRequest, ReferenceFrame};
use urania::{AyanamsaStandard, BirthInstant, Geocoder, HouseSystem, SwissEphemerisAdapter};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum FrameChoice {
    /// Sidereal chart only.
    Vedic,
    /// Tropical chart only.
    Western,
    /// Both frames sharing one Julian Day.
    Both,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Compute a birth chart and print it as JSON")]
struct Args {
    /// Birth date, YYYY-MM-DD.
    #[arg(long)]
    date: String,

    /// Local birth time, HH:MM or HH:MM:SS.
    #[arg(long)]
    time: String,

    /// UTC offset of the local time in hours (e.g. 5.5, -8).
    #[arg(long, allow_hyphen_values = true)]
    tz: f64,

    #[arg(long, allow_hyphen_values = true, requires = "lon")]
    lat: Option<f64>,

    #[arg(long, allow_hyphen_values = true, requires = "lat")]
    lon: Option<f64>,

    /// Birth place, resolved through the --places gazetteer.
    #[arg(long, conflicts_with_all = ["lat", "lon"], requires = "places")]
    place: Option<String>,

    /// JSON gazetteer: [{"name": ..., "lat": ..., "lon": ...}, ...]
    #[arg(long)]
    places: Option<PathBuf>,

    /// Ayanamsa standard (defaults to the config value).
    #[arg(long)]
    ayanamsa: Option<AyanamsaStandard>,

    #[arg(long)]
    house_system: Option<HouseSystem>,

    /// Reference frame(s); defaults to the configured frames.
    #[arg(long, value_enum)]
    frame: Option<FrameChoice>,

    /// Date the current Dasha is resolved against (YYYY-MM-DD, defaults to now).
    #[arg(long)]
    reference_date: Option<String>,

    /// Path to urania.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write JSON here instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let settings = urania_config::load_chart_settings(args.config.as_deref())?;

    let (lat, lon) = match (&args.place, args.lat, args.lon) {
        (Some(place), _, _) => {
            let path = args.places.as_deref().context("--place needs --places")?;
            let gazetteer = places::load_gazetteer(path)?;
            let location = gazetteer
                .resolve(place)
                .with_context(|| format!("Could not resolve birth place '{place}'"))?;
            log::info!("Resolved '{}' to {:.4}, {:.4}", place, location.lat, location.lon);
            (location.lat, location.lon)
        }
        (None, Some(lat), Some(lon)) => (lat, lon),
        _ => anyhow::bail!("Provide either --lat/--lon or --place"),
    };

    let birth = BirthInstant::parse(&args.date, &args.time, args.tz, lat, lon)
        .context("Invalid birth data")?;

    let mut request = ChartRequest::new(birth)
        .with_ayanamsa(args.ayanamsa.unwrap_or(settings.ayanamsa))
        .with_house_system(args.house_system.unwrap_or(settings.house_system));
    if let Some(text) = &args.reference_date {
        let date = NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .with_context(|| format!("Invalid --reference-date '{text}'"))?;
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .context("Invalid --reference-date")?;
        request = request.with_reference_instant(Utc.from_utc_datetime(&midnight));
    }

    let frame = args.frame.unwrap_or(match settings.frames.as_slice() {
        [ReferenceFrame::Vedic] => FrameChoice::Vedic,
        [ReferenceFrame::Western] => FrameChoice::Western,
        _ => FrameChoice::Both,
    });

    let ephemeris_path = settings.resolved_ephemeris_path();
    let adapter = SwissEphemerisAdapter::new(Some(ephemeris_path.clone()))
        .with_context(|| format!("Could not open Swiss Ephemeris data at {}", ephemeris_path.display()))?;

    let json = match frame {
        FrameChoice::Both => compute_multi_system(&adapter, &request)?.to_json()?,
        FrameChoice::Vedic => compute(&adapter, &request.with_frame(ReferenceFrame::Vedic))?.to_json()?,
        FrameChoice::Western => compute(&adapter, &request.with_frame(ReferenceFrame::Western))?.to_json()?,
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &json).with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Chart written to {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
