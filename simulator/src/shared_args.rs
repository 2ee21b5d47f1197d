use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, ValueEnum};
use starfield::Star;

use crate::hardware::instrument::{models, InstrumentConfig};

/// Parse an exposure time in seconds
fn parse_exposure(s: &str) -> Result<Duration, String> {
    let seconds = s
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("Invalid exposure time '{s}'"))?;
    Duration::try_from_secs_f64(seconds)
        .map_err(|_| "Exposure time must be a finite, non-negative number of seconds".to_string())
}

/// Built-in instrument presets
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum InstrumentModel {
    /// Hubble-like 2.4m, 300-2100 nm
    Hubble,
    /// Unnamed 1m, 100-1000 nm
    Default,
}

impl std::fmt::Display for InstrumentModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InstrumentModel::Hubble => write!(f, "hubble"),
            InstrumentModel::Default => write!(f, "default"),
        }
    }
}

impl InstrumentModel {
    pub fn to_config(&self) -> InstrumentConfig {
        match self {
            InstrumentModel::Hubble => models::HUBBLE.clone(),
            InstrumentModel::Default => InstrumentConfig::default(),
        }
    }
}

/// Instrument selection shared by simulation binaries
#[derive(Args, Debug, Clone)]
pub struct InstrumentArgs {
    /// Instrument preset
    #[arg(long, default_value_t = InstrumentModel::Hubble)]
    pub instrument: InstrumentModel,

    /// JSON instrument configuration, overrides --instrument
    #[arg(long)]
    pub instrument_config: Option<PathBuf>,
}

impl InstrumentArgs {
    /// Resolve the configuration, reading the JSON file when given
    pub fn load_config(&self) -> Result<InstrumentConfig, std::io::Error> {
        match &self.instrument_config {
            Some(path) => InstrumentConfig::load_from_file(Path::new(path)),
            None => Ok(self.instrument.to_config()),
        }
    }
}

/// Target star description. Defaults describe Mintaka (δ Ori).
#[derive(Args, Debug, Clone)]
pub struct StarArgs {
    /// Star name
    #[arg(long, default_value = "Mintaka")]
    pub name: String,

    /// Right ascension, hh:mm:ss.ssss
    #[arg(long, default_value = "05:32:00.4009", allow_hyphen_values = true)]
    pub ra: String,

    /// Declination, dd:mm:ss.ssss
    #[arg(long, default_value = "-00:17:56.7424", allow_hyphen_values = true)]
    pub dec: String,

    /// Distance in parsecs
    #[arg(long, default_value_t = 380.0)]
    pub distance: f64,

    /// Radius in solar radii
    #[arg(long, default_value_t = 16.5)]
    pub radius: f64,

    /// Mass in solar masses
    #[arg(long, default_value_t = 24.0)]
    pub mass: f64,

    /// Effective temperature in Kelvin
    #[arg(long, default_value_t = 29500.0)]
    pub teff: f64,
}

impl StarArgs {
    pub fn to_star(&self) -> Star {
        Star::new(
            self.name.clone(),
            self.ra.clone(),
            self.dec.clone(),
            self.distance,
            self.radius,
            self.mass,
            self.teff,
        )
    }
}

/// Common arguments shared across simulation binaries
#[derive(Args, Debug, Clone)]
pub struct SharedSimulationArgs {
    /// Exposure time in seconds
    #[arg(long, default_value = "10000", value_parser = parse_exposure)]
    pub obstime: Duration,

    /// Observation type, photon_counts or flux
    // Plain string: ObsType::from_str reports unknown values as InvalidObsType
    #[arg(long, default_value = "photon_counts")]
    pub obstype: String,

    /// Seed for the Poisson draws; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub instrument: InstrumentArgs,
}
