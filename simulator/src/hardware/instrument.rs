//! Spectrograph-style instrument model for simulated stellar observations.
//!
//! An instrument splits a wavelength range into `nlam` bins, collects light
//! over a circular aperture and reports the photon count expected in each bin
//! for a given exposure, together with a Poisson realization of that count.
//!
//! # Photon count model
//!
//! For bin centers λᵢ (converted to meters) and a target flux density F(λ):
//!
//! - **Energy per bin**: Eᵢ = t · F(λᵢ) · A / nlam
//! - **Expected photons**: Nᵢ = Δλ · Eᵢ / (h·c/λᵢ)
//! - **Error**: σᵢ = √Nᵢ
//! - **Simulated**: Poisson(Nᵢ), independently per bin
//!
//! Two details of the grid and area are easy to trip over:
//!
//! - `lam` is sampled inclusively of both endpoints, while the bin width
//!   `lambin` is `(lam_max - lam_min) / nlam`. The two disagree slightly:
//!   the actual spacing of `lam` is `(lam_max - lam_min) / (nlam - 1)`.
//! - `eff_area` folds in the efficiency but the photon count uses the raw
//!   geometric `area`, so efficiency does not change simulated counts.
//!
//! # Examples
//!
//! ```rust
//! use simulator::hardware::instrument::{Instrument, InstrumentConfig, ObsType};
//! use starfield::Star;
//! use std::time::Duration;
//!
//! let config = InstrumentConfig {
//!     name: "Demo".to_string(),
//!     nlam: 10,
//!     lam_min: 300.0,
//!     lam_max: 900.0,
//!     diameter: 2.4,
//!     efficiency: 0.6,
//! };
//! let instrument = Instrument::new(config).unwrap();
//! let sun = Star::new("Sun", "0:0:0", "0:0:0", 1.0, 1.0, 1.0, 5780.0);
//!
//! let result = instrument
//!     .simulate(&sun, Duration::from_secs(100), ObsType::PhotonCounts, Some(7))
//!     .unwrap();
//! assert_eq!(result.simulated.len(), 10);
//! ```

use std::f64::consts::PI;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use ndarray::Array1;
use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use shared::constants::{photon_energy_j, NM_PER_M};
use shared::noise::{poisson_counts, NoiseError};
use starfield::Star;
use thiserror::Error;

use crate::photometry::{BlackBodyError, StellarPhysics};

/// Errors raised when building an instrument
#[derive(Debug, Error, PartialEq)]
pub enum InstrumentError {
    #[error("Instrument needs at least one wavelength bin")]
    NoBins,

    #[error("Invalid wavelength range: lam_min must be less than lam_max, got {lam_min}..{lam_max}")]
    InvalidWavelengthRange { lam_min: f64, lam_max: f64 },
}

/// Errors raised by [`Instrument::simulate`]
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Invalid obstype: {0}, must be either 'photon_counts' or 'flux'")]
    InvalidObsType(String),

    #[error("Only 'photon_counts' is implemented at this time, got '{0}'")]
    NotImplemented(ObsType),

    #[error(transparent)]
    Spectrum(#[from] BlackBodyError),

    #[error(transparent)]
    Noise(#[from] NoiseError),
}

/// Quantity an observation reports per wavelength bin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObsType {
    PhotonCounts,
    Flux,
}

impl ObsType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObsType::PhotonCounts => "photon_counts",
            ObsType::Flux => "flux",
        }
    }
}

impl FromStr for ObsType {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "photon_counts" => Ok(ObsType::PhotonCounts),
            "flux" => Ok(ObsType::Flux),
            other => Err(SimulationError::InvalidObsType(other.to_string())),
        }
    }
}

impl fmt::Display for ObsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-facing instrument parameters.
///
/// Wavelengths are in nanometers, the aperture diameter in meters and the
/// efficiency is a unitless fraction in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstrumentConfig {
    pub name: String,
    /// Number of wavelength bins
    pub nlam: usize,
    /// Lowest bin center in nanometers
    pub lam_min: f64,
    /// Highest bin center in nanometers
    pub lam_max: f64,
    /// Aperture diameter in meters
    pub diameter: f64,
    /// Total optical efficiency
    pub efficiency: f64,
}

impl Default for InstrumentConfig {
    fn default() -> Self {
        Self {
            name: "Unnamed".to_string(),
            nlam: 100,
            lam_min: 100.0,
            lam_max: 1000.0,
            diameter: 1.0,
            efficiency: 1.0,
        }
    }
}

impl InstrumentConfig {
    /// Save to a JSON file
    pub fn save_to_file(&self, path: &Path) -> Result<(), std::io::Error> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, json)
    }

    /// Load from a JSON file. Missing fields take their default values.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

/// Results of one simulated observation.
///
/// All arrays have one entry per wavelength bin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimResult {
    /// Name of the observed star
    pub target: String,
    /// Name of the observing instrument
    pub instrument: String,
    /// Exposure time in seconds
    pub obstime_s: f64,
    /// Wavelength bin centers in nanometers
    pub lmbda: Array1<f64>,
    /// Expected photon count per bin
    pub expected: Array1<f64>,
    /// One standard deviation of the count, √expected
    pub error: Array1<f64>,
    /// Poisson-drawn photon count per bin
    pub simulated: Array1<u64>,
}

impl SimResult {
    /// Number of wavelength bins
    pub fn len(&self) -> usize {
        self.lmbda.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lmbda.is_empty()
    }

    /// Per-bin tuples of (wavelength nm, expected, error, simulated)
    pub fn rows(&self) -> impl Iterator<Item = (f64, f64, f64, u64)> + '_ {
        self.lmbda
            .iter()
            .zip(self.expected.iter())
            .zip(self.error.iter())
            .zip(self.simulated.iter())
            .map(|(((&l, &e), &err), &s)| (l, e, err, s))
    }
}

/// An instrument with its derived wavelength grid and collecting area.
#[derive(Debug, Clone)]
pub struct Instrument {
    config: InstrumentConfig,
    /// Bin centers in nanometers, inclusive of both endpoints
    lam: Array1<f64>,
    /// Bin width in nanometers
    lambin: f64,
    /// Geometric collecting area in m²
    area: f64,
    /// Collecting area scaled by efficiency, in m²
    eff_area: f64,
}

impl Instrument {
    /// Build an instrument and derive its wavelength grid and areas.
    ///
    /// Fails if there are no bins or the wavelength range is empty or
    /// inverted. An efficiency outside [0, 1] is accepted with a warning.
    pub fn new(config: InstrumentConfig) -> Result<Self, InstrumentError> {
        if config.nlam == 0 {
            return Err(InstrumentError::NoBins);
        }
        // Negated so NaN bounds are rejected too
        if !(config.lam_min < config.lam_max) {
            return Err(InstrumentError::InvalidWavelengthRange {
                lam_min: config.lam_min,
                lam_max: config.lam_max,
            });
        }
        if !(0.0..=1.0).contains(&config.efficiency) {
            log::warn!(
                "Instrument '{}' efficiency {} is outside [0, 1]",
                config.name,
                config.efficiency
            );
        }

        let lam = Array1::linspace(config.lam_min, config.lam_max, config.nlam);
        let lambin = (config.lam_max - config.lam_min) / config.nlam as f64;
        let area = PI / 4.0 * config.diameter.powi(2);
        let eff_area = area * config.efficiency;

        log::debug!(
            "Instrument '{}': {} bins over {}..{} nm, bin width {} nm, area {} m²",
            config.name,
            config.nlam,
            config.lam_min,
            config.lam_max,
            lambin,
            area
        );

        Ok(Self {
            config,
            lam,
            lambin,
            area,
            eff_area,
        })
    }

    pub fn config(&self) -> &InstrumentConfig {
        &self.config
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn nlam(&self) -> usize {
        self.config.nlam
    }

    /// Wavelength bin centers in nanometers
    pub fn lam(&self) -> &Array1<f64> {
        &self.lam
    }

    /// Bin width in nanometers
    pub fn lambin(&self) -> f64 {
        self.lambin
    }

    /// Geometric collecting area in m²
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Collecting area scaled by efficiency, in m²
    pub fn eff_area(&self) -> f64 {
        self.eff_area
    }

    /// Wavelength bin centers in meters
    pub fn lam_meters(&self) -> Array1<f64> {
        &self.lam / NM_PER_M
    }

    /// Bin width in meters
    pub fn binwidth_m(&self) -> f64 {
        self.lambin / NM_PER_M
    }

    /// Expected photon count in every bin for an exposure of `obstime`.
    pub fn expected_photon_counts(
        &self,
        star: &Star,
        obstime: Duration,
    ) -> Result<Array1<f64>, SimulationError> {
        let lam_m = self.lam_meters();
        let bin_width = self.binwidth_m();
        let obstime = obstime.as_secs_f64();
        let nlam = self.config.nlam as f64;

        // W m⁻² m⁻¹ at each bin center
        let flux_spectrum = star.flux_spectrum(Some(&lam_m))?;

        let mut expected = Array1::zeros(lam_m.len());
        for ((count, &flux), &lmbda) in expected
            .iter_mut()
            .zip(flux_spectrum.iter())
            .zip(lam_m.iter())
        {
            let joules = obstime * flux * self.area / nlam;
            *count = bin_width * joules / photon_energy_j(lmbda);
        }

        Ok(expected)
    }

    /// Simulate observing `star` for `obstime` with the supplied random source.
    ///
    /// # Arguments
    /// * `star` - Target of the observation
    /// * `obstime` - Exposure time
    /// * `obstype` - Quantity to report; only [`ObsType::PhotonCounts`] is implemented
    /// * `rng` - Random source for the Poisson draws, consumed in bin order
    pub fn simulate_with_rng<R: Rng + ?Sized>(
        &self,
        star: &Star,
        obstime: Duration,
        obstype: ObsType,
        rng: &mut R,
    ) -> Result<SimResult, SimulationError> {
        if obstype != ObsType::PhotonCounts {
            return Err(SimulationError::NotImplemented(obstype));
        }

        let expected = self.expected_photon_counts(star, obstime)?;
        let error = expected.mapv(f64::sqrt);
        let simulated = poisson_counts(expected.view(), rng)?;

        log::debug!(
            "Simulated {} on {} for {:?}: {:.3e} expected photons",
            star.name,
            self.config.name,
            obstime,
            expected.sum()
        );

        Ok(SimResult {
            target: star.name.clone(),
            instrument: self.config.name.clone(),
            obstime_s: obstime.as_secs_f64(),
            lmbda: self.lam.clone(),
            expected,
            error,
            simulated,
        })
    }

    /// Simulate observing `star` for `obstime`.
    ///
    /// # Arguments
    /// * `star` - Target of the observation
    /// * `obstime` - Exposure time
    /// * `obstype` - Quantity to report; only [`ObsType::PhotonCounts`] is implemented
    /// * `rng_seed` - Optional seed for reproducible Poisson draws
    pub fn simulate(
        &self,
        star: &Star,
        obstime: Duration,
        obstype: ObsType,
        rng_seed: Option<u64>,
    ) -> Result<SimResult, SimulationError> {
        let rng_seed = rng_seed.unwrap_or(thread_rng().next_u64());
        let mut rng = StdRng::seed_from_u64(rng_seed);
        self.simulate_with_rng(star, obstime, obstype, &mut rng)
    }
}

impl TryFrom<InstrumentConfig> for Instrument {
    type Error = InstrumentError;

    fn try_from(config: InstrumentConfig) -> Result<Self, Self::Error> {
        Self::new(config)
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Instrument Object; name = {}, nlam = {}, lam_min = {:?}, lam_max = {:?}, diameter = {:?}, area = {:?}, eff_area = {:?}",
            self.config.name,
            self.config.nlam,
            self.config.lam_min,
            self.config.lam_max,
            self.config.diameter,
            self.area,
            self.eff_area
        )
    }
}

/// Standard instrument models
pub mod models {
    use super::*;

    /// Hubble-like 2.4m space telescope covering the near UV to near IR
    pub static HUBBLE: Lazy<InstrumentConfig> = Lazy::new(|| InstrumentConfig {
        name: "Hubble Space Telescope".to_string(),
        nlam: 100,
        lam_min: 300.0,
        lam_max: 2100.0,
        diameter: 2.4,
        efficiency: 0.6,
    });
}
