//! Planck blackbody radiation model.
//!
//! All quantities are SI: wavelengths in meters, spectral radiance in
//! W m⁻² m⁻¹ sr⁻¹ and surface flux density in W m⁻² m⁻¹.
//!
//! # Physics
//!
//! - **Spectral radiance**: B_λ = (2hc²/λ⁵) · 1/(exp(hc/λkT) − 1)
//! - **Surface flux**: F_λ = π·B_λ, the outward hemisphere of an isotropic
//!   emitter (Maoz, *Astrophysics in a Nutshell*, eq. 2.5)
//! - **Wien peak**: λ_max = b/T
//!
//! Inputs are not range checked. A zero temperature or wavelength produces
//! NaN or infinity rather than an error.

use std::f64::consts::PI;
use std::fmt;

use ndarray::Array1;
use shared::algo::trap_integrate;
use shared::constants::{NM_PER_M, SI};
use thiserror::Error;

/// Lower edge of the default wavelength grid in nanometers
pub const DEFAULT_LAMBDA_MIN_NM: f64 = 100.0;

/// Upper edge of the default wavelength grid in nanometers
pub const DEFAULT_LAMBDA_MAX_NM: f64 = 1000.0;

/// Number of samples in the default wavelength grid
pub const DEFAULT_NLAM: usize = 100;

/// Errors that can occur when evaluating a blackbody spectrum
#[derive(Debug, Error, PartialEq)]
pub enum BlackBodyError {
    #[error("Missing wavelength array")]
    MissingWavelengthGrid,

    #[error("Wavelength array has {got} samples but the integration grid has {expected}")]
    GridLengthMismatch { expected: usize, got: usize },
}

/// The default wavelength grid, 100 to 1000 nm inclusive, in meters.
pub fn default_wavelength_grid() -> Array1<f64> {
    Array1::linspace(DEFAULT_LAMBDA_MIN_NM, DEFAULT_LAMBDA_MAX_NM, DEFAULT_NLAM) / NM_PER_M
}

/// An ideal blackbody at a fixed temperature.
///
/// Optionally carries a wavelength grid that array methods fall back to when
/// called without one, and that [`BlackBody::integrate_spectrum`] always uses
/// as its integration abscissae.
#[derive(Debug, Clone)]
pub struct BlackBody {
    name: Option<String>,
    temp: f64,
    lmbda: Option<Array1<f64>>,
}

impl BlackBody {
    /// Create an unnamed blackbody with the default wavelength grid.
    ///
    /// # Arguments
    /// * `temp` - Temperature in Kelvin
    pub fn new(temp: f64) -> Self {
        Self {
            name: None,
            temp,
            lmbda: Some(default_wavelength_grid()),
        }
    }

    /// Attach a name used when displaying the model
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replace the stored wavelength grid (meters)
    pub fn with_wavelengths(mut self, lmbda: Array1<f64>) -> Self {
        self.lmbda = Some(lmbda);
        self
    }

    /// Drop the stored wavelength grid so every call must supply one
    pub fn without_grid(mut self) -> Self {
        self.lmbda = None;
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Temperature in Kelvin
    pub fn temp(&self) -> f64 {
        self.temp
    }

    /// Stored wavelength grid in meters, if any
    pub fn wavelengths(&self) -> Option<&Array1<f64>> {
        self.lmbda.as_ref()
    }

    fn grid<'a>(&'a self, lmbda: Option<&'a Array1<f64>>) -> Result<&'a Array1<f64>, BlackBodyError> {
        lmbda
            .or(self.lmbda.as_ref())
            .ok_or(BlackBodyError::MissingWavelengthGrid)
    }

    /// Planck spectral radiance at a single wavelength.
    ///
    /// # Arguments
    /// * `wavelength_m` - Wavelength in meters
    ///
    /// # Returns
    /// B_λ in W m⁻² m⁻¹ sr⁻¹
    pub fn spectral_radiance(&self, wavelength_m: f64) -> f64 {
        let first_term = (2.0 * SI::PLANCK_CONSTANT * SI::SPEED_OF_LIGHT * SI::SPEED_OF_LIGHT)
            / wavelength_m.powi(5);

        let exponent = SI::PLANCK_CONSTANT * SI::SPEED_OF_LIGHT
            / (wavelength_m * SI::BOLTZMANN_CONSTANT * self.temp);
        let second_term = 1.0 / (exponent.exp() - 1.0);

        first_term * second_term
    }

    /// Planck spectral radiance over a wavelength grid.
    ///
    /// Uses `lmbda` when given, otherwise the stored grid.
    ///
    /// # Returns
    /// B_λ in W m⁻² m⁻¹ sr⁻¹ for each wavelength
    pub fn intensity(&self, lmbda: Option<&Array1<f64>>) -> Result<Array1<f64>, BlackBodyError> {
        let grid = self.grid(lmbda)?;
        Ok(grid.mapv(|l| self.spectral_radiance(l)))
    }

    /// Surface flux density over a wavelength grid.
    ///
    /// # Returns
    /// F_λ = π·B_λ in W m⁻² m⁻¹ for each wavelength
    pub fn flux(&self, lmbda: Option<&Array1<f64>>) -> Result<Array1<f64>, BlackBodyError> {
        Ok(self.intensity(lmbda)? * PI)
    }

    /// Approximate bolometric surface flux by trapezoidal integration.
    ///
    /// The flux is evaluated at `lmbda` (or the stored grid) but always
    /// integrated against the stored grid, so a supplied grid must have the
    /// same number of samples.
    ///
    /// # Returns
    /// Integrated flux in W m⁻²
    pub fn integrate_spectrum(&self, lmbda: Option<&Array1<f64>>) -> Result<f64, BlackBodyError> {
        let abscissae = self
            .lmbda
            .as_ref()
            .ok_or(BlackBodyError::MissingWavelengthGrid)?;
        let flux = self.flux(lmbda)?;

        if flux.len() != abscissae.len() {
            return Err(BlackBodyError::GridLengthMismatch {
                expected: abscissae.len(),
                got: flux.len(),
            });
        }

        Ok(trap_integrate(abscissae.view(), flux.view()))
    }

    /// Wavelength of peak emission in meters, by Wien's displacement law
    pub fn wien_peak_m(&self) -> f64 {
        SI::WIEN_DISPLACEMENT / self.temp
    }
}

impl fmt::Display for BlackBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Object type: BlackBody; name: {}",
            self.name.as_deref().unwrap_or("None")
        )
    }
}
