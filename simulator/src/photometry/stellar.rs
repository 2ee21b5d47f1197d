//! Stellar luminosity and flux models
//!
//! Treats a catalog [`Star`] as a spherical blackbody at its effective
//! temperature. Spectral shape comes from [`BlackBody`]; the star's surface
//! area and distance set the scale.

use std::f64::consts::PI;

use ndarray::Array1;
use shared::constants::{NM_PER_M, SI};
use starfield::Star;

use super::blackbody::{BlackBody, BlackBodyError};

/// Physical emission of a star modeled as a blackbody sphere.
///
/// Wavelength arguments are in meters. Passing `None` evaluates on the
/// default blackbody grid (100 to 1000 nm).
pub trait StellarPhysics {
    /// Blackbody at the star's effective temperature
    fn blackbody(&self) -> BlackBody;

    /// Surface flux by the Stefan-Boltzmann law, σT⁴, in W m⁻²
    fn surface_flux(&self) -> f64;

    /// Bolometric luminosity in W
    fn luminosity(&self) -> f64;

    /// Luminosity density per wavelength, in W m⁻¹
    fn luminosity_spectrum(&self, lmbda: Option<&Array1<f64>>) -> Result<Array1<f64>, BlackBodyError>;

    /// Flux density received at the star's distance, in W m⁻² m⁻¹
    fn flux_spectrum(&self, lmbda: Option<&Array1<f64>>) -> Result<Array1<f64>, BlackBodyError>;

    /// Wavelength of peak emission in nanometers
    fn wien_peak_nm(&self) -> f64;
}

impl StellarPhysics for Star {
    fn blackbody(&self) -> BlackBody {
        BlackBody::new(self.teff)
    }

    fn surface_flux(&self) -> f64 {
        SI::STEFAN_BOLTZMANN * self.teff.powi(4)
    }

    fn luminosity(&self) -> f64 {
        self.surface_flux() * self.surface_area()
    }

    fn luminosity_spectrum(&self, lmbda: Option<&Array1<f64>>) -> Result<Array1<f64>, BlackBodyError> {
        let spec = self.blackbody().flux(lmbda)?;
        Ok(spec * self.surface_area())
    }

    fn flux_spectrum(&self, lmbda: Option<&Array1<f64>>) -> Result<Array1<f64>, BlackBodyError> {
        let lum = self.luminosity_spectrum(lmbda)?;
        let dist = self.distance_m();
        Ok(lum / (4.0 * PI * dist * dist))
    }

    fn wien_peak_nm(&self) -> f64 {
        self.blackbody().wien_peak_m() * NM_PER_M
    }
}
