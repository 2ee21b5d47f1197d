//! Physical and astronomical constants in SI units.
//!
//! Fundamental constants use the exact CODATA 2018 values. Stellar and
//! distance scales use the IAU 2015 nominal values. Every component of the
//! simulator reads its constants from here rather than carrying literals.

/// Fundamental physical constants in SI units.
pub struct SI {}

impl SI {
    /// Speed of light in vacuum
    /// Units: m s⁻¹
    pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

    /// Planck's constant
    /// Units: J s
    pub const PLANCK_CONSTANT: f64 = 6.626_070_15e-34;

    /// Boltzmann's constant
    /// Units: J K⁻¹
    pub const BOLTZMANN_CONSTANT: f64 = 1.380_649e-23;

    /// Stefan-Boltzmann constant
    /// Units: W m⁻² K⁻⁴
    pub const STEFAN_BOLTZMANN: f64 = 5.670_374_419e-8;

    /// Wien displacement constant as used for peak wavelength estimates.
    /// Units: m K
    pub const WIEN_DISPLACEMENT: f64 = 0.0029;
}

/// Astronomical scale constants.
pub struct IAU {}

impl IAU {
    /// Nominal solar radius
    /// Units: m
    pub const SOLAR_RADIUS_M: f64 = 6.957e8;

    /// Solar mass
    /// Units: kg
    pub const SOLAR_MASS_KG: f64 = 1.988_41e30;

    /// One parsec
    /// Units: m
    pub const PARSEC_M: f64 = 3.085_677_581_491_367e16;
}

/// Nanometers per meter, for converting wavelength grids.
pub const NM_PER_M: f64 = 1e9;

/// Energy of a single photon at the given wavelength.
///
/// E = h·c/λ with λ in meters, result in joules.
pub fn photon_energy_j(wavelength_m: f64) -> f64 {
    SI::PLANCK_CONSTANT * SI::SPEED_OF_LIGHT / wavelength_m
}
