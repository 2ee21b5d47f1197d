//! Photometry models and utilities

pub mod blackbody;
pub mod stellar;

pub use blackbody::{default_wavelength_grid, BlackBody, BlackBodyError};
pub use stellar::StellarPhysics;
