//! Stellar observation simulation
//!
//! This crate models stars as blackbody emitters and simulates the photon
//! counts an aperture instrument records from them, including Poisson
//! shot noise.

pub mod hardware;
pub mod photometry;
pub mod shared_args;

// Re-exports for easier access
pub use hardware::instrument::{
    models, Instrument, InstrumentConfig, InstrumentError, ObsType, SimResult, SimulationError,
};
pub use photometry::blackbody::{BlackBody, BlackBodyError};
pub use photometry::stellar::StellarPhysics;
pub use shared::algo::trap_integrate;
pub use starfield::{Star, StarCatalog, StarList};
