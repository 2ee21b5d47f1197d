//! Hardware module for instrument configurations

pub mod instrument;

pub use instrument::{Instrument, InstrumentConfig, InstrumentError, ObsType, SimResult, SimulationError};
