//! Numerical algorithms shared across the simulator crates

pub mod integrate;

pub use integrate::trap_integrate;
