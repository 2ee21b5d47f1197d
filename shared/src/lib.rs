//! Shared components and utilities for the observation simulator crates.
//!
//! This crate holds the pieces that both the star catalog (`starfield`) and
//! the instrument simulation (`simulator`) depend on, so that physical
//! constants and numerical helpers are defined exactly once.

pub mod algo;
pub mod constants;
pub mod noise;

pub use algo::integrate::trap_integrate;
pub use constants::{IAU, NM_PER_M, SI};
pub use noise::{apply_poisson_noise, poisson_counts, NoiseError, MAX_POISSON_MEAN};
