//! Star catalog records for observation simulation.
//!
//! A [`Star`](catalogs::Star) carries the catalog properties of a single
//! target (position, distance, radius, mass and effective temperature) and
//! converts them to SI quantities. Spectral behaviour lives in the
//! `simulator` crate.

pub mod catalogs;

pub use catalogs::{Star, StarCatalog, StarError, StarList};
