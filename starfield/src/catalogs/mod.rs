//! Star catalogs module
//!
//! This module provides the star record type and the interface the simulator
//! uses to pull targets out of any catalog source.

mod star;

pub use star::{Star, StarError, REQUIRED_PROPERTIES};

/// Source of observation targets.
///
/// Implementors supply indexed access and iteration. Lookups by name or
/// property are built on [`StarCatalog::stars`].
pub trait StarCatalog {
    /// Star at `index` in catalog order
    fn get_star(&self, index: usize) -> Option<&Star>;

    fn stars(&self) -> impl Iterator<Item = &Star>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First star whose name matches exactly
    fn get_by_name(&self, name: &str) -> Option<&Star> {
        self.stars().find(|s| s.name == name)
    }

    /// Names of every star, in catalog order
    fn names(&self) -> Vec<&str> {
        self.stars().map(|s| s.name.as_str()).collect()
    }

    /// Stars whose effective temperature lies in `[min_k, max_k)`
    fn in_teff_range(&self, min_k: f64, max_k: f64) -> Vec<&Star> {
        self.stars()
            .filter(|s| s.teff >= min_k && s.teff < max_k)
            .collect()
    }

    /// Stars closer than `max_pc` parsecs
    fn within_distance(&self, max_pc: f64) -> Vec<&Star> {
        self.stars().filter(|s| s.distance < max_pc).collect()
    }
}

/// In-memory list of stars, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct StarList {
    stars: Vec<Star>,
}

impl StarList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a star to the end of the list
    pub fn push(&mut self, star: Star) {
        self.stars.push(star);
    }
}

impl From<Vec<Star>> for StarList {
    fn from(stars: Vec<Star>) -> Self {
        Self { stars }
    }
}

impl FromIterator<Star> for StarList {
    fn from_iter<I: IntoIterator<Item = Star>>(iter: I) -> Self {
        Self {
            stars: iter.into_iter().collect(),
        }
    }
}

impl StarCatalog for StarList {
    fn get_star(&self, index: usize) -> Option<&Star> {
        self.stars.get(index)
    }

    fn stars(&self) -> impl Iterator<Item = &Star> {
        self.stars.iter()
    }

    fn len(&self) -> usize {
        self.stars.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orion_belt_and_friends() -> StarList {
        vec![
            Star::new("Mintaka", "05:32:00.4009", "-00:17:56.7424", 380.0, 16.5, 24.0, 29500.0),
            Star::new("Aldebaran", "04:35:55.23907", "16:30:33.4885", 20.0, 45.1, 1.16, 3900.0),
            Star::new("Rigel", "05:14:32.27210", "-08:12:05.8981", 264.0, 78.9, 21.0, 12100.0),
        ]
        .into()
    }

    #[test]
    fn test_empty_list() {
        let list = StarList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.get_star(0).is_none());
    }

    #[test]
    fn test_lookup_by_index_and_name() {
        let list = orion_belt_and_friends();
        assert_eq!(list.len(), 3);
        assert_eq!(list.get_star(1).unwrap().name, "Aldebaran");
        assert_eq!(list.get_by_name("Rigel").unwrap().teff, 12100.0);
        assert!(list.get_by_name("Betelgeuse").is_none());
        assert_eq!(list.names(), vec!["Mintaka", "Aldebaran", "Rigel"]);
    }

    #[test]
    fn test_hot_stars_by_teff() {
        let list = orion_belt_and_friends();
        let hot = list.in_teff_range(10_000.0, f64::INFINITY);
        let names: Vec<_> = hot.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Mintaka", "Rigel"]);

        // Upper bound is exclusive
        assert!(list.in_teff_range(3000.0, 3900.0).is_empty());
    }

    #[test]
    fn test_within_distance() {
        let list = orion_belt_and_friends();
        let near = list.within_distance(300.0);
        let names: Vec<_> = near.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Aldebaran", "Rigel"]);
    }

    #[test]
    fn test_collect_and_push() {
        let mut list: StarList = orion_belt_and_friends().stars().cloned().collect();
        list.push(Star::new("Algol", "03:08:10.13245", "40:57:20.3280", 28.0, 2.73, 3.17, 13000.0));
        assert_eq!(list.len(), 4);
        assert_eq!(list.stars().last().unwrap().name, "Algol");
    }
}
