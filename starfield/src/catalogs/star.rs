//! Catalog entry for a single star.

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use shared::constants::IAU;
use thiserror::Error;

/// Properties every catalog record must supply, in canonical order.
pub const REQUIRED_PROPERTIES: [&str; 6] = ["ra", "dec", "distance", "radius", "mass", "teff"];

/// Errors raised while building a star from a loosely typed record
#[derive(Debug, Error)]
pub enum StarError {
    #[error("Star '{star}' is missing required property '{property}'")]
    MissingProperty { star: String, property: &'static str },

    #[error("Star '{star}' property '{property}' is not numeric: {value}")]
    NotNumeric {
        star: String,
        property: &'static str,
        value: String,
    },
}

/// A star as described by a catalog.
///
/// Positions are kept as the sexagesimal strings the catalog provides.
/// Numeric properties use catalog units: parsecs, solar radii, solar masses
/// and Kelvin. Methods convert them to SI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub name: String,
    /// Right ascension (J2000), hh:mm:ss.ssss
    pub ra: String,
    /// Declination (J2000), dd:mm:ss.ssss
    pub dec: String,
    /// Distance in parsecs
    pub distance: f64,
    /// Radius in solar radii
    pub radius: f64,
    /// Mass in solar masses
    pub mass: f64,
    /// Effective temperature in Kelvin
    pub teff: f64,
}

impl Star {
    pub fn new(
        name: impl Into<String>,
        ra: impl Into<String>,
        dec: impl Into<String>,
        distance: f64,
        radius: f64,
        mass: f64,
        teff: f64,
    ) -> Self {
        Self {
            name: name.into(),
            ra: ra.into(),
            dec: dec.into(),
            distance,
            radius,
            mass,
            teff,
        }
    }

    /// Build a star from a string-keyed record such as a parsed catalog row.
    ///
    /// Every entry of [`REQUIRED_PROPERTIES`] must be present. Numeric
    /// properties accept JSON numbers or strings that parse as `f64`.
    /// Positions accept strings or numbers. Extra keys are ignored.
    pub fn from_record(name: impl Into<String>, record: &Map<String, Value>) -> Result<Self, StarError> {
        let name = name.into();

        let lookup = |property: &'static str| {
            record.get(property).ok_or_else(|| StarError::MissingProperty {
                star: name.clone(),
                property,
            })
        };

        // Check presence of everything before coercing anything
        let values = REQUIRED_PROPERTIES
            .iter()
            .map(|&p| lookup(p))
            .collect::<Result<Vec<_>, _>>()?;

        let position = |value: &Value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };

        let numeric = |property: &'static str, value: &Value| {
            let parsed = match value {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => s.trim().parse::<f64>().ok(),
                _ => None,
            };
            parsed.ok_or_else(|| StarError::NotNumeric {
                star: name.clone(),
                property,
                value: value.to_string(),
            })
        };

        Ok(Self {
            ra: position(values[0]),
            dec: position(values[1]),
            distance: numeric("distance", values[2])?,
            radius: numeric("radius", values[3])?,
            mass: numeric("mass", values[4])?,
            teff: numeric("teff", values[5])?,
            name,
        })
    }

    /// Star radius in meters
    pub fn radius_m(&self) -> f64 {
        self.radius * IAU::SOLAR_RADIUS_M
    }

    /// Distance to the star in meters
    pub fn distance_m(&self) -> f64 {
        self.distance * IAU::PARSEC_M
    }

    /// Star mass in kilograms
    pub fn mass_kg(&self) -> f64 {
        self.mass * IAU::SOLAR_MASS_KG
    }

    /// Surface area of the star in m²
    pub fn surface_area(&self) -> f64 {
        let r = self.radius_m();
        4.0 * PI * r * r
    }

    /// Catalog properties as a string-keyed map, `name` first.
    ///
    /// Non-finite numbers become JSON `null`.
    pub fn to_dict(&self) -> Map<String, Value> {
        let mut d = Map::new();
        d.insert("name".into(), Value::from(self.name.clone()));
        d.insert("ra".into(), Value::from(self.ra.clone()));
        d.insert("dec".into(), Value::from(self.dec.clone()));
        d.insert("distance".into(), Value::from(self.distance));
        d.insert("radius".into(), Value::from(self.radius));
        d.insert("mass".into(), Value::from(self.mass));
        d.insert("teff".into(), Value::from(self.teff));
        d
    }
}

impl fmt::Display for Star {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Star object: name: {}, ra: {}, dec: {}, distance: {:?}, radius: {:?}, mass: {:?}, teff: {:?}",
            self.name, self.ra, self.dec, self.distance, self.radius, self.mass, self.teff
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde_json::json;

    fn mintaka() -> Star {
        Star::new("Mintaka", "05:32:00.4009", "-00:17:56.7424", 380.0, 16.5, 24.0, 29500.0)
    }

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(m) => m,
            _ => panic!("expected a JSON object"),
        }
    }

    #[test]
    fn test_to_dict_round_trip() {
        let star = mintaka();
        let d = star.to_dict();

        assert_eq!(d["name"], json!("Mintaka"));
        assert_eq!(d["teff"].as_f64(), Some(29500.0));
        assert_eq!(d["distance"].as_f64(), Some(380.0));
        assert_eq!(d["radius"].as_f64(), Some(16.5));
        assert_eq!(d["mass"].as_f64(), Some(24.0));

        let keys: Vec<_> = d.keys().map(String::as_str).collect();
        for key in ["name", "ra", "dec", "distance", "radius", "mass", "teff"] {
            assert!(keys.contains(&key), "missing key {key}");
        }

        let rebuilt = Star::from_record("Mintaka", &d).unwrap();
        assert_eq!(rebuilt, star);
    }

    #[test]
    fn test_from_record_coerces_numeric_strings() {
        let record = as_map(json!({
            "ra": "04:35:55.23907",
            "dec": "16:30:33.4885",
            "distance": "20",
            "radius": 45.1,
            "mass": " 1.16 ",
            "teff": 3900,
        }));
        let star = Star::from_record("Aldebaran", &record).unwrap();
        assert_eq!(star.distance, 20.0);
        assert_eq!(star.mass, 1.16);
        assert_eq!(star.teff, 3900.0);
    }

    #[test]
    fn test_from_record_missing_property() {
        let record = as_map(json!({
            "ra": "05:14:32.27210",
            "dec": "-08:12:05.8981",
            "distance": 264,
            "radius": 78.9,
            "mass": 21.0,
        }));
        let err = Star::from_record("Rigel", &record).unwrap_err();
        assert!(matches!(
            err,
            StarError::MissingProperty { property: "teff", .. }
        ));
        assert!(err.to_string().contains("teff"));
    }

    #[test]
    fn test_from_record_not_numeric() {
        let record = as_map(json!({
            "ra": "03:08:10.13245",
            "dec": "40:57:20.3280",
            "distance": "far away",
            "radius": 2.73,
            "mass": 3.17,
            "teff": 13000,
        }));
        let err = Star::from_record("Algol", &record).unwrap_err();
        assert!(matches!(
            err,
            StarError::NotNumeric { property: "distance", .. }
        ));
    }

    #[test]
    fn test_from_record_rejects_booleans() {
        let record = as_map(json!({
            "ra": "0:42:44",
            "dec": "+41:16:9",
            "distance": 7e5,
            "radius": 1.0,
            "mass": true,
            "teff": 5780,
        }));
        assert!(Star::from_record("G2", &record).is_err());
    }

    #[test]
    fn test_missing_field_fails_deserialize() {
        let result: Result<Star, _> = serde_json::from_value(json!({
            "name": "Mintaka",
            "ra": "05:32:00.4009",
            "dec": "-00:17:56.7424",
            "distance": 380.0,
            "radius": 16.5,
            "mass": 24.0,
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_unit_conversions() {
        let sun_at_1pc = Star::new("Sun", "0:0:0", "0:0:0", 1.0, 1.0, 1.0, 5780.0);
        assert_eq!(sun_at_1pc.radius_m(), IAU::SOLAR_RADIUS_M);
        assert_eq!(sun_at_1pc.distance_m(), IAU::PARSEC_M);
        assert_eq!(sun_at_1pc.mass_kg(), IAU::SOLAR_MASS_KG);

        let star = mintaka();
        assert_relative_eq!(star.radius_m(), 16.5 * 6.957e8, max_relative = 1e-12);
        assert_relative_eq!(star.mass_kg(), 24.0 * 1.98841e30, max_relative = 1e-12);
    }

    #[test]
    fn test_surface_area_scales_with_radius_squared() {
        let small = Star::new("a", "", "", 10.0, 1.0, 1.0, 5000.0);
        let big = Star::new("b", "", "", 10.0, 3.0, 1.0, 5000.0);
        assert_relative_eq!(big.surface_area() / small.surface_area(), 9.0, max_relative = 1e-12);
        assert_relative_eq!(
            small.surface_area(),
            4.0 * PI * 6.957e8 * 6.957e8,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_display_lists_properties() {
        let text = mintaka().to_string();
        assert!(text.starts_with("Star object: name: Mintaka"));
        assert!(text.contains("distance: 380.0"));
        assert!(text.contains("teff: 29500.0"));
    }
}
