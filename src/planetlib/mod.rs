//! Planetary position calculations module
//!
//! Positions come from fixed J2000 mean orbital elements propagated with a
//! two-body Kepler solution:
//!
//! - `elements`: the immutable element table and lookups by name
//! - `kepler`: mean anomaly -> eccentric/true anomaly and solar distance
//! - `heliocentric`: ecliptic longitude/latitude/distance and Cartesian X/Y/Z
//! - `geocentric`: right ascension, declination and Earth distance
//! - `magnitude`: approximate apparent visual magnitude
//! - `ephemeris`: the calculator that ties the pipeline together

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub mod elements;
pub mod ephemeris;
pub mod geocentric;
pub mod heliocentric;
pub mod kepler;
pub mod magnitude;

pub use elements::{elements_for, MagnitudeModel, PlanetOrbitalElements};
pub use ephemeris::{ComputedPosition, Ephemeris};
pub use geocentric::{geocentric_position, to_geocentric, GeocentricPosition};
pub use heliocentric::{heliocentric_position, HeliocentricPosition};
pub use kepler::KeplerSolution;
pub use magnitude::{visual_magnitude, visual_magnitude_at_phase, visual_magnitude_for};

/// Error type for planetary calculations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlanetError {
    #[error("Unknown planet: {0}")]
    UnknownPlanet(String),

    #[error("{quantity} is not applicable to {planet}")]
    NotApplicable {
        /// The planet the query was made for
        planet: Planet,
        /// The quantity that cannot be computed
        quantity: &'static str,
    },
}

/// The eight major planets, in order of distance from the Sun
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Planet {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Planet {
    /// Every supported planet, Mercury to Neptune
    pub const ALL: [Planet; 8] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Earth,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
    ];

    /// Get the planet's name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Earth => "Earth",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
        }
    }

    /// Orbital elements of this planet
    pub fn elements(&self) -> &'static PlanetOrbitalElements {
        elements::elements_of(*self)
    }

    /// Whether this is the observer's own planet
    pub fn is_earth(&self) -> bool {
        matches!(self, Planet::Earth)
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Planet {
    type Err = PlanetError;

    /// Case-insensitive parse of a planet name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        elements_for(s).map(|elements| elements.planet)
    }
}

/// Supported planets in canonical order, Mercury to Neptune
pub fn list_supported_planets() -> [Planet; 8] {
    Planet::ALL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_planets_order() {
        let names: Vec<&str> = list_supported_planets().iter().map(|p| p.name()).collect();
        assert_eq!(
            names,
            vec!["Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune"]
        );
    }

    #[test]
    fn test_parse_planet() {
        assert_eq!("Mars".parse::<Planet>(), Ok(Planet::Mars));
        assert_eq!("  jupiter ".parse::<Planet>(), Ok(Planet::Jupiter));
        assert_eq!("NEPTUNE".parse::<Planet>(), Ok(Planet::Neptune));
    }

    #[test]
    fn test_parse_unknown_planet() {
        assert_eq!(
            "Pluto".parse::<Planet>(),
            Err(PlanetError::UnknownPlanet("Pluto".to_string()))
        );
        assert!("".parse::<Planet>().is_err());
        assert!("Sun".parse::<Planet>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for planet in Planet::ALL {
            assert_eq!(planet.to_string().parse::<Planet>(), Ok(planet));
        }
    }

    #[test]
    fn test_not_applicable_message() {
        let err = PlanetError::NotApplicable {
            planet: Planet::Earth,
            quantity: "geocentric position",
        };
        assert_eq!(err.to_string(), "geocentric position is not applicable to Earth");
    }
}
