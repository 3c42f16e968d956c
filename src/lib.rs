//! Orrery: approximate planetary positions from mean orbital elements
//!
//! This crate computes where the eight major planets are at a given instant,
//! in heliocentric ecliptic, heliocentric Cartesian and geocentric equatorial
//! coordinates, together with an approximate apparent magnitude. Positions
//! come from fixed J2000 mean elements and a two-body Kepler solution; they
//! are good to roughly a degree between 2020 and 2030.
//!
//! ```
//! use orrery::{Ephemeris, Planet, Time};
//!
//! let t = Time::utc(2025, 1, 16, 0, 0, 0.0).unwrap();
//! let mars = Ephemeris::new().compute_position(Planet::Mars, &t);
//! let geo = mars.geocentric().unwrap();
//! assert!(geo.distance < 1.0);
//! ```

use thiserror::Error;

pub mod constants;
pub mod coordinates;
pub mod dashboard;
pub mod planetlib;
pub mod time;

// Re-export commonly used types
pub use dashboard::{CoordinateSystem, DisplayConfig, Snapshot, TimeSelection};
pub use planetlib::{list_supported_planets, ComputedPosition, Ephemeris, Planet, PlanetError};
pub use time::{Time, TimeError};

/// Main error type for the orrery library
#[derive(Debug, Error)]
pub enum OrreryError {
    #[error("Time error: {0}")]
    Time(#[from] TimeError),

    #[error("Planet error: {0}")]
    Planet(#[from] PlanetError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for orrery operations
pub type Result<T> = std::result::Result<T, OrreryError>;
