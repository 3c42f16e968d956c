//! Aggregate statistics over one snapshot of planet positions

use crate::planetlib::{ComputedPosition, Planet};
use serde::Serialize;

/// A planet paired with a value, e.g. the brightest planet and its magnitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetValue {
    pub planet: Planet,
    pub value: f64,
}

/// Summary statistics of a set of computed positions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Number of planets in the snapshot
    pub planets_calculated: usize,
    /// Julian date the snapshot was computed for
    pub julian_date: f64,
    /// Mean Earth distance over planets with a geocentric position
    pub average_geocentric_distance: Option<f64>,
    /// Mean Sun distance
    pub average_heliocentric_distance: f64,
    /// Lowest magnitude among planets visible from Earth
    pub brightest: Option<PlanetValue>,
    /// Largest minus smallest heliocentric longitude, degrees
    pub heliocentric_longitude_range: f64,
    /// Largest absolute heliocentric latitude, degrees
    pub max_heliocentric_latitude: f64,
    /// Planet with the largest Sun distance
    pub farthest_from_sun: PlanetValue,
}

impl Summary {
    /// Summarise positions computed for a single instant
    ///
    /// Returns `None` for an empty slice.
    pub fn from_positions(positions: &[ComputedPosition]) -> Option<Summary> {
        let first = positions.first()?;
        let count = positions.len() as f64;

        let geo_distances: Vec<f64> = positions
            .iter()
            .filter_map(|pos| pos.geocentric.map(|geo| geo.distance))
            .collect();
        let average_geocentric_distance = if geo_distances.is_empty() {
            None
        } else {
            Some(geo_distances.iter().sum::<f64>() / geo_distances.len() as f64)
        };

        let average_heliocentric_distance =
            positions.iter().map(|pos| pos.heliocentric.distance).sum::<f64>() / count;

        let brightest = positions
            .iter()
            .filter_map(|pos| pos.magnitude.map(|value| PlanetValue { planet: pos.planet, value }))
            .min_by(|a, b| a.value.total_cmp(&b.value));

        let longitudes = positions.iter().map(|pos| pos.heliocentric.longitude);
        let max_longitude = longitudes.clone().fold(f64::NEG_INFINITY, f64::max);
        let min_longitude = longitudes.fold(f64::INFINITY, f64::min);

        let max_heliocentric_latitude = positions
            .iter()
            .map(|pos| pos.heliocentric.latitude.abs())
            .fold(0.0, f64::max);

        let farthest_from_sun = positions
            .iter()
            .map(|pos| PlanetValue {
                planet: pos.planet,
                value: pos.heliocentric.distance,
            })
            .max_by(|a, b| a.value.total_cmp(&b.value))
            .unwrap_or(PlanetValue {
                planet: first.planet,
                value: first.heliocentric.distance,
            });

        Some(Summary {
            planets_calculated: positions.len(),
            julian_date: first.jd,
            average_geocentric_distance,
            average_heliocentric_distance,
            brightest,
            heliocentric_longitude_range: max_longitude - min_longitude,
            max_heliocentric_latitude,
            farthest_from_sun,
        })
    }
}
