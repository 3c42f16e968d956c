//! Heliocentric ecliptic positions from mean orbital elements

use super::kepler::{self, KeplerSolution};
use super::Planet;
use crate::constants::{DEG2RAD, RAD2DEG};
use crate::coordinates::angle::normalize_degrees;
use crate::coordinates::Cartesian3;
use crate::time::Time;
use serde::Serialize;

/// Position of a planet relative to the Sun, in the J2000 ecliptic frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeliocentricPosition {
    /// Ecliptic longitude in degrees, [0, 360)
    pub longitude: f64,
    /// Ecliptic latitude in degrees, [-90, 90]
    pub latitude: f64,
    /// Distance from the Sun in AU
    pub distance: f64,
    /// Cartesian position in AU (X toward the equinox, Z toward the ecliptic pole)
    pub cartesian: Cartesian3,
    /// Mean anomaly in degrees, [0, 360)
    pub mean_anomaly: f64,
    /// True anomaly in degrees, [0, 360)
    pub true_anomaly: f64,
}

/// Mean anomaly of a planet at a given time, in degrees [0, 360)
pub fn mean_anomaly_at(planet: Planet, time: &Time) -> f64 {
    let elements = planet.elements();
    let elapsed_days = time.days_since(elements.epoch);
    normalize_degrees(elements.mean_anomaly_at_epoch + elements.mean_daily_motion() * elapsed_days)
}

/// Compute the heliocentric position of a planet at a given time
///
/// The distance is taken verbatim from the Kepler solution; the Cartesian
/// vector is built from it, so its norm equals the distance up to rounding.
pub fn heliocentric_position(planet: Planet, time: &Time) -> HeliocentricPosition {
    let elements = planet.elements();
    let solution = kepler::solve(
        mean_anomaly_at(planet, time),
        elements.eccentricity,
        elements.semi_major_axis,
    );

    from_solution(planet, &solution)
}

/// Orient an in-plane Kepler solution using the planet's node, inclination
/// and argument of perihelion
pub(crate) fn from_solution(planet: Planet, solution: &KeplerSolution) -> HeliocentricPosition {
    let elements = planet.elements();
    let r = solution.radius;

    let node = elements.ascending_node * DEG2RAD;
    let inclination = elements.inclination * DEG2RAD;
    // Argument of latitude
    let u = solution.true_anomaly + elements.argument_of_perihelion * DEG2RAD;

    let (sin_node, cos_node) = node.sin_cos();
    let (sin_u, cos_u) = u.sin_cos();
    let (sin_i, cos_i) = inclination.sin_cos();

    let cartesian = Cartesian3::new(
        r * (cos_node * cos_u - sin_node * sin_u * cos_i),
        r * (sin_node * cos_u + cos_node * sin_u * cos_i),
        r * sin_u * sin_i,
    );

    let longitude = normalize_degrees(cartesian.y.atan2(cartesian.x) * RAD2DEG);
    let latitude = (cartesian.z / r).clamp(-1.0, 1.0).asin() * RAD2DEG;

    HeliocentricPosition {
        longitude,
        latitude,
        distance: r,
        cartesian,
        mean_anomaly: solution.mean_anomaly,
        true_anomaly: solution.true_anomaly_degrees(),
    }
}
