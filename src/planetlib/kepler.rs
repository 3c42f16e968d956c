//! Kepler equation solver for elliptical orbits
//!
//! Converts a mean anomaly into the eccentric anomaly `E` by solving
//! `M = E - e sin E` with Newton-Raphson, then derives the true anomaly and
//! the distance from the focus.

use crate::constants::{DEG2RAD, KEPLER_MAX_ITERATIONS, KEPLER_TOLERANCE, RAD2DEG};
use crate::coordinates::angle::{normalize_degrees, normalize_radians};
use log::debug;
use serde::Serialize;

/// Result of solving Kepler's equation for one mean anomaly
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KeplerSolution {
    /// Mean anomaly in degrees, normalized to [0, 360)
    pub mean_anomaly: f64,
    /// Eccentric anomaly in radians
    pub eccentric_anomaly: f64,
    /// True anomaly in radians, in (-π, π]
    pub true_anomaly: f64,
    /// Distance from the focus, in the unit of the semi-major axis
    pub radius: f64,
    /// Newton iterations performed
    pub iterations: usize,
    /// Whether the step size dropped below tolerance before the iteration cap
    pub converged: bool,
}

/// Solve the two-body orbit position for a mean anomaly
///
/// # Arguments
///
/// * `mean_anomaly_deg` - Mean anomaly in degrees, any real value
/// * `eccentricity` - Orbital eccentricity, 0 <= e < 1
/// * `semi_major_axis` - Semi-major axis (AU for planets)
///
/// # Returns
///
/// A [`KeplerSolution`]. If the iteration cap is reached the best estimate
/// is returned with `converged == false`; this never fails.
pub fn solve(mean_anomaly_deg: f64, eccentricity: f64, semi_major_axis: f64) -> KeplerSolution {
    let mean_anomaly = normalize_degrees(mean_anomaly_deg);
    let (eccentric_anomaly, iterations, converged) =
        eccentric_anomaly(mean_anomaly * DEG2RAD, eccentricity);

    if !converged {
        debug!(
            "Kepler solver hit {} iterations without converging (M = {:.6}°, e = {})",
            iterations, mean_anomaly, eccentricity
        );
    }

    KeplerSolution {
        mean_anomaly,
        eccentric_anomaly,
        true_anomaly: true_anomaly(eccentric_anomaly, eccentricity),
        radius: radius(eccentric_anomaly, eccentricity, semi_major_axis),
        iterations,
        converged,
    }
}

/// Newton-Raphson on `f(E) = E - e sin E - M`, seeded with `E0 = M`
///
/// Returns `(E, iterations, converged)`, with `E` in radians.
pub fn eccentric_anomaly(mean_anomaly_rad: f64, eccentricity: f64) -> (f64, usize, bool) {
    let m = normalize_radians(mean_anomaly_rad);
    let mut e_anomaly = m;

    for iteration in 1..=KEPLER_MAX_ITERATIONS {
        let f = e_anomaly - eccentricity * e_anomaly.sin() - m;
        let f_prime = 1.0 - eccentricity * e_anomaly.cos();

        let delta = f / f_prime;
        e_anomaly -= delta;

        if delta.abs() < KEPLER_TOLERANCE {
            return (e_anomaly, iteration, true);
        }
    }

    (e_anomaly, KEPLER_MAX_ITERATIONS, false)
}

/// True anomaly in radians from the eccentric anomaly
///
/// `ν = 2 atan2(√(1+e) sin(E/2), √(1-e) cos(E/2))`
pub fn true_anomaly(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    let half = eccentric_anomaly / 2.0;
    let y = (1.0 + eccentricity).sqrt() * half.sin();
    let x = (1.0 - eccentricity).sqrt() * half.cos();
    2.0 * y.atan2(x)
}

/// Distance from the focus, `r = a (1 - e cos E)`
pub fn radius(eccentric_anomaly: f64, eccentricity: f64, semi_major_axis: f64) -> f64 {
    semi_major_axis * (1.0 - eccentricity * eccentric_anomaly.cos())
}

impl KeplerSolution {
    /// True anomaly in degrees, normalized to [0, 360)
    pub fn true_anomaly_degrees(&self) -> f64 {
        normalize_degrees(self.true_anomaly * RAD2DEG)
    }
}
