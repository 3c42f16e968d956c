//! # Cartesian Coordinate System Module
//!
//! Three-dimensional Cartesian vectors are the intermediate format for every
//! frame change in the position pipeline: heliocentric ecliptic positions are
//! differenced to geocentric vectors, rotated into the equatorial frame and
//! only then turned back into spherical angles.
//!
//! ## Coordinate System Convention
//!
//! - **X-axis**: toward the vernal equinox
//! - **Y-axis**: 90° east along the reference plane (ecliptic or equator)
//! - **Z-axis**: toward the pole of the reference plane
//!
//! ## Examples
//!
//! ```rust
//! use orrery::coordinates::cartesian::Cartesian3;
//!
//! let p = Cartesian3::new(3.0, 4.0, 0.0);
//! assert_eq!(p.magnitude(), 5.0);
//!
//! let (lon, lat, dist) = p.to_spherical();
//! assert!((lon.to_degrees() - 53.130_102_354).abs() < 1e-8);
//! assert_eq!(lat, 0.0);
//! assert_eq!(dist, 5.0);
//! ```

use nalgebra::{Matrix3, Vector3};
use serde::Serialize;
use std::f64::consts::PI;

/// Three-dimensional Cartesian coordinate representation, in AU when used as a position
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cartesian3 {
    /// X-component (toward vernal equinox)
    pub x: f64,
    /// Y-component
    pub y: f64,
    /// Z-component (toward the pole of the reference plane)
    pub z: f64,
}

impl Cartesian3 {
    /// Creates a new Cartesian coordinate
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Cartesian3 { x, y, z }
    }

    /// Converts to spherical coordinates
    ///
    /// Returns `(lon, lat, distance)` in radians, with the longitude in
    /// [0, 2π) and the latitude in [-π/2, π/2]. The zero vector maps to
    /// `(0, 0, 0)`.
    pub fn to_spherical(&self) -> (f64, f64, f64) {
        let distance = self.magnitude();

        if distance == 0.0 {
            return (0.0, 0.0, 0.0);
        }

        // Clamp guards asin against |z| exceeding the norm by an ulp
        let lat = (self.z / distance).clamp(-1.0, 1.0).asin();
        let lon = if self.x == 0.0 && self.y == 0.0 {
            0.0
        } else {
            let mut lon = self.y.atan2(self.x);
            if lon < 0.0 {
                lon += 2.0 * PI;
            }
            if lon >= 2.0 * PI {
                lon = 0.0;
            }
            lon
        };

        (lon, lat, distance)
    }

    /// Euclidean length of the vector
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Rotates an ecliptic vector into the equatorial frame
    ///
    /// This is a rotation about the X axis (the equinox direction) by the
    /// obliquity `epsilon`, given in radians:
    ///
    /// ```text
    /// x_eq = x
    /// y_eq = y cos ε - z sin ε
    /// z_eq = y sin ε + z cos ε
    /// ```
    pub fn ecliptic_to_equatorial(&self, epsilon: f64) -> Cartesian3 {
        let (sin_eps, cos_eps) = epsilon.sin_cos();
        #[rustfmt::skip]
        let rotation = Matrix3::new(
            1.0, 0.0,      0.0,
            0.0, cos_eps, -sin_eps,
            0.0, sin_eps,  cos_eps,
        );
        Cartesian3::from_vector3(rotation * self.to_vector3())
    }

    /// Converts to nalgebra Vector3 for linear algebra operations
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra Vector3
    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        Cartesian3 {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }

    /// Whether every component is finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl std::ops::Sub for Cartesian3 {
    type Output = Cartesian3;

    fn sub(self, other: Cartesian3) -> Cartesian3 {
        Cartesian3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_magnitude_calculation() {
        let coord = Cartesian3::new(3.0, 4.0, 0.0);
        assert_eq!(coord.magnitude(), 5.0);

        let zero_vector = Cartesian3::new(0.0, 0.0, 0.0);
        assert_eq!(zero_vector.magnitude(), 0.0);
    }

    #[test]
    fn test_to_spherical() {
        let (lon, lat, dist) = Cartesian3::new(-1.0, -1.0, 2.0_f64.sqrt()).to_spherical();
        assert_abs_diff_eq!(lon, 1.25 * PI, epsilon = 1e-15);
        assert_abs_diff_eq!(lat, PI / 4.0, epsilon = 1e-15);
        assert_abs_diff_eq!(dist, 2.0, epsilon = 1e-15);
    }

    #[test]
    fn test_spherical_longitude_range() {
        // Just below the +X axis on the negative Y side wraps to almost 2π
        let (lon, _, _) = Cartesian3::new(1.0, -1e-9, 0.0).to_spherical();
        assert!(lon > 6.28 && lon < 2.0 * PI);

        let (lon, lat, _) = Cartesian3::new(0.0, 0.0, 2.0).to_spherical();
        assert_eq!(lon, 0.0);
        assert_abs_diff_eq!(lat, PI / 2.0, epsilon = 1e-15);

        assert_eq!(Cartesian3::new(0.0, 0.0, 0.0).to_spherical(), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_ecliptic_to_equatorial_matches_closed_form() {
        let epsilon = 23.439_291_f64.to_radians();
        let ecl = Cartesian3::new(0.3, -1.2, 0.4);
        let eq = ecl.ecliptic_to_equatorial(epsilon);

        assert_abs_diff_eq!(eq.x, 0.3, epsilon = 1e-15);
        assert_abs_diff_eq!(eq.y, -1.2 * epsilon.cos() - 0.4 * epsilon.sin(), epsilon = 1e-14);
        assert_abs_diff_eq!(eq.z, -1.2 * epsilon.sin() + 0.4 * epsilon.cos(), epsilon = 1e-14);
        assert_abs_diff_eq!(eq.magnitude(), ecl.magnitude(), epsilon = 1e-14);
    }

    #[test]
    fn test_ecliptic_pole_tilts_by_obliquity() {
        // The ecliptic north pole sits at RA 18h, Dec 90° - ε
        let epsilon = 23.439_291_f64.to_radians();
        let pole = Cartesian3::new(0.0, 0.0, 1.0).ecliptic_to_equatorial(epsilon);
        let (ra, dec, _) = pole.to_spherical();
        assert_abs_diff_eq!(ra.to_degrees(), 270.0, epsilon = 1e-10);
        assert_abs_diff_eq!(dec, PI / 2.0 - epsilon, epsilon = 1e-12);
    }

    #[test]
    fn test_vector3_round_trip() {
        let coord = Cartesian3::new(1.0, 2.0, 3.0);
        assert_eq!(Cartesian3::from_vector3(coord.to_vector3()), coord);
    }

    #[test]
    fn test_subtraction() {
        let a = Cartesian3::new(1.0, 2.0, 3.0);
        let b = Cartesian3::new(0.5, -2.0, 1.0);
        assert_eq!(a - b, Cartesian3::new(0.5, 4.0, 2.0));
        assert!((a - b).is_finite());
        assert!(!Cartesian3::new(f64::NAN, 0.0, 0.0).is_finite());
    }
}
