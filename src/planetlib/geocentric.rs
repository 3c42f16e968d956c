//! Geocentric equatorial coordinates from heliocentric ecliptic vectors

use super::heliocentric::{heliocentric_position, HeliocentricPosition};
use super::{Planet, PlanetError};
use crate::constants::{DEG2RAD, OBLIQUITY_J2000, OBLIQUITY_RATE, RAD2DEG};
use crate::coordinates::angle::normalize_degrees;
use crate::coordinates::{Angle, Cartesian3};
use crate::time::Time;
use serde::Serialize;

/// Position of a planet as seen from the centre of the Earth
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeocentricPosition {
    /// Right ascension in degrees, [0, 360)
    pub right_ascension: f64,
    /// Declination in degrees, [-90, 90]
    pub declination: f64,
    /// Distance from Earth in AU
    pub distance: f64,
    /// Geocentric vector in the equatorial frame, AU
    pub equatorial: Cartesian3,
}

impl GeocentricPosition {
    /// Right ascension in hours, [0, 24)
    pub fn right_ascension_hours(&self) -> f64 {
        Angle::from_degrees(self.right_ascension).to_hours()
    }
}

/// Mean obliquity of the ecliptic in degrees at a given time
///
/// Linear secular term only; the change over a century is under 0.02°.
pub fn mean_obliquity(time: &Time) -> f64 {
    OBLIQUITY_J2000 + OBLIQUITY_RATE * time.julian_centuries()
}

/// Convert a heliocentric ecliptic position to geocentric RA/Dec
///
/// # Arguments
///
/// * `target` - Heliocentric ecliptic position of the planet, AU
/// * `earth` - Heliocentric ecliptic position of the Earth at the same instant, AU
/// * `obliquity_deg` - Obliquity of the ecliptic in degrees
///
/// Coincident vectors give a zero distance and RA = Dec = 0; callers are
/// expected to never ask for Earth as seen from Earth.
pub fn to_geocentric(target: Cartesian3, earth: Cartesian3, obliquity_deg: f64) -> GeocentricPosition {
    let equatorial = (target - earth).ecliptic_to_equatorial(obliquity_deg * DEG2RAD);
    let (ra, dec, distance) = equatorial.to_spherical();

    GeocentricPosition {
        right_ascension: normalize_degrees(Angle::from_radians(ra).to_degrees()),
        declination: Angle::from_radians(dec).to_degrees(),
        distance,
        equatorial,
    }
}

/// Geocentric position of a planet at a given time
///
/// Fails with [`PlanetError::NotApplicable`] for the Earth itself.
pub fn geocentric_position(planet: Planet, time: &Time) -> Result<GeocentricPosition, PlanetError> {
    if planet.is_earth() {
        return Err(PlanetError::NotApplicable {
            planet,
            quantity: "geocentric position",
        });
    }

    let target = heliocentric_position(planet, time);
    let earth = heliocentric_position(Planet::Earth, time);
    Ok(to_geocentric(target.cartesian, earth.cartesian, mean_obliquity(time)))
}

/// Sun-planet-Earth angle in degrees, from the three mutual distances
///
/// * `r` - planet to Sun
/// * `d` - planet to Earth
/// * `earth_sun` - Earth to Sun
pub fn phase_angle(r: f64, d: f64, earth_sun: f64) -> f64 {
    if r == 0.0 || d == 0.0 {
        return 0.0;
    }
    let cos_phase = (r * r + d * d - earth_sun * earth_sun) / (2.0 * r * d);
    cos_phase.clamp(-1.0, 1.0).acos() * RAD2DEG
}

/// Phase angle for two heliocentric positions already computed
pub(crate) fn phase_angle_between(
    target: &HeliocentricPosition,
    earth: &HeliocentricPosition,
    geocentric_distance: f64,
) -> f64 {
    phase_angle(target.distance, geocentric_distance, earth.distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_earth_is_not_applicable() {
        let t = Time::j2000();
        assert_eq!(
            geocentric_position(Planet::Earth, &t),
            Err(PlanetError::NotApplicable {
                planet: Planet::Earth,
                quantity: "geocentric position",
            })
        );
    }

    #[test]
    fn test_point_on_equinox_direction() {
        // A body straight along +X from Earth sits at RA 0, Dec 0
        let earth = Cartesian3::new(-1.0, 0.0, 0.0);
        let target = Cartesian3::new(1.0, 0.0, 0.0);
        let geo = to_geocentric(target, earth, OBLIQUITY_J2000);
        assert_eq!(geo.right_ascension, 0.0);
        assert_eq!(geo.declination, 0.0);
        assert_eq!(geo.distance, 2.0);
    }

    #[test]
    fn test_ecliptic_point_at_ninety_degrees() {
        // Ecliptic longitude 90° maps to RA 6h and Dec +ε
        let earth = Cartesian3::new(0.0, 0.0, 0.0);
        let target = Cartesian3::new(0.0, 5.0, 0.0);
        let geo = to_geocentric(target, earth, OBLIQUITY_J2000);
        assert_abs_diff_eq!(geo.right_ascension_hours(), 6.0, epsilon = 1e-12);
        assert_abs_diff_eq!(geo.declination, OBLIQUITY_J2000, epsilon = 1e-12);
        assert_abs_diff_eq!(geo.distance, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_distance_within_triangle_bounds() {
        let t = Time::utc(2026, 10, 18, 0, 0, 0.0).unwrap();
        let earth = heliocentric_position(Planet::Earth, &t);
        for planet in Planet::ALL.iter().filter(|p| !p.is_earth()) {
            let helio = heliocentric_position(*planet, &t);
            let geo = geocentric_position(*planet, &t).unwrap();
            assert!(geo.distance >= (helio.distance - earth.distance).abs() - 1e-12);
            assert!(geo.distance <= helio.distance + earth.distance + 1e-12);
            assert!((-90.0..=90.0).contains(&geo.declination));
            assert!((0.0..360.0).contains(&geo.right_ascension));
        }
    }

    #[test]
    fn test_mean_obliquity() {
        assert_eq!(mean_obliquity(&Time::j2000()), OBLIQUITY_J2000);
        let t = Time::j2000() + 36_525.0;
        assert_abs_diff_eq!(mean_obliquity(&t), 23.426_287, epsilon = 1e-6);
    }

    #[test]
    fn test_phase_angle() {
        // Opposition: Sun, Earth and planet aligned with Earth in between
        assert_abs_diff_eq!(phase_angle(5.2, 4.2, 1.0), 0.0, epsilon = 1e-6);
        // Right triangle with the right angle at Earth: sin(phase) = R / r
        let r: f64 = 2.0_f64.sqrt();
        assert_abs_diff_eq!(phase_angle(r, 1.0, 1.0), 45.0, epsilon = 1e-9);
        assert_eq!(phase_angle(0.0, 1.0, 1.0), 0.0);
    }

    #[test]
    fn test_mars_opposition_2025() {
        // Mars opposition on 2025-01-16: RA ≈ 7h 57m, Dec ≈ +25.1°, Δ ≈ 0.64 AU
        let t = Time::utc(2025, 1, 16, 0, 0, 0.0).unwrap();
        let geo = geocentric_position(Planet::Mars, &t).unwrap();
        assert_abs_diff_eq!(geo.right_ascension_hours(), 7.95, epsilon = 0.15);
        assert_abs_diff_eq!(geo.declination, 25.1, epsilon = 1.0);
        assert_abs_diff_eq!(geo.distance, 0.643, epsilon = 0.01);
    }
}
