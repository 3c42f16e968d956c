//! Planet position calculator
//!
//! [`Ephemeris`] is the single entry point: given a planet and an instant it
//! runs the whole pipeline (elements, Kepler solution, heliocentric
//! orientation, geocentric conversion, magnitude) and returns a fresh
//! [`ComputedPosition`]. Nothing is cached; every call recomputes.

use super::geocentric::{mean_obliquity, phase_angle_between, to_geocentric, GeocentricPosition};
use super::heliocentric::{heliocentric_position, HeliocentricPosition};
use super::magnitude::visual_magnitude_at_phase;
use super::{Planet, PlanetError};
use crate::coordinates::Cartesian3;
use crate::time::Time;
use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::Serialize;

/// Every coordinate computed for one planet at one instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComputedPosition {
    /// The planet this position is for
    pub planet: Planet,
    /// The instant this position is for
    pub time: DateTime<Utc>,
    /// Julian date of the instant
    pub jd: f64,
    /// Sun-centred ecliptic position
    pub heliocentric: HeliocentricPosition,
    /// Earth-centred equatorial position, absent for Earth
    pub geocentric: Option<GeocentricPosition>,
    /// Sun-planet-Earth angle in degrees, absent for Earth
    pub phase_angle: Option<f64>,
    /// Approximate apparent visual magnitude, absent for Earth
    pub magnitude: Option<f64>,
    /// Whether the instant is inside the range the elements are suitable for
    pub within_accuracy_window: bool,
}

impl ComputedPosition {
    /// Heliocentric Cartesian position in AU
    pub fn cartesian(&self) -> Cartesian3 {
        self.heliocentric.cartesian
    }

    /// Geocentric position, or [`PlanetError::NotApplicable`] for Earth
    pub fn geocentric(&self) -> Result<&GeocentricPosition, PlanetError> {
        self.geocentric.as_ref().ok_or(PlanetError::NotApplicable {
            planet: self.planet,
            quantity: "geocentric position",
        })
    }

    /// Visual magnitude, or [`PlanetError::NotApplicable`] for Earth
    pub fn visual_magnitude(&self) -> Result<f64, PlanetError> {
        self.magnitude.ok_or(PlanetError::NotApplicable {
            planet: self.planet,
            quantity: "apparent magnitude",
        })
    }

    /// Whether every computed quantity is a finite number
    pub fn is_finite(&self) -> bool {
        let helio = &self.heliocentric;
        let helio_ok = helio.longitude.is_finite()
            && helio.latitude.is_finite()
            && helio.distance.is_finite()
            && helio.cartesian.is_finite()
            && helio.mean_anomaly.is_finite()
            && helio.true_anomaly.is_finite();

        let geo_ok = self.geocentric.map_or(true, |geo| {
            geo.right_ascension.is_finite()
                && geo.declination.is_finite()
                && geo.distance.is_finite()
                && geo.equatorial.is_finite()
        });

        helio_ok
            && geo_ok
            && self.phase_angle.map_or(true, f64::is_finite)
            && self.magnitude.map_or(true, f64::is_finite)
    }
}

/// Planet position calculator over the built-in mean orbital elements
///
/// The handle carries no state; it is cheap to copy and safe to share
/// between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ephemeris {}

impl Ephemeris {
    /// Create a new calculator
    pub fn new() -> Self {
        Self {}
    }

    /// Supported planets, Mercury to Neptune
    pub fn supported_planets(&self) -> [Planet; 8] {
        Planet::ALL
    }

    /// Compute every coordinate of a planet at an instant
    pub fn compute_position(&self, planet: Planet, time: &Time) -> ComputedPosition {
        let earth = heliocentric_position(Planet::Earth, time);
        self.compute_with_earth(planet, time, &earth)
    }

    /// Compute the position of a planet given by name
    ///
    /// Names are matched case-insensitively; anything else fails with
    /// [`PlanetError::UnknownPlanet`].
    pub fn compute_position_by_name(
        &self,
        name: &str,
        time: &Time,
    ) -> Result<ComputedPosition, PlanetError> {
        let planet: Planet = name.parse()?;
        Ok(self.compute_position(planet, time))
    }

    /// Compute several planets at the same instant, in the order given
    ///
    /// Earth's heliocentric position is computed once and shared.
    pub fn compute_positions(&self, planets: &[Planet], time: &Time) -> Vec<ComputedPosition> {
        if !time.within_accuracy_window() {
            warn!(
                "{} is outside the 2020-2030 accuracy window; positions are extrapolated",
                time.utc_iso()
            );
        }

        let earth = heliocentric_position(Planet::Earth, time);
        planets
            .iter()
            .map(|planet| self.compute_with_earth(*planet, time, &earth))
            .collect()
    }

    fn compute_with_earth(
        &self,
        planet: Planet,
        time: &Time,
        earth: &HeliocentricPosition,
    ) -> ComputedPosition {
        let heliocentric = heliocentric_position(planet, time);

        let (geocentric, phase_angle, magnitude) = if planet.is_earth() {
            (None, None, None)
        } else {
            let geo = to_geocentric(heliocentric.cartesian, earth.cartesian, mean_obliquity(time));
            let phase = phase_angle_between(&heliocentric, earth, geo.distance);
            let mag = visual_magnitude_at_phase(planet, heliocentric.distance, geo.distance, phase);
            (Some(geo), Some(phase), Some(mag))
        };

        debug!(
            "{} at JD {:.5}: λ={:.4}° β={:.4}° r={:.6} AU",
            planet,
            time.jd(),
            heliocentric.longitude,
            heliocentric.latitude,
            heliocentric.distance
        );

        ComputedPosition {
            planet,
            time: time.utc_datetime(),
            jd: time.jd(),
            heliocentric,
            geocentric,
            phase_angle,
            magnitude,
            within_accuracy_window: time.within_accuracy_window(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planetlib::geocentric_position;

    #[test]
    fn test_compute_matches_components() {
        let eph = Ephemeris::new();
        let t = Time::utc(2023, 8, 27, 0, 0, 0.0).unwrap();

        let pos = eph.compute_position(Planet::Saturn, &t);
        assert_eq!(pos.heliocentric, heliocentric_position(Planet::Saturn, &t));
        assert_eq!(*pos.geocentric().unwrap(), geocentric_position(Planet::Saturn, &t).unwrap());
        assert_eq!(pos.jd, t.jd());
        assert!(pos.within_accuracy_window);
        assert!(pos.is_finite());
    }

    #[test]
    fn test_earth_has_no_geocentric_view() {
        let eph = Ephemeris::new();
        let pos = eph.compute_position(Planet::Earth, &Time::j2000());

        assert!(pos.geocentric.is_none());
        assert!(matches!(
            pos.geocentric(),
            Err(PlanetError::NotApplicable { planet: Planet::Earth, .. })
        ));
        assert!(pos.visual_magnitude().is_err());
        assert!(pos.is_finite());
        assert!(!pos.within_accuracy_window);
    }

    #[test]
    fn test_by_name() {
        let eph = Ephemeris::new();
        let t = Time::j2000();
        assert_eq!(
            eph.compute_position_by_name("venus", &t).unwrap(),
            eph.compute_position(Planet::Venus, &t)
        );
        assert_eq!(
            eph.compute_position_by_name("Pluto", &t),
            Err(PlanetError::UnknownPlanet("Pluto".to_string()))
        );
    }

    #[test]
    fn test_batch_keeps_order() {
        let eph = Ephemeris::new();
        let t = Time::utc(2026, 1, 1, 0, 0, 0.0).unwrap();
        let planets = [Planet::Neptune, Planet::Mercury, Planet::Mars];
        let batch = eph.compute_positions(&planets, &t);

        assert_eq!(batch.len(), 3);
        for (pos, planet) in batch.iter().zip(planets) {
            assert_eq!(*pos, eph.compute_position(planet, &t));
        }
    }

    #[test]
    fn test_recomputation_is_idempotent() {
        let eph = Ephemeris::new();
        let t = Time::utc(2027, 5, 5, 5, 5, 5.0).unwrap();
        assert_eq!(
            eph.compute_position(Planet::Jupiter, &t),
            eph.compute_position(Planet::Jupiter, &t)
        );
    }
}
