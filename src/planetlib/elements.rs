//! Mean orbital elements of the major planets
//!
//! Values are the J2000 mean elements of the widely used "approximate
//! positions of the major planets" table, referred to the mean ecliptic and
//! equinox of J2000. The Earth entry is the Earth-Moon barycentre. The table
//! gives mean longitude `L` and longitude of perihelion `ϖ`; they are stored
//! here already reduced to the argument of perihelion `ω = ϖ - Ω` and the
//! mean anomaly `M0 = L - ϖ`, both wrapped into [0, 360).

use super::{Planet, PlanetError};
use crate::constants::{GAUSSIAN_GRAVITATIONAL_CONSTANT, J2000, RAD2DEG};
use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashMap;

/// Parameters of the approximate visual magnitude formula
///
/// `V(1,0)` values are the Astronomical Almanac ones (Meeus, *Astronomical
/// Algorithms*, ch. 41); the phase coefficients keep only the linear term of
/// those phase laws.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MagnitudeModel {
    /// Magnitude at 1 AU from both Sun and observer, at zero phase (V(1,0))
    pub absolute_magnitude: f64,
    /// Linear brightness falloff in magnitudes per degree of phase angle
    pub phase_coefficient: f64,
    /// Representative phase angle in degrees, used when the geometry is unknown
    pub typical_phase_angle: f64,
}

/// Keplerian elements of one planet
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetOrbitalElements {
    /// The planet these elements describe
    pub planet: Planet,
    /// Semi-major axis in AU
    pub semi_major_axis: f64,
    /// Eccentricity, 0 <= e < 1
    pub eccentricity: f64,
    /// Inclination to the ecliptic in degrees
    pub inclination: f64,
    /// Longitude of the ascending node in degrees
    pub ascending_node: f64,
    /// Argument of perihelion in degrees
    pub argument_of_perihelion: f64,
    /// Mean anomaly at the reference epoch in degrees, in [0, 360)
    pub mean_anomaly_at_epoch: f64,
    /// Reference epoch as a Julian date
    pub epoch: f64,
    /// Visual magnitude parameters
    pub magnitude: MagnitudeModel,
}

impl PlanetOrbitalElements {
    /// Mean daily motion in degrees/day from Kepler's third law
    ///
    /// `n = k / a^1.5`, with `k` the Gaussian gravitational constant. Planet
    /// masses are neglected.
    pub fn mean_daily_motion(&self) -> f64 {
        GAUSSIAN_GRAVITATIONAL_CONSTANT * RAD2DEG / self.semi_major_axis.powf(1.5)
    }

    /// Sidereal orbital period in days
    pub fn orbital_period_days(&self) -> f64 {
        360.0 / self.mean_daily_motion()
    }

    /// Perihelion distance `a(1 - e)` in AU
    pub fn perihelion(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Aphelion distance `a(1 + e)` in AU
    pub fn aphelion(&self) -> f64 {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }
}

/// Element table, indexed in `Planet` declaration order
static ELEMENTS: [PlanetOrbitalElements; 8] = [
    PlanetOrbitalElements {
        planet: Planet::Mercury,
        semi_major_axis: 0.387_099_27,
        eccentricity: 0.205_635_93,
        inclination: 7.004_979_02,
        ascending_node: 48.330_765_93,
        argument_of_perihelion: 29.127_030_35,
        mean_anomaly_at_epoch: 174.792_527_22,
        epoch: J2000,
        magnitude: MagnitudeModel {
            absolute_magnitude: -0.42,
            phase_coefficient: 0.038,
            typical_phase_angle: 60.0,
        },
    },
    PlanetOrbitalElements {
        planet: Planet::Venus,
        semi_major_axis: 0.723_335_66,
        eccentricity: 0.006_776_72,
        inclination: 3.394_676_05,
        ascending_node: 76.679_842_55,
        argument_of_perihelion: 54.922_624_63,
        mean_anomaly_at_epoch: 50.376_632_32,
        epoch: J2000,
        magnitude: MagnitudeModel {
            absolute_magnitude: -4.40,
            phase_coefficient: 0.013,
            typical_phase_angle: 60.0,
        },
    },
    PlanetOrbitalElements {
        planet: Planet::Earth,
        semi_major_axis: 1.000_002_61,
        eccentricity: 0.016_711_23,
        inclination: -0.000_015_31,
        ascending_node: 0.0,
        argument_of_perihelion: 102.937_681_93,
        mean_anomaly_at_epoch: 357.526_889_73,
        epoch: J2000,
        magnitude: MagnitudeModel {
            absolute_magnitude: -3.86,
            phase_coefficient: 0.0,
            typical_phase_angle: 0.0,
        },
    },
    PlanetOrbitalElements {
        planet: Planet::Mars,
        semi_major_axis: 1.523_710_34,
        eccentricity: 0.093_394_10,
        inclination: 1.849_691_42,
        ascending_node: 49.559_538_91,
        argument_of_perihelion: 286.496_831_50,
        mean_anomaly_at_epoch: 19.390_197_54,
        epoch: J2000,
        magnitude: MagnitudeModel {
            absolute_magnitude: -1.52,
            phase_coefficient: 0.016,
            typical_phase_angle: 30.0,
        },
    },
    PlanetOrbitalElements {
        planet: Planet::Jupiter,
        semi_major_axis: 5.202_887_00,
        eccentricity: 0.048_386_24,
        inclination: 1.304_396_95,
        ascending_node: 100.473_909_09,
        argument_of_perihelion: 274.254_570_74,
        mean_anomaly_at_epoch: 19.667_960_68,
        epoch: J2000,
        magnitude: MagnitudeModel {
            absolute_magnitude: -9.40,
            phase_coefficient: 0.005,
            typical_phase_angle: 6.0,
        },
    },
    PlanetOrbitalElements {
        planet: Planet::Saturn,
        semi_major_axis: 9.536_675_94,
        eccentricity: 0.053_861_79,
        inclination: 2.485_991_87,
        ascending_node: 113.662_424_48,
        argument_of_perihelion: 338.936_453_83,
        mean_anomaly_at_epoch: 317.355_365_92,
        epoch: J2000,
        magnitude: MagnitudeModel {
            absolute_magnitude: -8.88,
            phase_coefficient: 0.044,
            typical_phase_angle: 3.0,
        },
    },
    PlanetOrbitalElements {
        planet: Planet::Uranus,
        semi_major_axis: 19.189_164_64,
        eccentricity: 0.047_257_44,
        inclination: 0.772_637_83,
        ascending_node: 74.016_925_03,
        argument_of_perihelion: 96.937_351_27,
        mean_anomaly_at_epoch: 142.283_828_21,
        epoch: J2000,
        magnitude: MagnitudeModel {
            absolute_magnitude: -7.19,
            phase_coefficient: 0.002,
            typical_phase_angle: 1.5,
        },
    },
    PlanetOrbitalElements {
        planet: Planet::Neptune,
        semi_major_axis: 30.069_922_76,
        eccentricity: 0.008_590_48,
        inclination: 1.770_043_47,
        ascending_node: 131.784_225_74,
        argument_of_perihelion: 273.180_536_53,
        mean_anomaly_at_epoch: 259.915_208_04,
        epoch: J2000,
        magnitude: MagnitudeModel {
            absolute_magnitude: -6.87,
            phase_coefficient: 0.0,
            typical_phase_angle: 1.0,
        },
    },
];

lazy_static! {
    /// Map from lowercase planet names to their elements
    static ref ELEMENTS_BY_NAME: HashMap<String, &'static PlanetOrbitalElements> = {
        let mut m = HashMap::new();
        for elements in ELEMENTS.iter() {
            m.insert(elements.planet.name().to_lowercase(), elements);
        }
        m
    };
}

/// Elements of a typed planet
pub(crate) fn elements_of(planet: Planet) -> &'static PlanetOrbitalElements {
    &ELEMENTS[planet as usize]
}

/// Look up a planet's elements by name, case-insensitively
///
/// Anything other than the eight major planets fails with
/// [`PlanetError::UnknownPlanet`]; there is no fallback planet.
pub fn elements_for(name: &str) -> Result<&'static PlanetOrbitalElements, PlanetError> {
    let name = name.trim();
    ELEMENTS_BY_NAME
        .get(&name.to_lowercase())
        .copied()
        .ok_or_else(|| PlanetError::UnknownPlanet(name.to_string()))
}

/// The whole element table, Mercury to Neptune
pub fn all_elements() -> &'static [PlanetOrbitalElements; 8] {
    &ELEMENTS
}
