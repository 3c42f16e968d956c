//! Approximate apparent visual magnitudes
//!
//! `m = V(1,0) + 5 log10(r d) + β α`
//!
//! where `r` and `d` are the distances to the Sun and to the observer in AU,
//! `α` is the phase angle in degrees and `β` a per-planet linear phase
//! coefficient. Saturn's rings and the non-linear phase curves of Mercury and
//! Venus are not modelled.

use super::{elements_for, Planet, PlanetError};

/// Magnitude from distances and an explicit phase angle in degrees
pub fn visual_magnitude_at_phase(planet: Planet, r: f64, d: f64, phase_angle: f64) -> f64 {
    let model = &planet.elements().magnitude;
    model.absolute_magnitude + 5.0 * (r * d).log10() + model.phase_coefficient * phase_angle
}

/// Magnitude from distances alone
///
/// The phase term uses a representative phase angle for the planet instead
/// of the actual geometry.
pub fn visual_magnitude(planet: Planet, r: f64, d: f64) -> f64 {
    let typical = planet.elements().magnitude.typical_phase_angle;
    visual_magnitude_at_phase(planet, r, d, typical)
}

/// Magnitude for a planet given by name
pub fn visual_magnitude_for(name: &str, r: f64, d: f64) -> Result<f64, PlanetError> {
    let planet = elements_for(name)?.planet;
    Ok(visual_magnitude(planet, r, d))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_unit_distances_give_absolute_magnitude() {
        for planet in Planet::ALL {
            let model = planet.elements().magnitude;
            assert_abs_diff_eq!(
                visual_magnitude_at_phase(planet, 1.0, 1.0, 0.0),
                model.absolute_magnitude,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_farther_is_fainter() {
        let near = visual_magnitude(Planet::Saturn, 9.5, 8.5);
        let far = visual_magnitude(Planet::Saturn, 9.5, 10.5);
        assert!(far > near);
        // 5 log10 of the distance ratio
        assert_abs_diff_eq!(far - near, 5.0 * (10.5_f64 / 8.5).log10(), epsilon = 1e-12);
    }

    #[test]
    fn test_jupiter_at_opposition() {
        // Jupiter at opposition is around magnitude -2.5 to -2.9
        let m = visual_magnitude_at_phase(Planet::Jupiter, 5.0, 4.0, 0.0);
        assert!((-3.0..-2.3).contains(&m), "got {}", m);
    }

    #[test]
    fn test_by_name() {
        assert_eq!(
            visual_magnitude_for("uranus", 19.2, 18.5),
            Ok(visual_magnitude(Planet::Uranus, 19.2, 18.5))
        );
        assert_eq!(
            visual_magnitude_for("Pluto", 39.5, 38.5),
            Err(PlanetError::UnknownPlanet("Pluto".to_string()))
        );
    }
}
