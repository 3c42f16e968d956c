//! Constants module for astronomical calculations

use std::f64::consts::PI;

// Time constants
/// Seconds in a day
pub const DAY_S: f64 = 86_400.0;
/// Days in a Julian century
pub const JULIAN_CENTURY_DAYS: f64 = 36_525.0;
/// J2000.0 epoch as Julian date
pub const J2000: f64 = 2_451_545.0;
/// Julian date of the Unix epoch (1970-01-01T00:00:00Z)
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;

// Physics
/// Gaussian gravitational constant in radians/day
pub const GAUSSIAN_GRAVITATIONAL_CONSTANT: f64 = 0.017_202_098_95;

// Earth constants
/// Mean obliquity of the ecliptic at J2000 in degrees
pub const OBLIQUITY_J2000: f64 = 23.439_291;
/// Secular drift of the mean obliquity in degrees per Julian century
pub const OBLIQUITY_RATE: f64 = -0.013_004_2;

// Kepler solver
/// Convergence tolerance on the eccentric anomaly step, in radians
pub const KEPLER_TOLERANCE: f64 = 1e-6;
/// Iteration cap for the Kepler solver
pub const KEPLER_MAX_ITERATIONS: usize = 30;

// Accuracy window of the tabulated elements (calendar years, end exclusive)
/// First year for which positions are considered reliable
pub const ACCURACY_WINDOW_START_YEAR: i32 = 2020;
/// First year past the reliable range
pub const ACCURACY_WINDOW_END_YEAR: i32 = 2031;
