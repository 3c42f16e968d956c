//! # Angle Representation Module
//!
//! Angles are stored in the unit they were produced in (degrees or radians)
//! and converted only when asked. The orbital elements are tabulated in
//! degrees while the trigonometry runs in radians.
//!
//! The module also provides the normalisation helpers used throughout the
//! position pipeline and the sexagesimal formatting used for display.
//!
//! ## Examples
//!
//! ```rust
//! use orrery::coordinates::angle::{format_dec_dms, format_ra_hms, Angle};
//!
//! let angle = Angle::from_degrees(-30.0);
//! assert_eq!(angle.to_hours(), -2.0);
//!
//! assert_eq!(format_ra_hms(12.5), "12h 30m 00.00s");
//! assert_eq!(format_dec_dms(-23.5), "-23° 30' 00.00\"");
//! ```

use serde::Serialize;
use std::f64::consts::PI;

/// Internal representation format for angle values
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
enum AngleFormat {
    /// Angle stored in degrees
    Degrees(f64),
    /// Angle stored in radians
    Radians(f64),
}

/// An angular measurement that keeps the unit it was created with
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Angle {
    angle: AngleFormat,
}

impl Angle {
    /// Creates an angle from a value in degrees
    pub fn from_degrees(degrees: f64) -> Self {
        Angle {
            angle: AngleFormat::Degrees(degrees),
        }
    }

    /// Creates an angle from a value in radians
    pub fn from_radians(radians: f64) -> Self {
        Angle {
            angle: AngleFormat::Radians(radians),
        }
    }

    /// Creates an angle from a value in hours (15° per hour)
    pub fn from_hours(hours: f64) -> Self {
        Angle::from_degrees(hours * 15.0)
    }

    /// Returns the angle value in degrees
    ///
    /// Exact when the angle was created from degrees.
    pub fn to_degrees(&self) -> f64 {
        match self.angle {
            AngleFormat::Degrees(deg) => deg,
            AngleFormat::Radians(rad) => rad * (180.0 / PI),
        }
    }

    /// Returns the angle value in radians
    ///
    /// Exact when the angle was created from radians.
    pub fn to_radians(&self) -> f64 {
        match self.angle {
            AngleFormat::Degrees(deg) => deg * (PI / 180.0),
            AngleFormat::Radians(rad) => rad,
        }
    }

    /// Returns the angle value in hours
    pub fn to_hours(&self) -> f64 {
        self.to_degrees() / 15.0
    }
}

/// Wraps an angle in degrees into [0, 360)
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to the modulus for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Wraps an angle in radians into [0, 2π)
pub fn normalize_radians(radians: f64) -> f64 {
    let wrapped = radians.rem_euclid(2.0 * PI);
    if wrapped >= 2.0 * PI {
        0.0
    } else {
        wrapped
    }
}

/// Smallest signed difference `a - b` between two angles in degrees, in [-180, 180)
pub fn angular_difference_degrees(a: f64, b: f64) -> f64 {
    normalize_degrees(a - b + 180.0) - 180.0
}

/// Splits a non-negative value into whole units, whole minutes and fractional seconds
fn sexagesimal(value: f64) -> (u32, u32, f64) {
    // Round to the displayed precision first so 59.999s never prints as 60.00s
    let total_centis = (value * 360_000.0).round() as u64;
    let whole = total_centis / 360_000;
    let minutes = (total_centis % 360_000) / 6_000;
    let centis = total_centis % 6_000;
    (whole as u32, minutes as u32, centis as f64 / 100.0)
}

/// Formats right ascension in hours as `HHh MMm SS.SSs`
pub fn format_ra_hms(ra_hours: f64) -> String {
    let (h, m, s) = sexagesimal(ra_hours.rem_euclid(24.0));
    format!("{:02}h {:02}m {:05.2}s", h % 24, m, s)
}

/// Formats declination in degrees as `±DD° MM' SS.SS"`
pub fn format_dec_dms(dec_degrees: f64) -> String {
    let sign = if dec_degrees >= 0.0 { '+' } else { '-' };
    let (d, m, s) = sexagesimal(dec_degrees.abs());
    format!("{}{:02}° {:02}' {:05.2}\"", sign, d, m, s)
}

/// Formats an ecliptic latitude with an explicit sign, e.g. `+1.234567°`
pub fn format_signed_degrees(degrees: f64) -> String {
    let sign = if degrees >= 0.0 { '+' } else { '-' };
    format!("{}{:.6}°", sign, degrees.abs())
}
