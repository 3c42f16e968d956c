//! Coordinate representations shared by the position pipeline

pub mod angle;
pub mod cartesian;

pub use angle::{format_dec_dms, format_ra_hms, format_signed_degrees, Angle};
pub use cartesian::Cartesian3;
