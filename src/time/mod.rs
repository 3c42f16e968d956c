//! Time module for astronomical time calculations
//!
//! Instants are carried as UTC `chrono` timestamps and converted to Julian
//! dates and fractional days since an epoch on demand. The difference between
//! UTC and the dynamical time scales (about a minute) is ignored: it is far
//! below the accuracy of the mean orbital elements used by this crate.

use crate::constants::{
    ACCURACY_WINDOW_END_YEAR, ACCURACY_WINDOW_START_YEAR, DAY_S, J2000, JULIAN_CENTURY_DAYS,
    UNIX_EPOCH_JD,
};
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::Serialize;
use std::fmt;
use std::ops::{Add, Sub};
use thiserror::Error;

/// Unix timestamp of J2000.0 (2000-01-01T12:00:00Z)
const J2000_UNIX_SECONDS: i64 = 946_728_000;

/// Error type for time operations
#[derive(Debug, Error)]
pub enum TimeError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Parsing error: {0}")]
    ParseError(String),
}

/// Result type for time operations
pub type Result<T> = std::result::Result<T, TimeError>;

/// An absolute instant used as input to position calculations
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Time {
    utc: DateTime<Utc>,
}

impl Time {
    /// Create a time from a UTC datetime
    pub fn new(utc: DateTime<Utc>) -> Self {
        Self { utc }
    }

    /// The current wall-clock time
    pub fn now() -> Self {
        Self::new(Utc::now())
    }

    /// The J2000.0 reference instant
    pub fn j2000() -> Self {
        Self::new(DateTime::<Utc>::UNIX_EPOCH + Duration::seconds(J2000_UNIX_SECONDS))
    }

    /// Create a time from UTC calendar fields
    pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Result<Self> {
        if !(0.0..60.0).contains(&second) {
            return Err(TimeError::InvalidDate(format!("second out of range: {}", second)));
        }
        let whole = second.trunc() as u32;
        let nanos = ((second - second.trunc()) * 1e9).round() as u32;

        let naive = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_nano_opt(hour, minute, whole, nanos.min(999_999_999)))
            .ok_or_else(|| {
                TimeError::InvalidDate(format!(
                    "{:04}-{:02}-{:02} {:02}:{:02}:{}",
                    year, month, day, hour, minute, second
                ))
            })?;

        Ok(Self::new(Utc.from_utc_datetime(&naive)))
    }

    /// Create a time from a Julian date
    pub fn from_jd(jd: f64) -> Result<Self> {
        let micros = ((jd - UNIX_EPOCH_JD) * DAY_S * 1e6).round();
        if !micros.is_finite() || micros.abs() > i64::MAX as f64 {
            return Err(TimeError::InvalidDate(format!("Julian date out of range: {}", jd)));
        }
        DateTime::<Utc>::from_timestamp_micros(micros as i64)
            .map(Self::new)
            .ok_or_else(|| TimeError::InvalidDate(format!("Julian date out of range: {}", jd)))
    }

    /// Parse a timestamp
    ///
    /// Accepts RFC 3339 (`2024-03-20T03:06:00Z`, any offset), a naive UTC
    /// datetime (`2024-03-20 03:06:00`) or a bare date (`2024-03-20`, midnight UTC).
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
            return Ok(Self::new(dt.with_timezone(&Utc)));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S") {
            return Ok(Self::new(Utc.from_utc_datetime(&naive)));
        }
        if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
            if let Some(naive) = date.and_hms_opt(0, 0, 0) {
                return Ok(Self::new(Utc.from_utc_datetime(&naive)));
            }
        }

        Err(TimeError::ParseError(format!(
            "unrecognised timestamp '{}', expected RFC 3339 or YYYY-MM-DD[ HH:MM:SS]",
            input
        )))
    }

    /// The underlying UTC datetime
    pub fn utc_datetime(&self) -> DateTime<Utc> {
        self.utc
    }

    /// Julian date of this instant
    pub fn jd(&self) -> f64 {
        J2000 + self.days_since_j2000()
    }

    /// Signed fractional days elapsed since J2000.0
    pub fn days_since_j2000(&self) -> f64 {
        let delta = self.utc - Self::j2000().utc;
        match delta.num_microseconds() {
            Some(us) => us as f64 / (DAY_S * 1e6),
            None => delta.num_milliseconds() as f64 / (DAY_S * 1e3),
        }
    }

    /// Signed fractional days elapsed since the epoch given as a Julian date
    pub fn days_since(&self, epoch_jd: f64) -> f64 {
        self.days_since_j2000() - (epoch_jd - J2000)
    }

    /// Julian centuries since J2000.0
    pub fn julian_centuries(&self) -> f64 {
        self.days_since_j2000() / JULIAN_CENTURY_DAYS
    }

    /// Whether the instant falls inside the range the orbital elements are meant for
    pub fn within_accuracy_window(&self) -> bool {
        let year = self.utc.year();
        (ACCURACY_WINDOW_START_YEAR..ACCURACY_WINDOW_END_YEAR).contains(&year)
    }

    /// ISO 8601 representation with second precision, e.g. `2024-03-20 03:06:00 UTC`
    pub fn utc_iso(&self) -> String {
        self.utc.format("%Y-%m-%d %H:%M:%S UTC").to_string()
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (JD {:.5})", self.utc_iso(), self.jd())
    }
}

impl Add<f64> for Time {
    type Output = Self;

    /// Add a number of days
    fn add(self, days: f64) -> Self::Output {
        let micros = (days * DAY_S * 1e6).round() as i64;
        Self::new(self.utc + Duration::microseconds(micros))
    }
}

impl Add<Duration> for Time {
    type Output = Self;

    fn add(self, duration: Duration) -> Self::Output {
        Self::new(self.utc + duration)
    }
}

impl Sub<f64> for Time {
    type Output = Self;

    /// Subtract a number of days
    fn sub(self, days: f64) -> Self::Output {
        self + (-days)
    }
}

impl Sub<Time> for Time {
    type Output = f64;

    /// Difference in days
    fn sub(self, other: Time) -> Self::Output {
        self.days_since_j2000() - other.days_since_j2000()
    }
}

impl PartialEq for Time {
    fn eq(&self, other: &Self) -> bool {
        self.utc == other.utc
    }
}

impl PartialOrd for Time {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.utc.partial_cmp(&other.utc)
    }
}

impl From<DateTime<Utc>> for Time {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::new(dt)
    }
}
