//! Terminal dashboard over the position calculator
//!
//! Each render cycle takes an explicit [`DisplayConfig`] (planet set,
//! coordinate systems, time selection, refresh interval) and produces a
//! [`Snapshot`]; nothing is carried over from one cycle to the next.
//! Auto-refresh is a plain polling loop in [`Dashboard::run`].

use crate::planetlib::{ComputedPosition, Ephemeris, Planet};
use crate::time::Time;
use crate::{OrreryError, Result};
use log::{debug, info};
use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::str::FromStr;
use std::time::Duration;

pub mod render;
pub mod summary;

pub use render::{render_report, render_summary, render_table};
pub use summary::{PlanetValue, Summary};

/// Coordinate systems that can be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CoordinateSystem {
    /// Earth-centred right ascension / declination / distance
    Geocentric,
    /// Sun-centred ecliptic longitude / latitude / distance
    Heliocentric,
    /// Sun-centred ecliptic X / Y / Z
    Cartesian,
    /// Apparent magnitude and phase angle
    Magnitude,
}

impl CoordinateSystem {
    /// Every system, in display order
    pub const ALL: [CoordinateSystem; 4] = [
        CoordinateSystem::Geocentric,
        CoordinateSystem::Heliocentric,
        CoordinateSystem::Cartesian,
        CoordinateSystem::Magnitude,
    ];

    /// Short name as accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            CoordinateSystem::Geocentric => "geocentric",
            CoordinateSystem::Heliocentric => "heliocentric",
            CoordinateSystem::Cartesian => "cartesian",
            CoordinateSystem::Magnitude => "magnitude",
        }
    }
}

impl fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CoordinateSystem {
    type Err = OrreryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "geocentric" | "geo" | "radec" => Ok(CoordinateSystem::Geocentric),
            "heliocentric" | "helio" => Ok(CoordinateSystem::Heliocentric),
            "cartesian" | "xyz" => Ok(CoordinateSystem::Cartesian),
            "magnitude" | "mag" => Ok(CoordinateSystem::Magnitude),
            other => Err(OrreryError::InvalidConfig(format!(
                "unknown coordinate system '{}'",
                other
            ))),
        }
    }
}

/// Which instant a render cycle is computed for
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeSelection {
    /// The clock time at the start of each cycle
    Now,
    /// A fixed instant
    Fixed(Time),
}

impl TimeSelection {
    /// Resolve against the clock reading of the current cycle
    pub fn resolve(&self, now: Time) -> Time {
        match self {
            TimeSelection::Now => now,
            TimeSelection::Fixed(time) => *time,
        }
    }
}

/// Everything a render cycle needs to know
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    /// Planets to show, in display order
    pub planets: Vec<Planet>,
    /// Coordinate systems to show, in display order
    pub systems: Vec<CoordinateSystem>,
    /// Instant to compute for
    pub time: TimeSelection,
    /// Re-render interval; `None` renders once
    pub refresh_interval: Option<Duration>,
    /// Whether to append summary statistics
    pub summary: bool,
}

impl Default for DisplayConfig {
    /// All planets but Earth, geocentric and heliocentric columns, current time, no refresh
    fn default() -> Self {
        Self {
            planets: Planet::ALL.iter().copied().filter(|p| !p.is_earth()).collect(),
            systems: vec![CoordinateSystem::Geocentric, CoordinateSystem::Heliocentric],
            time: TimeSelection::Now,
            refresh_interval: None,
            summary: false,
        }
    }
}

impl DisplayConfig {
    /// Set the planets to show
    pub fn with_planets(mut self, planets: Vec<Planet>) -> Self {
        self.planets = planets;
        self
    }

    /// Set the coordinate systems to show
    pub fn with_systems(mut self, systems: Vec<CoordinateSystem>) -> Self {
        self.systems = systems;
        self
    }

    /// Set the time selection
    pub fn at(mut self, time: TimeSelection) -> Self {
        self.time = time;
        self
    }

    /// Re-render on a fixed interval
    pub fn refresh_every(mut self, interval: Duration) -> Self {
        self.refresh_interval = Some(interval);
        self
    }

    /// Toggle summary statistics
    pub fn with_summary(mut self, summary: bool) -> Self {
        self.summary = summary;
        self
    }

    /// Check the configuration can be rendered
    pub fn validate(&self) -> Result<()> {
        if self.planets.is_empty() {
            return Err(OrreryError::InvalidConfig(
                "select at least one planet".to_string(),
            ));
        }
        if self.systems.is_empty() {
            return Err(OrreryError::InvalidConfig(
                "select at least one coordinate system".to_string(),
            ));
        }
        if self.refresh_interval == Some(Duration::ZERO) {
            return Err(OrreryError::InvalidConfig(
                "refresh interval must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Positions for one render cycle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Instant the positions were computed for
    pub time: Time,
    /// Whether that instant is inside the supported accuracy window
    pub within_accuracy_window: bool,
    /// One entry per configured planet, in configured order
    pub positions: Vec<ComputedPosition>,
    /// Summary statistics, when requested
    pub summary: Option<Summary>,
}

impl Snapshot {
    /// Compute a snapshot for a configuration
    ///
    /// `now` is the clock reading used when the configuration asks for the
    /// current time.
    pub fn compute(ephemeris: &Ephemeris, config: &DisplayConfig, now: Time) -> Result<Snapshot> {
        config.validate()?;

        let time = config.time.resolve(now);
        let positions = ephemeris.compute_positions(&config.planets, &time);
        let summary = if config.summary {
            Summary::from_positions(&positions)
        } else {
            None
        };

        Ok(Snapshot {
            time,
            within_accuracy_window: time.within_accuracy_window(),
            positions,
            summary,
        })
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Output format of a render cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Fixed-width text tables
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Renders snapshots for a configuration, once or on a refresh interval
#[derive(Debug, Clone)]
pub struct Dashboard {
    ephemeris: Ephemeris,
    config: DisplayConfig,
    format: OutputFormat,
}

impl Dashboard {
    /// Create a dashboard, rejecting configurations that cannot be rendered
    pub fn new(config: DisplayConfig, format: OutputFormat) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            ephemeris: Ephemeris::new(),
            config,
            format,
        })
    }

    /// The configuration in use
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Compute the snapshot for one cycle given the clock reading
    pub fn snapshot(&self, now: Time) -> Result<Snapshot> {
        Snapshot::compute(&self.ephemeris, &self.config, now)
    }

    /// Format a snapshot in the dashboard's output format
    pub fn render_snapshot(&self, snapshot: &Snapshot) -> Result<String> {
        match self.format {
            OutputFormat::Table => Ok(render_report(snapshot, &self.config.systems)),
            OutputFormat::Json => snapshot.to_json(),
        }
    }

    /// Compute and render one cycle
    pub fn render(&self, now: Time) -> Result<String> {
        self.render_snapshot(&self.snapshot(now)?)
    }

    /// Render cycles into `out` until `max_cycles` is reached
    ///
    /// Without a refresh interval exactly one cycle is rendered. With one,
    /// `clock` is read at the start of every cycle and `sleep` is called
    /// between cycles; `max_cycles == None` loops forever.
    pub fn run<W, C, S>(
        &self,
        out: &mut W,
        max_cycles: Option<usize>,
        mut clock: C,
        mut sleep: S,
    ) -> Result<usize>
    where
        W: Write,
        C: FnMut() -> Time,
        S: FnMut(Duration),
    {
        let mut cycles = 0;
        loop {
            let snapshot = self.snapshot(clock())?;
            writeln!(out, "{}", self.render_snapshot(&snapshot)?)?;
            out.flush()?;
            cycles += 1;
            debug!("Rendered cycle {} for {}", cycles, snapshot.time.utc_iso());

            let interval = match self.config.refresh_interval {
                Some(interval) => interval,
                None => break,
            };
            if max_cycles.is_some_and(|max| cycles >= max) {
                break;
            }

            info!("Next refresh in {:?}", interval);
            sleep(interval);
        }
        Ok(cycles)
    }
}
