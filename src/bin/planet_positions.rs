//! Planet Positions Dashboard
//!
//! Prints the positions of the selected planets as text tables (or JSON),
//! once or on a fixed refresh interval.
//!
//! Usage:
//!   cargo run --bin planet_positions -- [--planets mars,jupiter] [--time 2025-01-16T00:00:00Z]
//!       [--systems geocentric,heliocentric,cartesian,magnitude] [--json] [--watch 60] [--summary]

use std::io;
use std::time::Duration;

use clap::{ArgAction, Parser};
use log::{info, LevelFilter};
use orrery::dashboard::{Dashboard, OutputFormat};
use orrery::{CoordinateSystem, DisplayConfig, Planet, Time, TimeSelection};

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Planet Positions Dashboard
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Displays approximate planetary positions in several coordinate systems",
    long_about = None
)]
struct Args {
    /// Comma-separated planets to show (default: all except Earth)
    #[arg(short, long, value_delimiter = ',')]
    planets: Vec<String>,

    /// Instant to compute for, RFC 3339 or YYYY-MM-DD[ HH:MM:SS] (default: now)
    #[arg(short, long)]
    time: Option<String>,

    /// Comma-separated coordinate systems: geocentric, heliocentric, cartesian, magnitude
    #[arg(short, long, value_delimiter = ',', default_value = "geocentric,heliocentric")]
    systems: Vec<String>,

    /// Print snapshots as JSON instead of tables
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,

    /// Re-render every N seconds
    #[arg(short, long, value_name = "SECONDS")]
    watch: Option<u64>,

    /// Include summary statistics
    #[arg(long, action = ArgAction::SetTrue)]
    summary: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Turn command line arguments into a display configuration
fn build_config(args: &Args) -> Result<DisplayConfig> {
    let mut config = DisplayConfig::default().with_summary(args.summary);

    if !args.planets.is_empty() {
        let planets = args
            .planets
            .iter()
            .map(|name| name.parse::<Planet>())
            .collect::<std::result::Result<Vec<_>, _>>()?;
        config = config.with_planets(planets);
    }

    let systems = args
        .systems
        .iter()
        .map(|name| name.parse::<CoordinateSystem>())
        .collect::<std::result::Result<Vec<_>, _>>()?;
    config = config.with_systems(systems);

    if let Some(time) = &args.time {
        config = config.at(TimeSelection::Fixed(Time::parse(time)?));
    }

    if let Some(seconds) = args.watch {
        config = config.refresh_every(Duration::from_secs(seconds));
    }

    config.validate()?;
    Ok(config)
}

/// Logger with a default level from `-v` flags, overridden by a `RUST_LOG` style filter
fn log_builder(verbose: u8, env_filters: Option<&str>) -> env_logger::Builder {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    if let Some(filters) = env_filters {
        builder.parse_filters(filters);
    }
    builder
}

fn main() -> Result<()> {
    let args = Args::parse();

    let env_filters = std::env::var(env_logger::DEFAULT_FILTER_ENV).ok();
    log_builder(args.verbose, env_filters.as_deref()).init();

    let config = build_config(&args)?;
    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Table
    };
    info!(
        "Showing {} planet(s) in {} coordinate system(s)",
        config.planets.len(),
        config.systems.len()
    );

    let dashboard = Dashboard::new(config, format)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    dashboard.run(&mut out, None, Time::now, std::thread::sleep)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_from_verbosity() {
        assert_eq!(log_builder(0, None).build().filter(), LevelFilter::Warn);
        assert_eq!(log_builder(1, None).build().filter(), LevelFilter::Info);
        assert_eq!(log_builder(3, None).build().filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_env_filters_override_verbosity() {
        assert_eq!(log_builder(0, Some("debug")).build().filter(), LevelFilter::Debug);
        assert_eq!(log_builder(2, Some("error")).build().filter(), LevelFilter::Error);
        assert_eq!(
            log_builder(0, Some("orrery=trace")).build().filter(),
            LevelFilter::Trace
        );
    }

    #[test]
    fn test_build_config_from_args() {
        let args = Args::try_parse_from([
            "planet_positions",
            "--planets",
            "mars,Jupiter",
            "--time",
            "2025-01-16T00:00:00Z",
            "--systems",
            "cartesian,mag",
            "--watch",
            "30",
            "--summary",
        ])
        .unwrap();
        let config = build_config(&args).unwrap();

        assert_eq!(config.planets, vec![Planet::Mars, Planet::Jupiter]);
        assert_eq!(
            config.systems,
            vec![CoordinateSystem::Cartesian, CoordinateSystem::Magnitude]
        );
        assert_eq!(
            config.time,
            TimeSelection::Fixed(Time::utc(2025, 1, 16, 0, 0, 0.0).unwrap())
        );
        assert_eq!(config.refresh_interval, Some(Duration::from_secs(30)));
        assert!(config.summary);
    }

    #[test]
    fn test_build_config_rejects_bad_input() {
        let args = Args::try_parse_from(["planet_positions", "--planets", "pluto"]).unwrap();
        assert!(build_config(&args).is_err());

        let args = Args::try_parse_from(["planet_positions", "--watch", "0"]).unwrap();
        assert!(build_config(&args).is_err());
    }
}
