//! Plain-text rendering of snapshots

use super::summary::Summary;
use super::{CoordinateSystem, Snapshot};
use crate::coordinates::{format_dec_dms, format_ra_hms, format_signed_degrees};
use crate::planetlib::ComputedPosition;

/// Placeholder for cells that have no value, e.g. Earth's RA
const NOT_APPLICABLE: &str = "n/a";

/// Column headers contributed by a coordinate system
fn headers(system: CoordinateSystem) -> &'static [&'static str] {
    match system {
        CoordinateSystem::Geocentric => &[
            "RA (hours)",
            "RA (h m s)",
            "Dec (degrees)",
            "Dec (d m s)",
            "Geo Distance (AU)",
        ],
        CoordinateSystem::Heliocentric => &[
            "Helio Longitude",
            "Helio Latitude",
            "Helio Distance (AU)",
        ],
        CoordinateSystem::Cartesian => &["Helio X (AU)", "Helio Y (AU)", "Helio Z (AU)"],
        CoordinateSystem::Magnitude => &["Magnitude", "Phase Angle"],
    }
}

/// Cell values contributed by a coordinate system for one planet
fn cells(system: CoordinateSystem, pos: &ComputedPosition) -> Vec<String> {
    match system {
        CoordinateSystem::Geocentric => match &pos.geocentric {
            Some(geo) => vec![
                format!("{:.6}", geo.right_ascension_hours()),
                format_ra_hms(geo.right_ascension_hours()),
                format!("{:.6}°", geo.declination),
                format_dec_dms(geo.declination),
                format!("{:.6}", geo.distance),
            ],
            None => vec![NOT_APPLICABLE.to_string(); 5],
        },
        CoordinateSystem::Heliocentric => vec![
            format!("{:.6}°", pos.heliocentric.longitude),
            format_signed_degrees(pos.heliocentric.latitude),
            format!("{:.6}", pos.heliocentric.distance),
        ],
        CoordinateSystem::Cartesian => {
            let c = pos.heliocentric.cartesian;
            vec![
                format!("{:.6}", c.x),
                format!("{:.6}", c.y),
                format!("{:.6}", c.z),
            ]
        }
        CoordinateSystem::Magnitude => vec![
            pos.magnitude
                .map_or_else(|| NOT_APPLICABLE.to_string(), |m| format!("{:.2}", m)),
            pos.phase_angle
                .map_or_else(|| NOT_APPLICABLE.to_string(), |a| format!("{:.1}°", a)),
        ],
    }
}

/// Lay out rows as a fixed-width table; the first column is left aligned
fn layout(header: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |row: &[String]| -> String {
        row.iter()
            .zip(&widths)
            .enumerate()
            .map(|(i, (cell, width))| {
                let pad = " ".repeat(width.saturating_sub(cell.chars().count()));
                if i == 0 {
                    format!("{}{}", cell, pad)
                } else {
                    format!("{}{}", pad, cell)
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
    };

    let mut out = String::new();
    out.push_str(&format_row(header));
    out.push('\n');
    let total: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    out.push_str(&"-".repeat(total));
    out.push('\n');
    for row in rows {
        out.push_str(&format_row(row));
        out.push('\n');
    }
    out
}

/// Render the coordinate table of a snapshot for the selected systems
pub fn render_table(snapshot: &Snapshot, systems: &[CoordinateSystem]) -> String {
    let mut header = vec!["Planet".to_string()];
    for system in systems {
        header.extend(headers(*system).iter().map(|h| h.to_string()));
    }

    let rows: Vec<Vec<String>> = snapshot
        .positions
        .iter()
        .map(|pos| {
            let mut row = vec![pos.planet.name().to_string()];
            for system in systems {
                row.extend(cells(*system, pos));
            }
            row
        })
        .collect();

    layout(&header, &rows)
}

/// Render summary statistics as `label: value` lines
pub fn render_summary(summary: &Summary) -> String {
    let avg_geo = summary
        .average_geocentric_distance
        .map_or_else(|| NOT_APPLICABLE.to_string(), |avg| format!("{:.3} AU", avg));
    let brightest = summary.brightest.map_or_else(
        || NOT_APPLICABLE.to_string(),
        |b| format!("{} ({:.2})", b.planet, b.value),
    );

    let lines = [
        format!("Planets calculated:    {}", summary.planets_calculated),
        format!("Julian date:           {:.3}", summary.julian_date),
        format!("Avg geo distance:      {}", avg_geo),
        format!(
            "Avg helio distance:    {:.3} AU",
            summary.average_heliocentric_distance
        ),
        format!("Brightest:             {}", brightest),
        format!(
            "Helio lon range:       {:.1}°",
            summary.heliocentric_longitude_range
        ),
        format!(
            "Max helio latitude:    ±{:.2}°",
            summary.max_heliocentric_latitude
        ),
        format!(
            "Farthest from Sun:     {} ({:.1} AU)",
            summary.farthest_from_sun.planet, summary.farthest_from_sun.value
        ),
    ];

    let mut out = String::new();
    for line in lines {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Render a full text report: timestamp line, table and optional summary
pub fn render_report(snapshot: &Snapshot, systems: &[CoordinateSystem]) -> String {
    let mut out = format!("Calculated for: {}\n", snapshot.time.utc_iso());
    if !snapshot.within_accuracy_window {
        out.push_str("Warning: outside the 2020-2030 accuracy window, values are extrapolated\n");
    }
    out.push('\n');
    out.push_str(&render_table(snapshot, systems));
    if let Some(summary) = &snapshot.summary {
        out.push('\n');
        out.push_str(&render_summary(summary));
    }
    out
}
