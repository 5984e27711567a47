//! Route command handler for walking directions between two buildings.

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;

use campus_paths_lib::{Campus, RouteSummary};

use crate::commands::load_dataset;
use crate::output::{write_json, OutputFormat};

/// Handle the route subcommand.
pub fn handle_route(target: Option<&Path>, from: &str, to: &str, format: OutputFormat) -> Result<()> {
    let campus = load_dataset(target)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_route(&campus, from, to, format, &mut out)
}

/// Plan the route and write it in the requested format.
///
/// Unknown buildings and unreachable goals surface as library errors.
pub fn write_route<W: Write>(
    campus: &Campus,
    from: &str,
    to: &str,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let route = campus.find_route(from, to)?;
    let summary = RouteSummary::from_route(&route);

    match format {
        OutputFormat::Text => out.write_all(summary.render_plain().as_bytes())?,
        OutputFormat::Json => write_json(out, &summary)?,
    }
    Ok(())
}
