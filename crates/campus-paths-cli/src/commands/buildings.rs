//! Buildings command handler for listing the campus directory.

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use campus_paths_lib::{render_buildings, Campus};

use crate::commands::load_dataset;
use crate::output::{write_json, OutputFormat};

/// One entry of the building directory.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BuildingEntry {
    pub id: String,
    pub name: String,
}

/// Handle the buildings subcommand.
pub fn handle_buildings(target: Option<&Path>, format: OutputFormat) -> Result<()> {
    let campus = load_dataset(target)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_buildings(&campus, format, &mut out)
}

/// Write the building directory, ordered by short id.
pub fn write_buildings<W: Write>(campus: &Campus, format: OutputFormat, out: &mut W) -> Result<()> {
    let buildings = campus.buildings_sorted_by_id();
    if format.is_json() {
        let entries: Vec<BuildingEntry> = buildings
            .into_iter()
            .map(|(id, name)| BuildingEntry { id, name })
            .collect();
        return write_json(out, &entries);
    }

    out.write_all(render_buildings(&buildings).as_bytes())?;
    Ok(())
}
