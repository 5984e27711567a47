// Module exports for CLI subcommands.
//
// Each module handles one subcommand; main.rs only parses arguments and
// dispatches here.

pub mod buildings;
pub mod connect;
pub mod route;
pub mod shell;

use std::path::Path;

use anyhow::{Context, Result};

use campus_paths_lib::{load_campus, resolve_dataset, Campus};

/// Locate and load the campus dataset.
pub fn load_dataset(target: Option<&Path>) -> Result<Campus> {
    let paths = resolve_dataset(target).context("failed to locate the campus dataset")?;
    load_campus(&paths)
        .with_context(|| format!("failed to load dataset from {}", paths.buildings.display()))
}
