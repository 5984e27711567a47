//! Dataset location and parsing.
//!
//! A campus dataset is a pair of tab-separated files living in one
//! directory: `campus_buildings.tsv` with the header
//! `shortId longName x y`, and `campus_paths.tsv` with the header
//! `originX originY destX destY distance`.

use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::affinity::Membership;
use crate::campus::{Campus, ConnectionRow, LocationRow};
use crate::error::{Error, Result};

/// Default filename for the building table.
pub const BUILDINGS_FILENAME: &str = "campus_buildings.tsv";

/// Default filename for the walking path table.
pub const PATHS_FILENAME: &str = "campus_paths.tsv";

/// Environment variable overriding the dataset directory.
pub const DATA_DIR_ENV: &str = "CAMPUS_PATHS_DATA_DIR";

/// Paths to the dataset files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub buildings: PathBuf,
    pub paths: PathBuf,
}

impl DatasetPaths {
    /// Default file names inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            buildings: dir.join(BUILDINGS_FILENAME),
            paths: dir.join(PATHS_FILENAME),
        }
    }

    fn ensure_exists(self) -> Result<Self> {
        for path in [&self.buildings, &self.paths] {
            if !path.is_file() {
                return Err(Error::DatasetNotFound { path: path.clone() });
            }
        }
        Ok(self)
    }
}

/// Resolve the default dataset directory using platform-specific project directories.
pub fn default_data_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "campus-paths", "campus-paths")
        .ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Locate the dataset files.
///
/// The resolution order is:
/// 1. Explicit `target` directory when provided.
/// 2. `CAMPUS_PATHS_DATA_DIR` environment variable.
/// 3. Platform-specific project data directory.
///
/// Fails with [`Error::DatasetNotFound`] when either file is missing.
pub fn resolve_dataset(target: Option<&Path>) -> Result<DatasetPaths> {
    let dir = if let Some(explicit) = target {
        explicit.to_path_buf()
    } else if let Some(env_path) = env::var_os(DATA_DIR_ENV) {
        PathBuf::from(env_path)
    } else {
        default_data_dir()?
    };

    debug!(dir = %dir.display(), "resolved dataset directory");
    DatasetPaths::in_dir(&dir).ensure_exists()
}

/// Read both dataset files and build the campus.
pub fn load_campus(paths: &DatasetPaths) -> Result<Campus> {
    let locations = read_locations(&paths.buildings)?;
    let connections = read_connections(&paths.paths)?;
    debug!(
        buildings = locations.len(),
        connections = connections.len(),
        "parsed campus dataset"
    );
    Campus::from_rows(&locations, &connections)
}

pub fn read_locations(path: &Path) -> Result<Vec<LocationRow>> {
    parse_locations(File::open(path)?)
}

pub fn read_connections(path: &Path) -> Result<Vec<ConnectionRow>> {
    parse_connections(File::open(path)?)
}

/// Parse building rows from a tab-separated reader with a header line.
pub fn parse_locations<R: Read>(reader: R) -> Result<Vec<LocationRow>> {
    parse_table(reader)
}

/// Parse walking connection rows from a tab-separated reader with a header line.
pub fn parse_connections<R: Read>(reader: R) -> Result<Vec<ConnectionRow>> {
    parse_table(reader)
}

fn parse_table<R: Read, T: DeserializeOwned>(reader: R) -> Result<Vec<T>> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .trim(Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv_reader.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

pub fn read_memberships(path: &Path) -> Result<Vec<Membership>> {
    parse_memberships(File::open(path)?)
}

/// Parse `entity<TAB>label` lines.
///
/// Lines starting with `#` and blank lines are ignored and double quotes are
/// stripped. Any other line must contain exactly one tab.
pub fn parse_memberships<R: Read>(reader: R) -> Result<Vec<Membership>> {
    let mut memberships = Vec::new();

    for (index, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }

        let line = line.replace('"', "");
        let fields: Vec<&str> = line.split('\t').collect();
        match fields.as_slice() {
            [entity, label] if !entity.is_empty() && !label.is_empty() => {
                memberships.push(Membership::new(*entity, *label));
            }
            _ => {
                return Err(Error::MalformedData {
                    line: index as u64 + 1,
                    message: format!("line should contain exactly one tab: {line}"),
                });
            }
        }
    }

    Ok(memberships)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_parser_skips_comments_and_quotes() {
        let input = "# header\n\"Ann\"\t\"Book 1\"\n\nBob\tBook 1\n";
        let rows = parse_memberships(input.as_bytes()).expect("parses");
        assert_eq!(
            rows,
            vec![
                Membership::new("Ann", "Book 1"),
                Membership::new("Bob", "Book 1")
            ]
        );
    }

    #[test]
    fn membership_parser_reports_line_number() {
        let input = "Ann\tBook\nBob Book\n";
        let error = parse_memberships(input.as_bytes()).expect_err("malformed");
        assert!(matches!(error, Error::MalformedData { line: 2, .. }));
    }

    #[test]
    fn location_table_uses_header_names() {
        let input = "shortId\tlongName\tx\ty\nB1\tBuilding1\t1.1\t1.1\n";
        let rows = parse_locations(input.as_bytes()).expect("parses");
        assert_eq!(
            rows,
            vec![LocationRow {
                short_id: "B1".to_string(),
                long_name: "Building1".to_string(),
                x: 1.1,
                y: 1.1,
            }]
        );
    }

    #[test]
    fn connection_table_rejects_bad_numbers() {
        let input = "originX\toriginY\tdestX\tdestY\tdistance\n1\t2\t3\tfour\t5\n";
        let error = parse_connections(input.as_bytes()).expect_err("bad float");
        assert!(matches!(error, Error::Csv(_)));
    }
}
