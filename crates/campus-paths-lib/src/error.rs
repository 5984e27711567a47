use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the campus paths library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when an operation references a node that is not registered in the graph.
    #[error("unknown node: {node}")]
    UnknownNode { node: String },

    /// Raised when a node already holds an edge with the same label and target.
    #[error("edge ({from}, {label}, {to}) already exists")]
    DuplicateEdge {
        from: String,
        to: String,
        label: String,
    },

    /// Raised when removing an edge that the node does not hold.
    #[error("edge ({from}, {label}, {to}) does not exist")]
    MissingEdge {
        from: String,
        to: String,
        label: String,
    },

    /// Raised when a building short id could not be found on the campus.
    #[error("unknown building: {id}{}", building_hint(.suggestions))]
    UnknownBuilding {
        id: String,
        suggestions: Vec<String>,
    },

    /// Raised when no route could be found between two buildings.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when a connection row carries a negative or non-finite distance.
    #[error("invalid distance {distance} on connection ({origin_x}, {origin_y}) -> ({dest_x}, {dest_y})")]
    InvalidDistance {
        distance: f64,
        origin_x: f64,
        origin_y: f64,
        dest_x: f64,
        dest_y: f64,
    },

    /// Raised when a dataset file does not exist at the resolved path.
    #[error("dataset file not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the campus dataset")]
    ProjectDirsUnavailable,

    /// Raised when a line of a membership file does not have exactly two fields.
    #[error("malformed data on line {line}: {message}")]
    MalformedData { line: u64, message: String },

    /// Wrapper for CSV/TSV parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Hint appended to an unknown building id, e.g. ` (did you mean CSE or EEB?)`.
fn building_hint(candidates: &[String]) -> String {
    match candidates {
        [] => String::new(),
        [only] => format!(" (did you mean {only}?)"),
        [others @ .., last] => format!(" (did you mean {} or {last}?)", others.join(", ")),
    }
}
