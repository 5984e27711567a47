//! Campus paths library entry points.
//!
//! This crate exposes a generic directed multigraph, a deterministic
//! shortest-path search over it, and the campus layer that maps buildings and
//! walking paths onto the graph. Higher-level consumers (the CLI) should only
//! depend on the functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod affinity;
pub mod campus;
pub mod dataset;
pub mod error;
pub mod graph;
pub mod location;
pub mod output;
pub mod path;
pub mod route;

pub use affinity::{build_graph, build_label_graph, weigh_label_graph, Membership};
pub use campus::{Campus, ConnectionRow, LocationRow};
pub use dataset::{
    default_data_dir, load_campus, parse_connections, parse_locations, parse_memberships,
    read_connections, read_locations, read_memberships, resolve_dataset, DatasetPaths,
};
pub use error::{Error, Result};
pub use graph::{Edge, EdgeLabel, Graph, Node, NodeKey};
pub use location::{Coordinate, Distance, Location};
pub use output::{render_buildings, RouteEndpoint, RouteStep, RouteSummary};
pub use path::{path_cost, shortest_path, PathWeight};
pub use route::{Heading, Leg, Route, Waypoint};
