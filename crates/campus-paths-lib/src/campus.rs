use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;
use strsim::normalized_levenshtein;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph, Node};
use crate::location::{Coordinate, Distance, Location};
use crate::path::shortest_path;
use crate::route::{Route, Waypoint};

/// Minimum similarity for an id to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.5;

/// Maximum number of suggestions attached to an unknown building error.
const MAX_SUGGESTIONS: usize = 3;

/// Building row produced by the dataset parser.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRow {
    pub short_id: String,
    pub long_name: String,
    pub x: f64,
    pub y: f64,
}

/// Directed walking connection between two map coordinates.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionRow {
    pub origin_x: f64,
    pub origin_y: f64,
    pub dest_x: f64,
    pub dest_y: f64,
    pub distance: f64,
}

impl ConnectionRow {
    fn origin(&self) -> Coordinate {
        Coordinate::new(self.origin_x, self.origin_y)
    }

    fn destination(&self) -> Coordinate {
        Coordinate::new(self.dest_x, self.dest_y)
    }
}

/// In-memory campus map: buildings, anonymous waypoints, and the walking
/// graph between them.
#[derive(Debug, Clone, Default)]
pub struct Campus {
    graph: Graph<Location, Distance>,
    buildings: BTreeMap<String, Location>,
    by_coordinate: HashMap<(u64, u64), Location>,
}

impl Campus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a campus from parsed rows.
    pub fn from_rows(locations: &[LocationRow], connections: &[ConnectionRow]) -> Result<Self> {
        let mut campus = Self::new();
        campus.load(locations, connections)?;
        Ok(campus)
    }

    /// Replace the campus contents with the given rows.
    ///
    /// Connection endpoints that do not match a building coordinate become
    /// anonymous waypoints. Repeated connection rows are skipped. On error the
    /// campus is left empty.
    pub fn load(&mut self, locations: &[LocationRow], connections: &[ConnectionRow]) -> Result<()> {
        self.clear();

        for row in locations {
            let location = Location::new(
                row.short_id.clone(),
                row.long_name.clone(),
                Coordinate::new(row.x, row.y),
            );
            self.graph.add_node(Node::new(location.clone()));
            self.by_coordinate
                .insert(location.coordinate.lookup_key(), location.clone());
            self.buildings.insert(location.short_id.clone(), location);
        }

        let mut skipped = 0usize;
        for row in connections {
            if !row.distance.is_finite() || row.distance < 0.0 {
                self.clear();
                return Err(Error::InvalidDistance {
                    distance: row.distance,
                    origin_x: row.origin_x,
                    origin_y: row.origin_y,
                    dest_x: row.dest_x,
                    dest_y: row.dest_y,
                });
            }

            let start = self.resolve_or_insert(row.origin());
            let end = self.resolve_or_insert(row.destination());
            let edge = Edge::new(Distance::new(row.distance), end.clone());

            let duplicate = self
                .graph
                .node(&start)
                .is_some_and(|node| node.has_edge(&edge));
            if duplicate {
                warn!(
                    from = %start,
                    to = %end,
                    distance = row.distance,
                    "skipping repeated connection"
                );
                skipped += 1;
                continue;
            }

            if let Err(error) = self.graph.add_edge(&start, end, Distance::new(row.distance)) {
                self.clear();
                return Err(error);
            }
        }

        info!(
            buildings = self.buildings.len(),
            nodes = self.graph.len(),
            edges = self.graph.edge_count(),
            skipped,
            "campus loaded"
        );
        Ok(())
    }

    fn resolve_or_insert(&mut self, coordinate: Coordinate) -> Location {
        if let Some(existing) = self.by_coordinate.get(&coordinate.lookup_key()) {
            return existing.clone();
        }

        let waypoint = Location::waypoint(coordinate);
        self.graph.add_node(Node::new(waypoint.clone()));
        self.by_coordinate
            .insert(coordinate.lookup_key(), waypoint.clone());
        waypoint
    }

    fn clear(&mut self) {
        self.graph.clear();
        self.buildings.clear();
        self.by_coordinate.clear();
    }

    /// Compute the shortest walking route between two buildings.
    ///
    /// Unknown ids fail with [`Error::UnknownBuilding`], carrying close matches
    /// as suggestions. Known buildings without a connecting path fail with
    /// [`Error::RouteNotFound`].
    pub fn find_route(&self, start: &str, goal: &str) -> Result<Route> {
        let start_location = self.resolve_building(start)?;
        let goal_location = self.resolve_building(goal)?;

        let Some(edges) = shortest_path(&self.graph, start_location, goal_location)? else {
            return Err(Error::RouteNotFound {
                start: start.to_string(),
                goal: goal.to_string(),
            });
        };

        let waypoints = edges
            .iter()
            .map(|edge| Waypoint {
                x: edge.target().coordinate.x,
                y: edge.target().coordinate.y,
                leg_distance: edge.weight().value(),
            })
            .collect::<Vec<_>>();
        debug!(start, goal, legs = waypoints.len(), "route computed");

        Ok(Route {
            start: start_location.clone(),
            goal: goal_location.clone(),
            waypoints,
        })
    }

    fn resolve_building(&self, id: &str) -> Result<&Location> {
        self.buildings.get(id).ok_or_else(|| Error::UnknownBuilding {
            id: id.to_string(),
            suggestions: self.fuzzy_building_matches(id, MAX_SUGGESTIONS),
        })
    }

    /// Building ids most similar to `id`, best match first.
    pub fn fuzzy_building_matches(&self, id: &str, limit: usize) -> Vec<String> {
        let needle = id.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .buildings
            .keys()
            .map(|candidate| {
                (
                    normalized_levenshtein(&needle, &candidate.to_lowercase()),
                    candidate.as_str(),
                )
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.to_string())
            .collect()
    }

    /// Mapping of building short id to long name, ordered by short id.
    pub fn buildings_sorted_by_id(&self) -> BTreeMap<String, String> {
        self.buildings
            .values()
            .map(|building| (building.short_id.clone(), building.long_name.clone()))
            .collect()
    }

    pub fn long_name(&self, short_id: &str) -> Option<&str> {
        self.buildings
            .get(short_id)
            .map(|building| building.long_name.as_str())
    }

    pub fn location(&self, short_id: &str) -> Option<&Location> {
        self.buildings.get(short_id)
    }

    /// Walking graph backing the campus.
    pub fn graph(&self) -> &Graph<Location, Distance> {
        &self.graph
    }
}
