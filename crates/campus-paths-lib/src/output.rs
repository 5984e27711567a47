use std::fmt::Write;

use serde::Serialize;

use crate::location::Coordinate;
use crate::route::{Heading, Route};

/// Endpoint within a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteEndpoint {
    pub id: String,
    pub name: String,
    pub x: f64,
    pub y: f64,
}

/// Step taken during traversal of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub heading: Heading,
    pub distance: f64,
    pub x: f64,
    pub y: f64,
}

/// Structured representation of a route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub start: RouteEndpoint,
    pub goal: RouteEndpoint,
    pub legs: usize,
    pub total_distance: f64,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`Route`] into a summary with headings for every leg.
    pub fn from_route(route: &Route) -> Self {
        let steps = route
            .legs()
            .into_iter()
            .enumerate()
            .map(|(index, leg)| RouteStep {
                index: index + 1,
                heading: leg.heading,
                distance: leg.distance,
                x: leg.to.x,
                y: leg.to.y,
            })
            .collect::<Vec<_>>();

        Self {
            start: endpoint(&route.start.short_id, &route.start.long_name, route.start.coordinate),
            goal: endpoint(&route.goal.short_id, &route.goal.long_name, route.goal.coordinate),
            legs: steps.len(),
            total_distance: route.total_distance(),
            steps,
        }
    }

    /// Render the turn-by-turn walking directions.
    ///
    /// Distances and coordinates are printed as whole feet, with halves
    /// rounded away from zero.
    pub fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Path from {} to {}:",
            self.start.name, self.goal.name
        );
        for step in &self.steps {
            let _ = writeln!(
                buffer,
                "\tWalk {} feet {} to ({}, {})",
                whole_feet(step.distance),
                step.heading,
                whole_feet(step.x),
                whole_feet(step.y)
            );
        }
        let _ = writeln!(
            buffer,
            "Total distance: {} feet",
            whole_feet(self.total_distance)
        );
        buffer
    }

    /// Serialise the summary as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn whole_feet(value: f64) -> String {
    format!("{:.0}", value.round())
}

fn endpoint(id: &str, name: &str, coordinate: Coordinate) -> RouteEndpoint {
    RouteEndpoint {
        id: id.to_string(),
        name: name.to_string(),
        x: coordinate.x,
        y: coordinate.y,
    }
}

/// Render the building directory as `\tID: Long Name` lines.
pub fn render_buildings<'a>(buildings: impl IntoIterator<Item = (&'a String, &'a String)>) -> String {
    let mut buffer = String::from("Buildings:\n");
    for (id, name) in buildings {
        let _ = writeln!(buffer, "\t{id}: {name}");
    }
    buffer
}
