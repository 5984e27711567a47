use std::f64::consts::PI;
use std::fmt;

use serde::Serialize;

use crate::location::{Coordinate, Location};

/// Compass direction of a walking leg.
///
/// Map coordinates grow downwards on the y axis, so a leg with a decreasing
/// `y` heads north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Heading {
    E,
    NE,
    N,
    NW,
    W,
    SW,
    S,
    SE,
}

impl Heading {
    /// Heading of the straight line from `from` to `to`, split into eight
    /// sectors of π/4 centred on the compass points.
    pub fn between(from: &Coordinate, to: &Coordinate) -> Self {
        Self::from_angle(-(to.y - from.y).atan2(to.x - from.x))
    }

    /// Sector for a counter-clockwise angle in radians, `0` pointing east.
    ///
    /// Boundaries at odd multiples of π/8 belong to E, N, S and W; the
    /// diagonal sectors are open.
    fn from_angle(theta: f64) -> Self {
        let sector = PI / 8.0;

        if (-sector..=sector).contains(&theta) {
            Heading::E
        } else if theta > sector && theta < 3.0 * sector {
            Heading::NE
        } else if (3.0 * sector..=5.0 * sector).contains(&theta) {
            Heading::N
        } else if theta > 5.0 * sector && theta < 7.0 * sector {
            Heading::NW
        } else if theta < -sector && theta > -3.0 * sector {
            Heading::SE
        } else if (-5.0 * sector..=-3.0 * sector).contains(&theta) {
            Heading::S
        } else if theta < -5.0 * sector && theta > -7.0 * sector {
            Heading::SW
        } else {
            Heading::W
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Heading::E => "E",
            Heading::NE => "NE",
            Heading::N => "N",
            Heading::NW => "NW",
            Heading::W => "W",
            Heading::SW => "SW",
            Heading::S => "S",
            Heading::SE => "SE",
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Destination of a single leg together with the distance walked to reach it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Waypoint {
    pub x: f64,
    pub y: f64,
    pub leg_distance: f64,
}

impl Waypoint {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.x, self.y)
    }
}

/// One turn-by-turn instruction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Leg {
    pub from: Coordinate,
    pub to: Coordinate,
    pub distance: f64,
    pub heading: Heading,
}

/// Walking route between two buildings.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub start: Location,
    pub goal: Location,
    pub waypoints: Vec<Waypoint>,
}

impl Route {
    /// Number of legs in the route.
    pub fn leg_count(&self) -> usize {
        self.waypoints.len()
    }

    pub fn total_distance(&self) -> f64 {
        self.waypoints.iter().map(|waypoint| waypoint.leg_distance).sum()
    }

    /// Pair each waypoint with the point it is walked from. The first leg
    /// starts at the start building.
    pub fn legs(&self) -> Vec<Leg> {
        let mut previous = self.start.coordinate;
        self.waypoints
            .iter()
            .map(|waypoint| {
                let to = waypoint.coordinate();
                let leg = Leg {
                    from: previous,
                    to,
                    distance: waypoint.leg_distance,
                    heading: Heading::between(&previous, &to),
                };
                previous = to;
                leg
            })
            .collect()
    }
}
