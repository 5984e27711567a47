use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

use serde::Serialize;

/// Walking distance carried as an edge weight.
///
/// Wraps an `f64` with a total order so it can key ordered collections and
/// drive the search queue.
#[derive(Copy, Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct Distance(f64);

impl Distance {
    pub const ZERO: Distance = Distance(0.0);

    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Distance {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Distance {}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Add for Distance {
    type Output = Distance;

    fn add(self, rhs: Self) -> Self::Output {
        Distance(self.0 + rhs.0)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Planar position of a location on the campus map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance from the origin.
    pub fn squared_norm(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Bit-exact lookup key. Negative zero is folded into positive zero so
    /// both spellings of the same point resolve to one entry.
    pub(crate) fn lookup_key(&self) -> (u64, u64) {
        ((self.x + 0.0).to_bits(), (self.y + 0.0).to_bits())
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Named point on the campus. Anonymous waypoints carry empty names.
#[derive(Debug, Clone)]
pub struct Location {
    pub short_id: String,
    pub long_name: String,
    pub coordinate: Coordinate,
}

impl Location {
    pub fn new(
        short_id: impl Into<String>,
        long_name: impl Into<String>,
        coordinate: Coordinate,
    ) -> Self {
        Self {
            short_id: short_id.into(),
            long_name: long_name.into(),
            coordinate,
        }
    }

    /// Graph-only waypoint synthesized for a path endpoint that is not a building.
    pub fn waypoint(coordinate: Coordinate) -> Self {
        Self::new(String::new(), String::new(), coordinate)
    }

    pub fn is_waypoint(&self) -> bool {
        self.short_id.is_empty()
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Location {}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Location {
    /// Short id first; ties fall back to the squared distance from the origin
    /// (nearer first), then to the raw coordinates.
    fn cmp(&self, other: &Self) -> Ordering {
        self.short_id
            .cmp(&other.short_id)
            .then_with(|| {
                self.coordinate
                    .squared_norm()
                    .total_cmp(&other.coordinate.squared_norm())
            })
            .then_with(|| self.coordinate.x.total_cmp(&other.coordinate.x))
            .then_with(|| self.coordinate.y.total_cmp(&other.coordinate.y))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_waypoint() {
            write!(f, "{}", self.coordinate)
        } else {
            f.write_str(&self.short_id)
        }
    }
}
